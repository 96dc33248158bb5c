// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! File-backed key-value store.
//!
//! Each key is one file in the data directory. File names are the
//! percent-encoded key, so arbitrary usernames cannot escape the directory.
//! Writes go to a temporary file that is renamed over the target.

use crate::db::KeyValueStore;
use crate::error::AppError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

const FILE_EXTENSION: &str = "json";

/// Distinguishes temporary files of concurrent writers.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Key-value store persisted as one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, AppError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::StorageUnavailable(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        tracing::info!(path = %dir.display(), "Opened file store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name = urlencoding::encode(key);
        self.dir.join(format!("{}.{}", name, FILE_EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::StorageUnavailable(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        let seq = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp = path.with_extension(format!(
            "{}.{}-{}.tmp",
            FILE_EXTENSION,
            std::process::id(),
            seq
        ));

        fs::write(&tmp, value).map_err(|e| {
            AppError::StorageUnavailable(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            AppError::StorageUnavailable(format!("Failed to replace {}: {}", path.display(), e))
        })?;

        tracing::debug!(key, path = %path.display(), "Wrote key");
        Ok(())
    }
}
