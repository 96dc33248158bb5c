// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! In-process key-value store.

use crate::db::KeyValueStore;
use crate::error::AppError;
use dashmap::DashMap;

/// Key-value store held in memory. Contents are lost on restart.
#[derive(Debug)]
pub struct MemoryStore {
    entries: Option<DashMap<String, String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Some(DashMap::new()),
        }
    }

    /// A store that is never reachable. Every operation fails.
    pub fn new_offline() -> Self {
        Self { entries: None }
    }

    /// Number of stored keys (0 when offline).
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, DashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> Result<&DashMap<String, String>, AppError> {
        self.entries
            .as_ref()
            .ok_or_else(|| AppError::StorageUnavailable("store is offline".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries()?.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
