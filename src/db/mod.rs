// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Database layer: a string key-value store plus typed accessors.

pub mod file;
pub mod memory;
pub mod records;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use records::Db;

use crate::error::AppError;

/// Durable string-to-string store.
///
/// Any failure to reach the backing storage is reported as
/// [`AppError::StorageUnavailable`].
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Key layout.
pub mod keys {
    pub const USER_PREFIX: &str = "user_";
    pub const PASSWORD_PREFIX: &str = "password_";

    /// Consumption record key for a user.
    pub fn user(username: &str) -> String {
        format!("{}{}", USER_PREFIX, username)
    }

    /// Credential key for a user.
    pub fn password(username: &str) -> String {
        format!("{}{}", PASSWORD_PREFIX, username)
    }
}
