// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Typed operations over the key-value store.
//!
//! Provides high-level operations for:
//! - Consumption records (`user_<username>`)
//! - Credentials (`password_<username>`)

use crate::db::{keys, KeyValueStore};
use crate::error::AppError;
use crate::models::{ConsumptionRecord, Credential};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Typed handle over a shared key-value store.
#[derive(Clone)]
pub struct Db {
    store: Arc<dyn KeyValueStore>,
}

impl Db {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    // ─── Consumption Records ─────────────────────────────────────

    pub fn get_consumption(&self, username: &str) -> Result<Option<ConsumptionRecord>, AppError> {
        self.get_json(&keys::user(username))
    }

    pub fn set_consumption(
        &self,
        username: &str,
        record: &ConsumptionRecord,
    ) -> Result<(), AppError> {
        self.set_json(&keys::user(username), record)
    }

    // ─── Credentials ─────────────────────────────────────────────

    pub fn get_credential(&self, username: &str) -> Result<Option<Credential>, AppError> {
        self.get_json(&keys::password(username))
    }

    pub fn set_credential(&self, username: &str, credential: &Credential) -> Result<(), AppError> {
        self.set_json(&keys::password(username), credential)
    }

    // ─── Helper Methods ──────────────────────────────────────────

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            tracing::warn!(key, error = %e, "Stored document is unreadable");
            AppError::StorageUnavailable(format!("Corrupt document at '{}': {}", key, e))
        })
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize {}: {}", key, e)))?;
        self.store.set(key, &raw)
    }
}
