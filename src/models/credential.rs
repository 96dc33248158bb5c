// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Stored login credential.

use serde::{Deserialize, Serialize};

/// Salted password hash. Stored at `password_<username>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Random salt (base64)
    pub salt: String,
    /// PBKDF2-HMAC-SHA256 output (base64)
    pub hash: String,
    /// PBKDF2 rounds used for `hash`
    pub iterations: u32,
}
