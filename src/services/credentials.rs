// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Registration and login verification.
//!
//! Passwords are stored as salted PBKDF2-HMAC-SHA256 hashes; the raw
//! password never reaches the key-value store.

use crate::db::Db;
use crate::error::{AppError, Result};
use crate::models::Credential;
use crate::services::user_locks::UserLocks;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use std::num::NonZeroU32;

const SALT_LEN: usize = 16;
const HASH_LEN: usize = ring::digest::SHA256_OUTPUT_LEN;
pub const MAX_USERNAME_LEN: usize = 64;

/// Credential storage and verification.
#[derive(Clone)]
pub struct CredentialService {
    db: Db,
    iterations: NonZeroU32,
    rng: SystemRandom,
    user_locks: UserLocks,
}

impl CredentialService {
    pub fn new(db: Db, iterations: u32) -> Result<Self> {
        let iterations = NonZeroU32::new(iterations).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("PBKDF2 iteration count must be non-zero"))
        })?;
        Ok(Self {
            db,
            iterations,
            rng: SystemRandom::new(),
            user_locks: UserLocks::new(),
        })
    }

    /// Register a new user.
    ///
    /// Fails with `InvalidInput` for empty fields or an already registered username.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        validate_username(username)?;
        if password.is_empty() {
            return Err(AppError::InvalidInput("Password is required".to_string()));
        }

        let credential = self.hash_password(password)?;

        // Existence check and write are one unit per username.
        self.user_locks.with_lock(username, || {
            if self.db.get_credential(username)?.is_some() {
                tracing::info!(username, "Registration rejected: username taken");
                return Err(AppError::InvalidInput(format!(
                    "Username '{}' is already registered",
                    username
                )));
            }
            self.db.set_credential(username, &credential)
        })?;

        tracing::info!(username, "User registered");
        Ok(())
    }

    fn hash_password(&self, password: &str) -> Result<Credential> {
        let mut salt = [0u8; SALT_LEN];
        self.rng
            .fill(&mut salt)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to generate salt")))?;

        let mut hash = [0u8; HASH_LEN];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            self.iterations,
            &salt,
            password.as_bytes(),
            &mut hash,
        );

        Ok(Credential {
            salt: BASE64.encode(salt),
            hash: BASE64.encode(hash),
            iterations: self.iterations.get(),
        })
    }

    /// Check a username/password pair.
    ///
    /// Missing registration and wrong password both yield `AuthFailure`.
    pub fn verify(&self, username: &str, password: &str) -> Result<()> {
        let Some(credential) = self.db.get_credential(username)? else {
            tracing::info!(username, "Login failed: not registered");
            return Err(AppError::AuthFailure);
        };

        let salt = BASE64
            .decode(&credential.salt)
            .map_err(|e| AppError::StorageUnavailable(format!("Corrupt credential salt: {}", e)))?;
        let hash = BASE64
            .decode(&credential.hash)
            .map_err(|e| AppError::StorageUnavailable(format!("Corrupt credential hash: {}", e)))?;
        let iterations = NonZeroU32::new(credential.iterations).ok_or_else(|| {
            AppError::StorageUnavailable("Corrupt credential iteration count".to_string())
        })?;

        pbkdf2::verify(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            &salt,
            password.as_bytes(),
            &hash,
        )
        .map_err(|_| {
            tracing::info!(username, "Login failed: password mismatch");
            AppError::AuthFailure
        })
    }
}

fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(AppError::InvalidInput("Username is required".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::InvalidInput(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }
    if username.chars().any(char::is_control) {
        return Err(AppError::InvalidInput(
            "Username contains control characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn service() -> (CredentialService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let service = CredentialService::new(Db::new(store.clone()), 1_000).unwrap();
        (service, store)
    }

    #[test]
    fn test_register_then_verify() {
        let (service, _) = service();
        service.register("siti", "rahasia").unwrap();

        assert!(service.verify("siti", "rahasia").is_ok());
        assert!(matches!(
            service.verify("siti", "wrong"),
            Err(AppError::AuthFailure)
        ));
    }

    #[test]
    fn test_unknown_user_is_auth_failure() {
        let (service, _) = service();
        assert!(matches!(
            service.verify("ghost", "anything"),
            Err(AppError::AuthFailure)
        ));
    }

    #[test]
    fn test_password_not_stored_in_plaintext() {
        let (service, store) = service();
        service.register("budi", "hunter2-plaintext").unwrap();

        let raw = store.get("password_budi").unwrap().unwrap();
        assert!(!raw.contains("hunter2-plaintext"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let (service, store) = service();
        service.register("a", "same").unwrap();
        service.register("b", "same").unwrap();

        assert_ne!(
            store.get("password_a").unwrap(),
            store.get("password_b").unwrap()
        );
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let (service, _) = service();
        service.register("siti", "first").unwrap();

        let err = service.register("siti", "second").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        // Original password still works
        assert!(service.verify("siti", "first").is_ok());
    }

    #[test]
    fn test_empty_fields_rejected() {
        let (service, store) = service();
        assert!(matches!(
            service.register("", "pw"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            service.register("user", ""),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            service.register(&"x".repeat(65), "pw"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let store = Arc::new(MemoryStore::new());
        assert!(CredentialService::new(Db::new(store), 0).is_err());
    }
}
