// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_TTL_DAYS: u32 = 7;
const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Directory for the file-backed store. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// How long a login session stays valid
    pub session_ttl_days: u32,
    /// PBKDF2 rounds for credential hashing
    pub pbkdf2_iterations: u32,

    // --- Secrets ---
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let jwt_signing_key = env::var("JWT_SIGNING_KEY")
            .map(|v| v.trim().to_string())
            .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?;
        if jwt_signing_key.len() < 32 {
            return Err(ConfigError::Invalid(
                "JWT_SIGNING_KEY",
                "must be at least 32 bytes".to_string(),
            ));
        }

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: parse_or_default("PORT", DEFAULT_PORT)?,
            data_dir: env::var("DATA_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            session_ttl_days: parse_or_default("SESSION_TTL_DAYS", DEFAULT_SESSION_TTL_DAYS)?,
            pbkdf2_iterations: parse_or_default("PBKDF2_ITERATIONS", DEFAULT_PBKDF2_ITERATIONS)?,
            jwt_signing_key: jwt_signing_key.into_bytes(),
        })
    }

    /// Config for tests: in-memory store, cheap hashing.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: DEFAULT_PORT,
            data_dir: None,
            session_ttl_days: DEFAULT_SESSION_TTL_DAYS,
            pbkdf2_iterations: 1_000,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!!".to_vec(),
        }
    }
}

fn parse_or_default<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, format!("could not parse '{}'", raw))),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
