// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing, non-numeric or unknown form fields. The user corrects and resubmits.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid age: {0} (must be zero or greater)")]
    InvalidAge(i64),

    /// Credential mismatch or missing registration.
    #[error("Invalid username or password")]
    AuthFailure,

    #[error("Authentication required")]
    Unauthorized,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable error code used in API responses.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::InvalidAge(_) => "invalid_age",
            AppError::AuthFailure => "auth_failure",
            AppError::Unauthorized => "unauthorized",
            AppError::StorageUnavailable(_) => "storage_unavailable",
            AppError::Internal(_) => "internal_error",
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone())),
            AppError::InvalidAge(_) => (StatusCode::BAD_REQUEST, Some(self.to_string())),
            AppError::AuthFailure => (StatusCode::UNAUTHORIZED, Some(self.to_string())),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, None),
            AppError::StorageUnavailable(msg) => {
                tracing::error!(error = %msg, "Storage unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = ErrorResponse {
            error: self.code().to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers and services
pub type Result<T> = std::result::Result<T, AppError>;
