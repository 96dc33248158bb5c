// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Middleware modules (sessions, security headers).

pub mod auth;
pub mod security;

pub use auth::{require_auth, Session};
