// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Services module - business logic layer.

pub mod accounting;
pub mod consumption_store;
pub mod credentials;
pub mod limits;
pub mod projection;
pub mod user_locks;

pub use accounting::{AccountingEngine, ConsumptionEvent};
pub use consumption_store::ConsumptionStore;
pub use credentials::CredentialService;
pub use limits::{daily_limit, weekly_limit};
pub use projection::projection;
pub use user_locks::UserLocks;
