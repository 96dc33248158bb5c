// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Sodium Tracker: weekly sodium accounting for instant-noodle eaters
//!
//! Users log packages of instant noodles; the service keeps per-day and
//! per-week sodium totals, compares them with an age-based limit and
//! reports a status, a remaining allowance and a projection series.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::{Db, KeyValueStore};
use services::{AccountingEngine, ConsumptionStore, CredentialService};
use std::sync::Arc;
use time_utils::Clock;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
    pub accounting: AccountingEngine,
    pub credentials: CredentialService,
}

impl AppState {
    /// Wire services over a key-value store and a clock.
    pub fn new(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> error::Result<Self> {
        let db = Db::new(store);
        let consumption_store = ConsumptionStore::new(db.clone(), clock.clone());
        let accounting = AccountingEngine::new(consumption_store, clock);
        let credentials = CredentialService::new(db.clone(), config.pbkdf2_iterations)?;

        Ok(Self {
            config,
            db,
            accounting,
            credentials,
        })
    }
}
