// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Sodium Tracker API Server
//!
//! Keeps weekly sodium totals for instant-noodle eaters and reports how
//! close each user is to the limit for their age.

use sodium_tracker::{
    config::Config,
    db::{FileStore, KeyValueStore, MemoryStore},
    time_utils::SystemClock,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Sodium Tracker API");

    // Pick the backing store
    let store: Arc<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => {
            let store = FileStore::open(dir)?;
            tracing::info!(path = %store.dir().display(), "Using file store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATA_DIR not set, data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store, Arc::new(SystemClock))?);

    // Build router
    let app = sodium_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sodium_tracker=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
