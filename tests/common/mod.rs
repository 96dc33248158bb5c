// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use chrono::NaiveDate;
use sodium_tracker::config::Config;
use sodium_tracker::db::{KeyValueStore, MemoryStore};
use sodium_tracker::middleware::auth::create_jwt;
use sodium_tracker::routes::create_router;
use sodium_tracker::time_utils::FixedClock;
use sodium_tracker::AppState;
use std::sync::Arc;

/// Monday 2026-10-19, the first day of a tracked week.
#[allow(dead_code)]
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Everything a test needs to drive the app and inspect its side effects.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
    pub clock: Arc<FixedClock>,
    pub store: Arc<MemoryStore>,
}

/// Create a test app over an in-memory store with the clock at [`monday`].
#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    create_test_app_with_store(Arc::new(MemoryStore::new()))
}

/// Same as [`create_test_app`], with a custom frontend URL.
#[allow(dead_code)]
pub fn create_test_app_with_frontend_url(frontend_url: &str) -> TestApp {
    let mut config = Config::test_default();
    config.frontend_url = frontend_url.to_string();
    build(config, Arc::new(MemoryStore::new()))
}

/// Create a test app over the given in-memory store.
#[allow(dead_code)]
pub fn create_test_app_with_store(store: Arc<MemoryStore>) -> TestApp {
    build(Config::test_default(), store)
}

fn build(config: Config, store: Arc<MemoryStore>) -> TestApp {
    let clock = Arc::new(FixedClock::new(monday()));
    let kv: Arc<dyn KeyValueStore> = store.clone();
    let state = Arc::new(AppState::new(config, kv, clock.clone()).unwrap());

    TestApp {
        router: create_router(state.clone()),
        state,
        clock,
        store,
    }
}

/// Session token for `username`, signed with the test key.
#[allow(dead_code)]
pub fn create_test_jwt(state: &AppState, username: &str) -> String {
    create_jwt(username, &state.config.jwt_signing_key, 1).unwrap()
}

/// JSON request, optionally carrying a bearer token.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Body-less GET, optionally carrying a bearer token.
#[allow(dead_code)]
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
