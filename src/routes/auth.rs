// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Registration, login and logout routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, SESSION_COOKIE};
use crate::routes::{parse_json, run_blocking, validate};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// Username/password form.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginResponse {
    pub username: String,
    /// Same token as the session cookie, for clients that prefer a bearer header
    pub token: String,
}

/// Register a new username/password pair.
async fn register(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let request = parse_json(payload)?;
    validate(&request)?;

    let worker = state.clone();
    run_blocking(move || {
        worker
            .credentials
            .register(&request.username, &request.password)
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Registration successful. Please log in.".to_string(),
        }),
    ))
}

/// Verify credentials and start a session.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    payload: std::result::Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<LoginResponse>)> {
    let request = parse_json(payload)?;
    validate(&request)?;

    let worker = state.clone();
    let username = request.username.clone();
    run_blocking(move || worker.credentials.verify(&username, &request.password)).await?;

    let token = create_jwt(
        &request.username,
        &state.config.jwt_signing_key,
        state.config.session_ttl_days,
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(username = %request.username, "Login successful");

    let mut cookie = session_cookie(&state.config.frontend_url, token.clone());
    cookie.set_max_age(time::Duration::days(i64::from(
        state.config.session_ttl_days,
    )));

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            username: request.username,
            token,
        }),
    ))
}

/// End the session by expiring the cookie.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let removal = session_cookie(&state.config.frontend_url, String::new());
    (jar.remove(removal), StatusCode::NO_CONTENT)
}

/// Session cookie attributes shared by login and logout.
fn session_cookie(frontend_url: &str, value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(!is_local_origin(frontend_url))
        .build()
}

fn is_local_origin(url: &str) -> bool {
    url.starts_with("http://localhost") || url.starts_with("http://127.0.0.1")
}
