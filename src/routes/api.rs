// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! API routes for logged-in users.

use crate::error::{AppError, Result};
use crate::middleware::Session;
use crate::models::{AgeYears, ConsumptionResult, Product, ProductSummary, Projection, WeeklySummary};
use crate::routes::{parse_json, parse_query, run_blocking, validate};
use crate::services::{projection, weekly_limit, ConsumptionEvent};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require a session).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/products", get(list_products))
        .route("/api/consumption", post(record_consumption))
        .route("/api/summary", get(get_summary))
        .route("/api/projection", get(get_projection))
}

// ─── Session ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MeResponse {
    pub username: String,
}

async fn get_me(Extension(session): Extension<Session>) -> Json<MeResponse> {
    Json(MeResponse {
        username: session.username,
    })
}

// ─── Catalog ─────────────────────────────────────────────────

async fn list_products() -> Json<Vec<ProductSummary>> {
    Json(Product::ALL.into_iter().map(ProductSummary::from).collect())
}

// ─── Consumption ─────────────────────────────────────────────

/// One consumption form submission.
#[derive(Debug, Deserialize, Validate)]
pub struct ConsumptionRequest {
    #[validate(length(min = 1, max = 64, message = "product is required"))]
    pub product: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i64,
    pub age: i64,
}

/// Record packages eaten today and return the updated weekly status.
async fn record_consumption(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    payload: std::result::Result<Json<ConsumptionRequest>, JsonRejection>,
) -> Result<Json<ConsumptionResult>> {
    let request = parse_json(payload)?;
    validate(&request)?;
    let event = ConsumptionEvent::parse(&request.product, request.quantity, request.age)?;

    tracing::debug!(
        username = %session.username,
        product = %event.product,
        quantity = event.quantity,
        "Recording consumption"
    );

    let result = run_blocking(move || {
        state
            .accounting
            .record_consumption(&session.username, &event)
    })
    .await?;
    Ok(Json(result))
}

// ─── Summary & Projection ────────────────────────────────────

#[derive(Debug, Deserialize)]
struct WeekQuery {
    age: i64,
    /// Product used for the remaining-package allowance
    product: Option<String>,
}

impl WeekQuery {
    fn age(&self) -> Result<AgeYears> {
        AgeYears::try_from(self.age)
    }

    fn product(&self) -> Result<Option<Product>> {
        self.product
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(str::parse)
            .transpose()
    }
}

/// Current week status without recording anything.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    query: std::result::Result<Query<WeekQuery>, QueryRejection>,
) -> Result<Json<WeeklySummary>> {
    let query = parse_query(query)?;
    let (age, product) = (query.age()?, query.product()?);
    let summary = run_blocking(move || {
        state
            .accounting
            .weekly_summary(&session.username, age, product)
    })
    .await?;
    Ok(Json(summary))
}

/// Chart series for a product against the caller's weekly limit.
async fn get_projection(
    Extension(_session): Extension<Session>,
    query: std::result::Result<Query<WeekQuery>, QueryRejection>,
) -> Result<Json<Projection>> {
    let query = parse_query(query)?;
    let product = query
        .product()?
        .ok_or_else(|| AppError::InvalidInput("product is required".to_string()))?;
    Ok(Json(projection(weekly_limit(query.age()?), product)))
}
