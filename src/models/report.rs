// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Results handed to the presentation layer.

use crate::models::Status;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Outcome of recording one consumption event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ConsumptionResult {
    pub status: Status,
    pub status_label: String,
    /// Today's total after this event (mg)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub daily_total: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub weekly_total: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub weekly_limit: u64,
    /// Further packages of the same product that stay within the weekly limit
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub max_additional_packages: u64,
    /// Sodium added by this event (mg)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub sodium_added: u64,
    /// Monday of the tracked week (YYYY-MM-DD)
    pub week_start: String,
    pub message: String,
    pub education: String,
    pub alternatives: String,
    pub projection: Projection,
}

/// Read-only view of the current week.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklySummary {
    pub week_start: String,
    pub status: Status,
    pub status_label: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub daily_total: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub weekly_total: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub weekly_limit: u64,
    /// Present when the summary was requested for a specific product
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub max_additional_packages: Option<u64>,
    /// Per-day totals, oldest first
    pub days: Vec<DailyEntry>,
}

/// Sodium consumed on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailyEntry {
    pub date: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub sodium_mg: u64,
}

/// Chart series: cumulative sodium for 1..=10 packages of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Projection {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub weekly_limit: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub sodium_per_package: u64,
    pub points: Vec<ProjectionPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProjectionPoint {
    pub packages: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub sodium_mg: u64,
}
