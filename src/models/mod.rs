// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Data models for the application.

pub mod age;
pub mod consumption;
pub mod credential;
pub mod product;
pub mod report;
pub mod status;

pub use age::AgeYears;
pub use consumption::ConsumptionRecord;
pub use credential::Credential;
pub use product::{Product, ProductSummary};
pub use report::{ConsumptionResult, DailyEntry, Projection, ProjectionPoint, WeeklySummary};
pub use status::Status;
