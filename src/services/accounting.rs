// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Weekly sodium accounting.
//!
//! One consumption event is applied as a single load → rollover → add →
//! save unit. Events for the same user are serialized with a per-user lock;
//! different users never contend.

use crate::error::{AppError, Result};
use crate::models::{AgeYears, ConsumptionResult, DailyEntry, Product, Status, WeeklySummary};
use crate::services::consumption_store::ConsumptionStore;
use crate::services::limits::weekly_limit;
use crate::services::projection::projection;
use crate::time_utils::{format_iso_date, Clock};
use crate::services::user_locks::UserLocks;
use std::sync::Arc;

pub const EDUCATION_TEXT: &str = "Too much sodium can cause water retention and high blood \
pressure. Choose lower-sodium instant noodles or alternatives such as fresh vegetables.";

pub const ALTERNATIVES_TEXT: &str = "Low-sodium foods: fruit, vegetables, unsalted meat, or \
homemade noodles.";

/// A validated consumption event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumptionEvent {
    pub product: Product,
    pub quantity: u32,
    pub age: AgeYears,
}

impl ConsumptionEvent {
    /// Validate raw form values.
    ///
    /// Fails with `InvalidInput` for an unknown product or a quantity below one,
    /// and with `InvalidAge` for a negative age.
    pub fn parse(product: &str, quantity: i64, age: i64) -> Result<Self> {
        let product: Product = product.parse()?;
        if quantity < 1 {
            return Err(AppError::InvalidInput("Quantity must be at least 1".to_string()));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| AppError::InvalidInput(format!("Quantity {} is too large", quantity)))?;
        let age = AgeYears::try_from(age)?;

        Ok(Self {
            product,
            quantity,
            age,
        })
    }

    /// Sodium contributed by this event (mg).
    pub fn sodium_added(&self) -> Result<u64> {
        self.product
            .sodium_mg()
            .checked_mul(u64::from(self.quantity))
            .ok_or_else(|| AppError::InvalidInput("Quantity is too large".to_string()))
    }
}

/// Applies consumption events and reports weekly status.
#[derive(Clone)]
pub struct AccountingEngine {
    store: ConsumptionStore,
    clock: Arc<dyn Clock>,
    user_locks: UserLocks,
}

impl AccountingEngine {
    pub fn new(store: ConsumptionStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            user_locks: UserLocks::new(),
        }
    }

    /// Record one consumption event for `username`.
    ///
    /// Nothing is persisted unless every step before the save succeeds.
    pub fn record_consumption(
        &self,
        username: &str,
        event: &ConsumptionEvent,
    ) -> Result<ConsumptionResult> {
        let per_package = event.product.sodium_mg();
        let sodium_added = event.sodium_added()?;
        let limit = weekly_limit(event.age);

        let (record, daily_total) = self.user_locks.with_lock(username, || {
            let today = self.clock.today();
            let mut record = self.store.rollover_at(self.store.load(username)?, today);
            let daily_total = record.add(today, sodium_added);
            self.store.save(username, &record)?;
            Ok::<_, AppError>((record, daily_total))
        })?;

        let weekly_total = record.weekly_total;
        let status = Status::classify(weekly_total, limit);

        tracing::info!(
            username,
            product = %event.product,
            quantity = event.quantity,
            sodium_added,
            daily_total,
            weekly_total,
            weekly_limit = limit,
            status = ?status,
            "Consumption recorded"
        );

        Ok(ConsumptionResult {
            status,
            status_label: status.label().to_string(),
            daily_total,
            weekly_total,
            weekly_limit: limit,
            max_additional_packages: max_additional_packages(weekly_total, limit, per_package),
            sodium_added,
            week_start: format_iso_date(record.week_start),
            message: compose_message(weekly_total, event.age, limit),
            education: EDUCATION_TEXT.to_string(),
            alternatives: ALTERNATIVES_TEXT.to_string(),
            projection: projection(limit, event.product),
        })
    }

    /// Current week for `username` without recording anything.
    ///
    /// A pending rollover is applied to the returned view only.
    pub fn weekly_summary(
        &self,
        username: &str,
        age: AgeYears,
        product: Option<Product>,
    ) -> Result<WeeklySummary> {
        let today = self.clock.today();
        let record = self.store.rollover_at(self.store.load(username)?, today);
        let limit = weekly_limit(age);
        // The cached total is never trusted on read.
        let weekly_total = record.sum_daily();
        let status = Status::classify(weekly_total, limit);

        Ok(WeeklySummary {
            week_start: format_iso_date(record.week_start),
            status,
            status_label: status.label().to_string(),
            daily_total: record.daily_total(today),
            weekly_total,
            weekly_limit: limit,
            max_additional_packages: product
                .map(|p| max_additional_packages(weekly_total, limit, p.sodium_mg())),
            days: record
                .daily
                .iter()
                .map(|(date, mg)| DailyEntry {
                    date: format_iso_date(*date),
                    sodium_mg: *mg,
                })
                .collect(),
        })
    }
}

/// Packages of `per_package` mg that still fit under `limit`. Never negative.
pub fn max_additional_packages(weekly_total: u64, limit: u64, per_package: u64) -> u64 {
    if per_package == 0 {
        return 0;
    }
    limit.saturating_sub(weekly_total) / per_package
}

/// Human-readable summary; the over-limit sentence appears only above the limit.
pub fn compose_message(weekly_total: u64, age: AgeYears, limit: u64) -> String {
    let mut message = format!(
        "Your weekly sodium total is now {} mg. The weekly limit for age {} is {} mg. \
         Go easy on instant noodles and look after your health!",
        weekly_total, age, limit
    );
    if weekly_total > limit {
        message.push_str(" You are over your weekly limit. Cut back on noodles this week!");
    }
    message
}
