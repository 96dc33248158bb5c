// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Per-user weekly consumption record.
//!
//! Stored at: `user_<username>` as JSON, e.g.
//! `{"daily":{"2026-10-19":1900},"weekStart":"2026-10-19","weeklyTotal":1900}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated sodium for the tracked week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionRecord {
    /// Sodium (mg) consumed per calendar date. Only current-week dates.
    #[serde(default)]
    pub daily: BTreeMap<NaiveDate, u64>,
    /// Monday beginning the tracked week
    pub week_start: NaiveDate,
    /// Cached sum of `daily`; recomputed on every write
    #[serde(default)]
    pub weekly_total: u64,
}

impl ConsumptionRecord {
    /// Empty record for the week starting at `week_start`.
    pub fn new(week_start: NaiveDate) -> Self {
        Self {
            daily: BTreeMap::new(),
            week_start,
            weekly_total: 0,
        }
    }

    /// Sum of all daily entries, saturating at `u64::MAX`.
    pub fn sum_daily(&self) -> u64 {
        self.daily
            .values()
            .fold(0u64, |total, mg| total.saturating_add(*mg))
    }

    /// Sodium recorded for `date` (0 if none).
    pub fn daily_total(&self, date: NaiveDate) -> u64 {
        self.daily.get(&date).copied().unwrap_or(0)
    }

    /// Add `mg` to `date` and refresh the cached weekly total.
    ///
    /// Returns the new total for `date`.
    pub fn add(&mut self, date: NaiveDate, mg: u64) -> u64 {
        let entry = self.daily.entry(date).or_insert(0);
        *entry = entry.saturating_add(mg);
        let day_total = *entry;
        self.weekly_total = self.sum_daily();
        day_total
    }

    /// Reset to an empty week if `current_week_start` differs from the stored one.
    ///
    /// Returns `true` when a rollover happened.
    pub fn rollover_if_needed(&mut self, current_week_start: NaiveDate) -> bool {
        if self.week_start == current_week_start {
            return false;
        }
        self.daily.clear();
        self.weekly_total = 0;
        self.week_start = current_week_start;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_accumulates_and_recomputes() {
        let mut record = ConsumptionRecord::new(date(2026, 10, 19));

        assert_eq!(record.add(date(2026, 10, 19), 1000), 1000);
        assert_eq!(record.add(date(2026, 10, 19), 900), 1900);
        assert_eq!(record.add(date(2026, 10, 20), 800), 800);

        assert_eq!(record.weekly_total, 2700);
        assert_eq!(record.weekly_total, record.sum_daily());
        assert_eq!(record.daily_total(date(2026, 10, 21)), 0);
    }

    #[test]
    fn test_add_ignores_stale_cached_total() {
        let mut record = ConsumptionRecord::new(date(2026, 10, 19));
        record.daily.insert(date(2026, 10, 19), 500);
        record.weekly_total = 99_999;

        record.add(date(2026, 10, 20), 100);

        assert_eq!(record.weekly_total, 600);
    }

    #[test]
    fn test_huge_stored_values_saturate() {
        let mut record = ConsumptionRecord::new(date(2026, 10, 19));
        record.daily.insert(date(2026, 10, 19), u64::MAX);
        record.daily.insert(date(2026, 10, 20), u64::MAX - 1);

        assert_eq!(record.sum_daily(), u64::MAX);
        assert_eq!(record.add(date(2026, 10, 21), 1000), 1000);
        assert_eq!(record.weekly_total, u64::MAX);
    }

    #[test]
    fn test_rollover_clears_old_week() {
        let mut record = ConsumptionRecord::new(date(2026, 10, 12));
        record.add(date(2026, 10, 14), 3000);

        assert!(record.rollover_if_needed(date(2026, 10, 19)));
        assert!(record.daily.is_empty());
        assert_eq!(record.weekly_total, 0);
        assert_eq!(record.week_start, date(2026, 10, 19));
    }

    #[test]
    fn test_rollover_same_week_is_noop() {
        let mut record = ConsumptionRecord::new(date(2026, 10, 19));
        record.add(date(2026, 10, 19), 3000);
        let before = record.clone();

        assert!(!record.rollover_if_needed(date(2026, 10, 19)));
        assert_eq!(record, before);
    }

    #[test]
    fn test_json_layout() {
        let mut record = ConsumptionRecord::new(date(2026, 10, 19));
        record.add(date(2026, 10, 19), 1000);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"daily":{"2026-10-19":1000},"weekStart":"2026-10-19","weeklyTotal":1000}"#
        );

        let parsed: ConsumptionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let parsed: ConsumptionRecord =
            serde_json::from_str(r#"{"weekStart":"2026-10-19"}"#).unwrap();
        assert!(parsed.daily.is_empty());
        assert_eq!(parsed.weekly_total, 0);
    }
}
