// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Load, save and roll over per-user consumption records.

use crate::db::Db;
use crate::error::Result;
use crate::models::ConsumptionRecord;
use crate::time_utils::{week_start, Clock};
use chrono::NaiveDate;
use std::sync::Arc;

/// Per-user consumption persistence with week rollover.
#[derive(Clone)]
pub struct ConsumptionStore {
    db: Db,
    clock: Arc<dyn Clock>,
}

impl ConsumptionStore {
    pub fn new(db: Db, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    /// The stored record, or an empty one for the current week.
    pub fn load(&self, username: &str) -> Result<ConsumptionRecord> {
        match self.db.get_consumption(username)? {
            Some(record) => Ok(record),
            None => {
                tracing::debug!(username, "No consumption record yet, starting empty");
                Ok(ConsumptionRecord::new(week_start(self.clock.today())))
            }
        }
    }

    /// Overwrite the stored record.
    pub fn save(&self, username: &str, record: &ConsumptionRecord) -> Result<()> {
        self.db.set_consumption(username, record)
    }

    /// Clear the record if the current week no longer matches its week start.
    pub fn rollover_if_needed(&self, record: ConsumptionRecord) -> ConsumptionRecord {
        self.rollover_at(record, self.clock.today())
    }

    /// Same as [`rollover_if_needed`](Self::rollover_if_needed) for an explicit `today`.
    pub fn rollover_at(&self, mut record: ConsumptionRecord, today: NaiveDate) -> ConsumptionRecord {
        let current = week_start(today);
        let previous = record.week_start;
        if record.rollover_if_needed(current) {
            tracing::info!(
                previous_week = %previous,
                current_week = %current,
                "Weekly rollover"
            );
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::time_utils::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_at(today: NaiveDate) -> (ConsumptionStore, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(today));
        let db = Db::new(Arc::new(MemoryStore::new()));
        (ConsumptionStore::new(db, clock.clone()), clock)
    }

    #[test]
    fn test_load_fresh_user() {
        // Thursday
        let (store, _) = store_at(date(2026, 10, 22));
        let record = store.load("new_user").unwrap();

        assert!(record.daily.is_empty());
        assert_eq!(record.weekly_total, 0);
        assert_eq!(record.week_start, date(2026, 10, 19));
    }

    #[test]
    fn test_save_then_load() {
        let (store, _) = store_at(date(2026, 10, 22));
        let mut record = store.load("alice").unwrap();
        record.add(date(2026, 10, 22), 1200);
        store.save("alice", &record).unwrap();

        assert_eq!(store.load("alice").unwrap(), record);
    }

    #[test]
    fn test_rollover_after_week_change() {
        let (store, clock) = store_at(date(2026, 10, 25));
        let mut record = store.load("alice").unwrap();
        record.add(date(2026, 10, 25), 5000);

        let same_week = store.rollover_if_needed(record.clone());
        assert_eq!(same_week, record);

        clock.advance_days(1);
        let next_week = store.rollover_if_needed(record);
        assert_eq!(next_week.week_start, date(2026, 10, 26));
        assert_eq!(next_week.weekly_total, 0);
        assert!(next_week.daily.is_empty());
    }
}
