// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Age-based sodium limits.

use crate::models::AgeYears;

/// Days per tracked week.
pub const DAYS_PER_WEEK: u64 = 7;

/// Daily sodium limit (mg) for an age.
///
/// | age     | mg/day |
/// |---------|--------|
/// | 0..6    | 1000   |
/// | 6..13   | 1200   |
/// | 13..19  | 1500   |
/// | 19..60  | 2000   |
/// | 60+     | 1800   |
pub fn daily_limit(age: AgeYears) -> u64 {
    match age.years() {
        0..=5 => 1000,
        6..=12 => 1200,
        13..=18 => 1500,
        19..=59 => 2000,
        _ => 1800,
    }
}

/// Weekly sodium limit (mg): the daily limit times seven.
pub fn weekly_limit(age: AgeYears) -> u64 {
    daily_limit(age) * DAYS_PER_WEEK
}
