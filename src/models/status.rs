// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Weekly status tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Weekly total relative to the weekly limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Status {
    /// At most 80% of the limit
    Safe,
    /// Above 80%, at most the limit
    Warning,
    /// Over the limit
    Danger,
}

impl Status {
    /// Classify a weekly total. First match wins: Safe, then Warning, else Danger.
    ///
    /// `total <= 0.8 * limit` is evaluated as `10 * total <= 8 * limit`.
    pub fn classify(weekly_total: u64, weekly_limit: u64) -> Self {
        let scaled_total = u128::from(weekly_total) * 10;
        let scaled_safe = u128::from(weekly_limit) * 8;
        if scaled_total <= scaled_safe {
            Status::Safe
        } else if weekly_total <= weekly_limit {
            Status::Warning
        } else {
            Status::Danger
        }
    }

    /// Label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Status::Safe => "Safe",
            Status::Warning => "Approaching limit",
            Status::Danger => "Over sodium limit",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
