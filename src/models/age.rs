// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Validated age in whole years.

use crate::error::AppError;
use serde::Serialize;
use std::fmt;

/// Age in years. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AgeYears(u32);

impl AgeYears {
    pub const fn new(years: u32) -> Self {
        Self(years)
    }

    pub const fn years(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for AgeYears {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(AppError::InvalidAge(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| AppError::InvalidInput(format!("Age {} is out of range", value)))
    }
}

impl fmt::Display for AgeYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
