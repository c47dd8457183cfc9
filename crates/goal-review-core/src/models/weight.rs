// ABOUTME: Body weight models for trend analysis
// ABOUTME: WeightEntry records and the user's stated WeightGoal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ReviewError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One body weight measurement, in whatever unit the user chose
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Day of the measurement
    pub date: NaiveDate,
    /// Measured weight
    pub weight: f64,
}

impl WeightEntry {
    /// Create a weight entry
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }
}

/// Body weight objective the user has stated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    /// Reduce body weight
    Lose,
    /// Hold body weight steady
    Maintain,
    /// Increase body weight
    Gain,
}

impl WeightGoal {
    /// Goal name as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightGoal {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            _ => Err(ReviewError::InvalidGoal(s.to_owned())),
        }
    }
}
