// ABOUTME: Period resolver converting symbolic review periods into concrete date windows
// ABOUTME: Window end is the reference instant, start is 7/30/90 days earlier, bounds inclusive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, NaiveDate, Utc};
use goal_review_core::errors::ReviewError;
use goal_review_core::models::ReviewPeriod;
use serde::{Deserialize, Serialize};

/// Concrete `[start, end]` range derived from a symbolic period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodWindow {
    /// Period the window was resolved from
    pub period: ReviewPeriod,
    /// Inclusive start instant
    pub start: DateTime<Utc>,
    /// Inclusive end instant (the reference "now")
    pub end: DateTime<Utc>,
}

impl PeriodWindow {
    /// Resolve `period` against the reference instant `now`
    #[must_use]
    pub fn resolve(period: ReviewPeriod, now: DateTime<Utc>) -> Self {
        Self {
            period,
            start: now - Duration::days(i64::from(period.days())),
            end: now,
        }
    }

    /// Resolve a period given by name
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::InvalidPeriod` for anything but `weekly`, `monthly`, `quarterly`
    pub fn resolve_named(period: &str, now: DateTime<Utc>) -> Result<Self, ReviewError> {
        Ok(Self::resolve(period.parse()?, now))
    }

    /// Whether `timestamp` falls inside the window, bounds included
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// Whether calendar day `date` overlaps the window
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Calendar day of the window start
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar day of the window end
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Nominal period length in days
    #[must_use]
    pub const fn length_days(&self) -> u32 {
        self.period.days()
    }
}
