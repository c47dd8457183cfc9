// ABOUTME: Daily aggregator collapsing raw food log entries into per-day nutrient totals
// ABOUTME: Filters entries to the review window and merges same-day entries scaled by servings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::period::PeriodWindow;
use chrono::NaiveDate;
use goal_review_core::models::{DailyTotal, FoodLogEntry, MacroTotals};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Per-day totals for one review window, keyed (and ordered) by date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyAggregation {
    totals: BTreeMap<NaiveDate, DailyTotal>,
}

impl DailyAggregation {
    /// Number of distinct days with at least one entry
    #[must_use]
    pub fn days_logged(&self) -> usize {
        self.totals.len()
    }

    /// True when nothing was logged in the window
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Total for a single day
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DailyTotal> {
        self.totals.get(&date)
    }

    /// Daily totals in date order
    pub fn days(&self) -> impl Iterator<Item = &DailyTotal> {
        self.totals.values()
    }

    /// Mean of each axis over the logged days; all zero when no day was logged
    #[must_use]
    pub fn daily_averages(&self) -> MacroTotals {
        let mut sum = MacroTotals::default();
        for day in self.totals.values() {
            sum.accumulate(&day.totals);
        }
        sum.divided_by(self.days_logged() as f64)
    }
}

/// Group entries inside `window` by calendar day, summing `nutrient * servings`
#[must_use]
pub fn aggregate_daily(entries: &[FoodLogEntry], window: &PeriodWindow) -> DailyAggregation {
    let mut totals: BTreeMap<NaiveDate, DailyTotal> = BTreeMap::new();
    let mut skipped = 0_usize;
    let mut clamped = 0_usize;

    for entry in entries {
        if !window.contains(entry.logged_at_timestamp) {
            skipped += 1;
            continue;
        }
        if entry.has_invalid_servings() {
            clamped += 1;
        }
        let date = entry.log_date();
        totals
            .entry(date)
            .or_insert_with(|| DailyTotal::new(date))
            .add(entry);
    }

    if clamped > 0 {
        warn!(
            entries = clamped,
            "Food log entries with negative servings counted as zero servings"
        );
    }

    debug!(
        entries = entries.len(),
        outside_window = skipped,
        days_logged = totals.len(),
        "Aggregated food log into daily totals"
    );

    DailyAggregation { totals }
}
