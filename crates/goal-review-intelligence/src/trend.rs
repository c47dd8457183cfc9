// ABOUTME: Trend classifier deriving weight progress and direction relative to the stated goal
// ABOUTME: Also computes the logging consistency score for the review period
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::period::PeriodWindow;
use goal_review_core::constants::consistency::MAX_CONSISTENCY_SCORE;
use goal_review_core::models::{ReviewPeriod, TrendDirection, WeightEntry, WeightGoal};
use tracing::debug;

/// Weight trend over one window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAnalysis {
    /// Last minus first weight inside the window, 0 with fewer than two entries
    pub weight_progress: f64,
    /// Classification relative to the stated goal
    pub direction: TrendDirection,
    /// Weight entries that fell inside the window
    pub entries_in_window: usize,
}

/// Weight change across the window.
///
/// Entries are filtered to the window and sorted by date here, so callers may
/// pass them in any order.
#[must_use]
pub fn weight_progress(entries: &[WeightEntry], window: &PeriodWindow) -> (f64, usize) {
    let mut in_window: Vec<&WeightEntry> = entries
        .iter()
        .filter(|entry| window.contains_date(entry.date))
        .collect();
    in_window.sort_by_key(|entry| entry.date);

    let progress = match (in_window.first(), in_window.last()) {
        (Some(first), Some(last)) if in_window.len() >= 2 => last.weight - first.weight,
        _ => 0.0,
    };
    (progress, in_window.len())
}

/// Classify a weight change against the stated goal.
///
/// `maintain` is always `Stable`.
#[must_use]
pub fn classify_trend(progress: f64, goal: WeightGoal, threshold: f64) -> TrendDirection {
    match goal {
        WeightGoal::Lose if progress < -threshold => TrendDirection::Improving,
        WeightGoal::Lose if progress > threshold => TrendDirection::Declining,
        WeightGoal::Gain if progress > threshold => TrendDirection::Improving,
        WeightGoal::Gain if progress < -threshold => TrendDirection::Declining,
        WeightGoal::Lose | WeightGoal::Gain | WeightGoal::Maintain => TrendDirection::Stable,
    }
}

/// Filter, order, and classify the weight series for one window
#[must_use]
pub fn analyze_trend(
    entries: &[WeightEntry],
    window: &PeriodWindow,
    goal: WeightGoal,
    threshold: f64,
) -> TrendAnalysis {
    let (progress, entries_in_window) = weight_progress(entries, window);
    let direction = classify_trend(progress, goal, threshold);

    debug!(
        entries_in_window,
        weight_progress = progress,
        goal = %goal,
        direction = ?direction,
        "Classified weight trend"
    );

    TrendAnalysis {
        weight_progress: progress,
        direction,
        entries_in_window,
    }
}

/// Percentage of the period's days with at least one logged entry, capped at 100.
///
/// An inclusive window spanning `period.days()` * 24h can touch one extra
/// calendar date, hence the cap.
#[must_use]
pub fn consistency_score(days_logged: usize, period: ReviewPeriod) -> f64 {
    let period_days = f64::from(period.days());
    (MAX_CONSISTENCY_SCORE * days_logged as f64 / period_days).min(MAX_CONSISTENCY_SCORE)
}
