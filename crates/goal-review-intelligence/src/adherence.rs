// ABOUTME: Adherence scorer comparing average daily intake against nutrition goals
// ABOUTME: Produces capped percentages per axis, zero when nothing was logged or the goal is zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adherence scoring
//!
//! For every axis, `adherence = min(cap, 100 * average / goal)`. The result is
//! always inside `[0, cap]`; a goal of zero (or an unusable goal value) scores 0
//! rather than failing.

use crate::aggregation::DailyAggregation;
use goal_review_core::constants::adherence::TARGET_ADHERENCE_PERCENT;
use goal_review_core::models::{GoalField, MacroTotals, NutritionGoals};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Capped adherence percentage per goal axis
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdherenceMetrics {
    /// Calorie adherence (%)
    pub calories: f64,
    /// Protein adherence (%)
    pub protein: f64,
    /// Carbohydrate adherence (%)
    pub carbs: f64,
    /// Fat adherence (%)
    pub fat: f64,
}

impl AdherenceMetrics {
    /// Adherence for one axis
    #[must_use]
    pub const fn get(&self, field: GoalField) -> f64 {
        match field {
            GoalField::Calories => self.calories,
            GoalField::Protein => self.protein,
            GoalField::Carbs => self.carbs,
            GoalField::Fat => self.fat,
        }
    }
}

/// Result of scoring one period
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdherenceReport {
    /// Mean daily intake over the logged days
    pub averages: MacroTotals,
    /// Capped percentages
    pub metrics: AdherenceMetrics,
}

/// Capped percentage of `average` against `goal`.
///
/// An intake that overflowed to positive infinity still scores the cap.
#[must_use]
pub fn adherence_percentage(average: f64, goal: f64, cap: f64) -> f64 {
    if !goal.is_finite() || goal <= 0.0 || average.is_nan() {
        return 0.0;
    }
    (TARGET_ADHERENCE_PERCENT * average / goal).clamp(0.0, cap)
}

/// Scores averaged intake against goals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdherenceScorer {
    cap: f64,
}

impl AdherenceScorer {
    /// Create a scorer with the given upper bound
    #[must_use]
    pub const fn new(cap: f64) -> Self {
        Self { cap }
    }

    /// Score an aggregation against `goals`
    #[must_use]
    pub fn score(&self, aggregation: &DailyAggregation, goals: &NutritionGoals) -> AdherenceReport {
        let unset = goals.unset_fields();
        if !unset.is_empty() {
            warn!(fields = ?unset, "Goals contain zero or invalid targets, scoring them as 0");
        }

        let averages = aggregation.daily_averages();
        let metrics = AdherenceMetrics {
            calories: adherence_percentage(averages.calories, goals.calories, self.cap),
            protein: adherence_percentage(averages.protein, goals.protein, self.cap),
            carbs: adherence_percentage(averages.carbs, goals.carbs, self.cap),
            fat: adherence_percentage(averages.fat, goals.fat, self.cap),
        };

        debug!(
            days_logged = aggregation.days_logged(),
            calorie_adherence = metrics.calories,
            protein_adherence = metrics.protein,
            carbs_adherence = metrics.carbs,
            fat_adherence = metrics.fat,
            "Scored goal adherence"
        );

        AdherenceReport { averages, metrics }
    }
}
