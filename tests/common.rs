// ABOUTME: Shared test utilities and fixtures for goal review integration tests
// ABOUTME: Provides quiet logging, a fixed reference instant, goals, food-log days, and weight series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `goal_review_engine`
//!
//! Every fixture is anchored at [`reference_now`] so reviews are reproducible.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use goal_review_engine::intelligence::config::GoalReviewConfig;
use goal_review_engine::models::{
    FoodLogEntry, NutritionGoals, NutritionProfile, WeightEntry, WeightGoal,
};
use goal_review_engine::GoalReviewEngine;
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference "now" shared by all fixtures: 2024-03-31 12:00 UTC
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap()
}

/// Calendar date `days_ago` days before the reference instant
pub fn date_days_ago(days_ago: i64) -> NaiveDate {
    (reference_now() - Duration::days(days_ago)).date_naive()
}

/// 2000 kcal, 150 g protein, 200 g carbs, 70 g fat
pub fn standard_goals() -> NutritionGoals {
    NutritionGoals::new(2000.0, 150.0, 200.0, 70.0)
}

/// Profile with the standard goals
pub fn profile_for(user_id: Uuid, stated_goal: WeightGoal) -> NutritionProfile {
    NutritionProfile::new(user_id, standard_goals(), stated_goal)
}

/// Single entry logged `days_ago` days (minus two hours) before the reference instant
pub fn entry_days_ago(
    days_ago: i64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> FoodLogEntry {
    let logged_at = reference_now() - Duration::days(days_ago) - Duration::hours(2);
    FoodLogEntry::new(logged_at, calories, protein, carbs, fat)
}

/// One entry per day for the most recent `days` days, all with the same intake
pub fn logged_days(
    days: i64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> Vec<FoodLogEntry> {
    (0..days)
        .map(|d| entry_days_ago(d, calories, protein, carbs, fat))
        .collect()
}

/// Intake exactly on the standard goals for the most recent `days` days
pub fn on_target_days(days: i64) -> Vec<FoodLogEntry> {
    logged_days(days, 2000.0, 150.0, 200.0, 70.0)
}

/// Weight entry dated `days_ago` days before the reference instant
pub fn weight_days_ago(days_ago: i64, weight: f64) -> WeightEntry {
    WeightEntry::new(date_days_ago(days_ago), weight)
}

/// Engine with default thresholds, independent of the environment
pub fn default_engine() -> GoalReviewEngine {
    GoalReviewEngine::with_config(GoalReviewConfig::default())
}
