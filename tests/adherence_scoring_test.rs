// ABOUTME: Tests for capped adherence percentages against nutrition goals
// ABOUTME: Validates the 150% cap, zero-goal handling, and scoring over aggregated days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{entry_days_ago, init_test_logging, logged_days, reference_now, standard_goals};
use goal_review_engine::intelligence::{
    adherence_percentage, aggregate_daily, AdherenceScorer, PeriodWindow,
};
use goal_review_engine::models::{GoalField, NutritionGoals, ReviewPeriod};

const CAP: f64 = 150.0;

// ============================================================================
// adherence_percentage
// ============================================================================

#[test]
fn test_on_target_is_100() {
    assert_eq!(adherence_percentage(2000.0, 2000.0, CAP), 100.0);
}

#[test]
fn test_under_target_is_proportional() {
    assert_eq!(adherence_percentage(1400.0, 2000.0, CAP), 70.0);
    assert_eq!(adherence_percentage(75.0, 150.0, CAP), 50.0);
}

#[test]
fn test_over_target_is_capped() {
    assert_eq!(adherence_percentage(5000.0, 2000.0, CAP), CAP);
    assert_eq!(adherence_percentage(2900.0, 2000.0, CAP), 145.0);
}

#[test]
fn test_zero_or_invalid_goal_scores_zero() {
    assert_eq!(adherence_percentage(1500.0, 0.0, CAP), 0.0);
    assert_eq!(adherence_percentage(1500.0, -10.0, CAP), 0.0);
    assert_eq!(adherence_percentage(1500.0, f64::NAN, CAP), 0.0);
    assert_eq!(adherence_percentage(f64::NAN, 2000.0, CAP), 0.0);
}

#[test]
fn test_overflowing_intake_scores_the_cap() {
    assert_eq!(adherence_percentage(f64::INFINITY, 2000.0, CAP), CAP);
    assert_eq!(adherence_percentage(f64::MAX, 0.5, CAP), CAP);
    assert_eq!(adherence_percentage(f64::NEG_INFINITY, 2000.0, CAP), 0.0);
}

#[test]
fn test_scorer_caps_extreme_overconsumption() {
    init_test_logging();
    let window = PeriodWindow::resolve(ReviewPeriod::Weekly, reference_now());
    let binge = entry_days_ago(1, 1e308, 150.0, 200.0, 70.0).with_servings(10.0);
    let aggregation = aggregate_daily(&[binge], &window);

    let report = AdherenceScorer::new(CAP).score(&aggregation, &standard_goals());

    assert_eq!(report.metrics.calories, CAP);
    assert_eq!(report.metrics.protein, CAP);
}

#[test]
fn test_adherence_stays_in_bounds() {
    let averages = [0.0, 1.0, 99.5, 1000.0, 3000.0, 1e9, f64::INFINITY];
    let goals = [0.0, 1.0, 70.0, 2000.0, 1e6];
    for average in averages {
        for goal in goals {
            let score = adherence_percentage(average, goal, CAP);
            assert!((0.0..=CAP).contains(&score), "{average}/{goal} -> {score}");
        }
    }
}

// ============================================================================
// AdherenceScorer
// ============================================================================

#[test]
fn test_scorer_with_no_logged_days_is_all_zero() {
    init_test_logging();
    let window = PeriodWindow::resolve(ReviewPeriod::Weekly, reference_now());
    let aggregation = aggregate_daily(&[], &window);

    let report = AdherenceScorer::new(CAP).score(&aggregation, &standard_goals());

    for field in GoalField::ALL {
        assert_eq!(report.metrics.get(field), 0.0, "{field}");
    }
}

#[test]
fn test_scorer_averages_each_axis() {
    init_test_logging();
    let window = PeriodWindow::resolve(ReviewPeriod::Weekly, reference_now());
    let aggregation = aggregate_daily(&logged_days(7, 1400.0, 75.0, 260.0, 35.0), &window);

    let report = AdherenceScorer::new(CAP).score(&aggregation, &standard_goals());

    assert_eq!(report.averages.calories, 1400.0);
    assert_eq!(report.metrics.calories, 70.0);
    assert_eq!(report.metrics.protein, 50.0);
    assert_eq!(report.metrics.carbs, 130.0);
    assert_eq!(report.metrics.fat, 50.0);
}

#[test]
fn test_scorer_zero_goal_axis_scores_zero() {
    init_test_logging();
    let window = PeriodWindow::resolve(ReviewPeriod::Weekly, reference_now());
    let aggregation = aggregate_daily(&logged_days(3, 2000.0, 150.0, 200.0, 70.0), &window);
    let goals = NutritionGoals::new(2000.0, 150.0, 0.0, 70.0);

    let report = AdherenceScorer::new(CAP).score(&aggregation, &goals);

    assert_eq!(report.metrics.calories, 100.0);
    assert_eq!(report.metrics.carbs, 0.0);
}
