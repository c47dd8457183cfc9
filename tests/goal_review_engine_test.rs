// ABOUTME: End-to-end tests for the goal review engine over realistic logs
// ABOUTME: Reference scenarios, output invariants, idempotence, and wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use chrono::Duration;
use common::{
    default_engine, entry_days_ago, init_test_logging, logged_days, on_target_days,
    reference_now, standard_goals, weight_days_ago,
};
use goal_review_engine::constants::messages::GOALS_WELL_SUITED;
use goal_review_engine::errors::ReviewError;
use goal_review_engine::intelligence::{GoalReviewConfig, GoalRule, RuleContext, RuleOutcome};
use goal_review_engine::models::{
    FoodLogEntry, GoalDelta, GoalField, GoalReview, Implementation, NutritionGoals,
    NutritionProfile, RecommendationPriority, RecommendationType, ReviewPeriod, ReviewStatus,
    TrendDirection, WeightEntry, WeightGoal,
};
use goal_review_engine::{GoalReviewEngine, ReviewInputs, ReviewRequest};
use serde_json::Value;
use uuid::Uuid;

fn run_review(
    period: ReviewPeriod,
    stated_goal: WeightGoal,
    goals: &NutritionGoals,
    food_log: &[FoodLogEntry],
    weights: &[WeightEntry],
) -> GoalReview {
    init_test_logging();
    let request = ReviewRequest::new(Uuid::new_v4(), period).at(reference_now());
    default_engine().review(
        &request,
        &ReviewInputs {
            goals,
            stated_goal,
            food_log,
            weights,
        },
    )
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_empty_history_produces_neutral_review() {
    let goals = standard_goals();
    let review = run_review(ReviewPeriod::Weekly, WeightGoal::Lose, &goals, &[], &[]);

    let progress = review.progress_analysis;
    assert_eq!(progress.calorie_adherence, 0.0);
    assert_eq!(progress.protein_adherence, 0.0);
    assert_eq!(progress.carbs_adherence, 0.0);
    assert_eq!(progress.fat_adherence, 0.0);
    assert_eq!(progress.weight_progress, 0.0);
    assert_eq!(progress.consistency_score, 0.0);
    assert_eq!(progress.trend_direction, TrendDirection::Stable);

    assert!(review.recommendations.is_empty());
    assert_eq!(review.adjustment_reason, GOALS_WELL_SUITED);
    assert_eq!(review.suggested_goals, goals);
    assert_eq!(review.status, ReviewStatus::Pending);
}

#[test]
fn test_low_calorie_adherence_while_losing_reduces_calories() {
    let goals = standard_goals();
    let food_log = logged_days(7, 1400.0, 150.0, 200.0, 70.0);

    let review = run_review(ReviewPeriod::Weekly, WeightGoal::Lose, &goals, &food_log, &[]);

    assert_eq!(review.progress_analysis.calorie_adherence, 70.0);
    assert_eq!(review.progress_analysis.consistency_score, 100.0);
    assert_eq!(review.suggested_goals.calories, 1900.0);
    assert_eq!(review.recommendations.len(), 1);
    let recommendation = &review.recommendations[0];
    assert_eq!(recommendation.priority, RecommendationPriority::High);
    assert_eq!(
        recommendation.recommendation_type,
        RecommendationType::CalorieAdjustment
    );
    assert!(review.adjustment_reason.contains("70% calorie adherence"));
    assert!(review.adjustment_reason.contains("100% logging consistency"));
}

#[test]
fn test_low_protein_adherence_raises_protein() {
    let goals = standard_goals();
    let food_log = logged_days(7, 2000.0, 75.0, 200.0, 70.0);

    let review = run_review(
        ReviewPeriod::Weekly,
        WeightGoal::Maintain,
        &goals,
        &food_log,
        &[],
    );

    assert_eq!(review.progress_analysis.protein_adherence, 50.0);
    assert_eq!(review.suggested_goals.protein, 165.0);
    assert_eq!(review.suggested_goals.calories, goals.calories);
    assert_eq!(review.recommendations.len(), 1);
    assert_eq!(
        review.recommendations[0].priority,
        RecommendationPriority::Medium
    );
}

#[test]
fn test_weight_loss_over_week_is_improving() {
    let goals = standard_goals();
    let weights = [weight_days_ago(6, 80.0), weight_days_ago(0, 79.0)];

    let review = run_review(
        ReviewPeriod::Weekly,
        WeightGoal::Lose,
        &goals,
        &on_target_days(7),
        &weights,
    );

    assert_eq!(review.progress_analysis.weight_progress, -1.0);
    assert_eq!(
        review.progress_analysis.trend_direction,
        TrendDirection::Improving
    );
}

#[test]
fn test_small_gain_within_threshold_is_stable() {
    let goals = standard_goals();
    let weights = [weight_days_ago(6, 70.0), weight_days_ago(0, 70.2)];

    let review = run_review(ReviewPeriod::Weekly, WeightGoal::Gain, &goals, &[], &weights);

    assert!((review.progress_analysis.weight_progress - 0.2).abs() < 1e-9);
    assert_eq!(
        review.progress_analysis.trend_direction,
        TrendDirection::Stable
    );
}

#[test]
fn test_both_core_rules_fire_in_one_pass() {
    let goals = standard_goals();
    let food_log = logged_days(7, 1400.0, 75.0, 200.0, 70.0);

    let review = run_review(ReviewPeriod::Weekly, WeightGoal::Lose, &goals, &food_log, &[]);

    assert_eq!(review.recommendations.len(), 2);
    assert_eq!(
        review.recommendations[0].priority,
        RecommendationPriority::High
    );
    assert_eq!(
        review.recommendations[1].priority,
        RecommendationPriority::Medium
    );
    assert_eq!(review.suggested_goals.calories, 1900.0);
    assert_eq!(review.suggested_goals.protein, 165.0);
}

#[test]
fn test_stalled_gain_on_target_raises_calories() {
    let goals = standard_goals();
    let weights = [weight_days_ago(6, 70.0), weight_days_ago(0, 70.1)];

    let review = run_review(
        ReviewPeriod::Weekly,
        WeightGoal::Gain,
        &goals,
        &on_target_days(7),
        &weights,
    );

    assert_eq!(review.suggested_goals.calories, 2100.0);
    assert_eq!(
        review.recommendations[0].impact.expected_weight_change,
        Some(0.09)
    );
}

#[test]
fn test_gain_without_weigh_ins_keeps_calories() {
    let goals = standard_goals();

    for weights in [vec![], vec![weight_days_ago(3, 70.0)]] {
        let review = run_review(
            ReviewPeriod::Weekly,
            WeightGoal::Gain,
            &goals,
            &on_target_days(7),
            &weights,
        );

        assert!(review.recommendations.is_empty());
        assert_eq!(review.suggested_goals, goals);
        assert_eq!(review.adjustment_reason, GOALS_WELL_SUITED);
    }
}

#[test]
fn test_sparse_logging_gets_consistency_reminder_only() {
    let goals = standard_goals();
    let food_log = logged_days(10, 2000.0, 150.0, 200.0, 70.0);

    let review = run_review(
        ReviewPeriod::Monthly,
        WeightGoal::Maintain,
        &goals,
        &food_log,
        &[],
    );

    assert!((review.progress_analysis.consistency_score - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(review.recommendations.len(), 1);
    assert_eq!(
        review.recommendations[0].recommendation_type,
        RecommendationType::Consistency
    );
    assert_eq!(review.suggested_goals, goals);
    assert!(!review.has_adjustments());
}

// ============================================================================
// Output invariants
// ============================================================================

#[test]
fn test_adherence_bounds_hold_for_extreme_intake() {
    let goals = NutritionGoals::new(1500.0, 0.0, 10.0, 40.0);
    let food_log = vec![
        entry_days_ago(0, 9000.0, 400.0, 900.0, 300.0),
        entry_days_ago(1, 0.0, 0.0, 0.0, 0.0),
        entry_days_ago(2, 50.0, 5.0, 1.0, 0.5).with_servings(0.5),
    ];

    let review = run_review(
        ReviewPeriod::Weekly,
        WeightGoal::Lose,
        &goals,
        &food_log,
        &[],
    );

    let progress = review.progress_analysis;
    for value in [
        progress.calorie_adherence,
        progress.protein_adherence,
        progress.carbs_adherence,
        progress.fat_adherence,
    ] {
        assert!((0.0..=150.0).contains(&value), "{value}");
    }
    assert_eq!(progress.protein_adherence, 0.0);
    assert_eq!(review.suggested_goals.protein, 0.0);
}

#[test]
fn test_overflowing_intake_is_not_read_as_undereating() {
    let goals = standard_goals();
    let food_log = [entry_days_ago(1, 1e308, 150.0, 200.0, 70.0).with_servings(10.0)];

    let review = run_review(ReviewPeriod::Weekly, WeightGoal::Lose, &goals, &food_log, &[]);

    assert_eq!(review.progress_analysis.calorie_adherence, 150.0);
    assert_eq!(review.suggested_goals.calories, goals.calories);
    for recommendation in &review.recommendations {
        assert_ne!(
            recommendation.recommendation_type,
            RecommendationType::CalorieAdjustment
        );
        assert!(!recommendation.rationale.contains("inf"));
    }
}

#[test]
fn test_consistency_never_exceeds_100() {
    let window_start_entry = FoodLogEntry::new(
        reference_now() - Duration::days(7),
        2000.0,
        150.0,
        200.0,
        70.0,
    );
    let mut food_log = on_target_days(7);
    food_log.push(window_start_entry);

    let review = run_review(
        ReviewPeriod::Weekly,
        WeightGoal::Maintain,
        &standard_goals(),
        &food_log,
        &[],
    );

    assert_eq!(review.progress_analysis.consistency_score, 100.0);
}

#[test]
fn test_suggested_goals_keep_the_current_shape() {
    let goals = standard_goals();
    let food_log = logged_days(7, 1200.0, 60.0, 300.0, 100.0);

    let review = run_review(ReviewPeriod::Weekly, WeightGoal::Lose, &goals, &food_log, &[]);

    let current = serde_json::to_value(review.current_goals).unwrap();
    let suggested = serde_json::to_value(review.suggested_goals).unwrap();
    let keys = |v: &Value| {
        let mut keys: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    };
    assert_eq!(keys(&current), keys(&suggested));

    for recommendation in &review.recommendations {
        let impact = serde_json::to_value(recommendation.impact).unwrap();
        for key in impact.as_object().unwrap().keys() {
            assert!(
                key == "expectedWeightChange" || current.get(key).is_some(),
                "unexpected impact key {key}"
            );
        }
    }
}

#[test]
fn test_review_is_idempotent_for_fixed_reference_now() {
    init_test_logging();
    let engine = default_engine();
    let user_id = Uuid::new_v4();
    let goals = standard_goals();
    let food_log = logged_days(5, 1500.0, 80.0, 260.0, 90.0);
    let weights = [weight_days_ago(5, 81.0), weight_days_ago(1, 81.8)];
    let request = ReviewRequest::new(user_id, ReviewPeriod::Weekly).at(reference_now());
    let inputs = ReviewInputs {
        goals: &goals,
        stated_goal: WeightGoal::Lose,
        food_log: &food_log,
        weights: &weights,
    };

    let first = engine.review(&request, &inputs);
    let second = engine.review(&request, &inputs);

    assert_eq!(first, second);
    assert_eq!(first.review_date, reference_now());
}

#[test]
fn test_entries_outside_period_do_not_count() {
    let goals = standard_goals();
    let mut food_log = on_target_days(7);
    food_log.extend(
        (8..40).map(|d| entry_days_ago(d, 500.0, 10.0, 50.0, 10.0)),
    );

    let review = run_review(
        ReviewPeriod::Weekly,
        WeightGoal::Lose,
        &goals,
        &food_log,
        &[],
    );

    assert_eq!(review.progress_analysis.calorie_adherence, 100.0);
    assert!(review.recommendations.is_empty());
}

// ============================================================================
// Failures and configuration
// ============================================================================

#[test]
fn test_missing_profile_is_fatal() {
    let user_id = Uuid::new_v4();
    let request = ReviewRequest::new(user_id, ReviewPeriod::Weekly).at(reference_now());

    let err = default_engine()
        .review_profile(&request, None, &[], &[])
        .unwrap_err();

    assert_eq!(err, ReviewError::ProfileNotFound { user_id });
}

#[test]
fn test_review_profile_uses_profile_goals() {
    init_test_logging();
    let user_id = Uuid::new_v4();
    let profile = NutritionProfile::new(user_id, standard_goals(), WeightGoal::Lose);
    let request = ReviewRequest::new(user_id, ReviewPeriod::Weekly).at(reference_now());
    let food_log = logged_days(7, 1400.0, 150.0, 200.0, 70.0);

    let review = default_engine()
        .review_profile(&request, Some(&profile), &food_log, &[])
        .unwrap();

    assert_eq!(review.user_id, user_id);
    assert_eq!(review.suggested_goals.calories, 1900.0);
}

#[test]
fn test_invalid_period_name_is_rejected() {
    let err = ReviewRequest::parse(Uuid::new_v4(), "yearly").unwrap_err();
    assert_eq!(err, ReviewError::InvalidPeriod("yearly".to_owned()));
}

#[test]
fn test_custom_thresholds_change_outcome() {
    init_test_logging();
    let mut config = GoalReviewConfig::default();
    config.rules.thresholds.low_calorie_adherence = 60.0;
    let engine = GoalReviewEngine::with_config(config);
    let goals = standard_goals();
    let food_log = logged_days(7, 1400.0, 150.0, 200.0, 70.0);
    let request = ReviewRequest::new(Uuid::new_v4(), ReviewPeriod::Weekly).at(reference_now());

    let review = engine.review(
        &request,
        &ReviewInputs {
            goals: &goals,
            stated_goal: WeightGoal::Lose,
            food_log: &food_log,
            weights: &[],
        },
    );

    assert!(review.recommendations.is_empty());
}

// ============================================================================
// Custom rules
// ============================================================================

/// Trims the fat target by 5 g whenever anything was logged
fn trim_fat_rule(context: &RuleContext<'_>) -> Option<RuleOutcome> {
    (context.days_logged > 0).then(|| RuleOutcome {
        recommendation_type: RecommendationType::MacroRebalance,
        priority: RecommendationPriority::Low,
        title: "Trim Fat Target".to_owned(),
        description: "Lower your fat target by 5 g.".to_owned(),
        rationale: format!("{} days logged.", context.days_logged),
        expected_outcome: "Slightly leaner macro split".to_owned(),
        implementation: Implementation {
            timeframe: "1 week".to_owned(),
            steps: vec!["Use less cooking oil".to_owned()],
            metrics: vec!["Daily fat intake".to_owned()],
        },
        delta: GoalDelta::single(GoalField::Fat, -5.0),
        expected_weight_change: None,
    })
}

fn review_with(engine: &GoalReviewEngine, food_log: &[FoodLogEntry]) -> GoalReview {
    init_test_logging();
    let goals = standard_goals();
    let request = ReviewRequest::new(Uuid::new_v4(), ReviewPeriod::Weekly).at(reference_now());
    engine.review(
        &request,
        &ReviewInputs {
            goals: &goals,
            stated_goal: WeightGoal::Lose,
            food_log,
            weights: &[],
        },
    )
}

#[test]
fn test_added_rule_runs_after_built_in_rules() {
    let engine = default_engine().add_rule(trim_fat_rule);
    let food_log = logged_days(7, 1400.0, 150.0, 200.0, 70.0);

    let review = review_with(&engine, &food_log);

    let titles: Vec<_> = review.recommendations.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Adjust Calorie Target", "Trim Fat Target"]);
    assert_eq!(review.suggested_goals.calories, 1900.0);
    assert_eq!(review.suggested_goals.fat, 65.0);
    assert!(review.recommendations[1].id.ends_with("_1"));
}

#[test]
fn test_replaced_rule_set_is_the_only_one_evaluated() {
    let rules: [GoalRule; 1] = [trim_fat_rule];
    let engine = default_engine().with_rules(rules.to_vec());
    let food_log = logged_days(7, 1400.0, 50.0, 200.0, 70.0);

    let review = review_with(&engine, &food_log);

    assert_eq!(review.recommendations.len(), 1);
    assert_eq!(review.recommendations[0].title, "Trim Fat Target");
    assert_eq!(review.suggested_goals.calories, 2000.0);
    assert_eq!(review.suggested_goals.protein, 150.0);
    assert_eq!(review.suggested_goals.fat, 65.0);
}

// ============================================================================
// Wire format
// ============================================================================

#[test]
fn test_review_serializes_with_camel_case_names() {
    let goals = standard_goals();
    let food_log = logged_days(7, 1400.0, 150.0, 200.0, 70.0);
    let review = run_review(ReviewPeriod::Weekly, WeightGoal::Lose, &goals, &food_log, &[]);

    let json = serde_json::to_value(&review).unwrap();

    assert_eq!(json["period"], "weekly");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["progressAnalysis"]["calorieAdherence"], 70.0);
    assert_eq!(json["progressAnalysis"]["trendDirection"], "stable");
    assert!(json["suggestedGoals"].is_object());
    assert!(json["adjustmentReason"].is_string());

    let recommendation = &json["recommendations"][0];
    assert_eq!(recommendation["type"], "calorie_adjustment");
    assert_eq!(recommendation["priority"], "high");
    assert_eq!(recommendation["impact"]["calories"], -100.0);
    assert_eq!(recommendation["impact"]["expectedWeightChange"], -0.09);
    assert!(recommendation["impact"].get("protein").is_none());
    assert!(recommendation["implementation"]["steps"].is_array());

    let parsed: GoalReview = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.id, review.id);
    assert_eq!(parsed.recommendations.len(), review.recommendations.len());
    assert_eq!(parsed.suggested_goals, review.suggested_goals);
}
