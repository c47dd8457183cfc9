// ABOUTME: Review composer assembling scores, trend, and recommendations into a GoalReview
// ABOUTME: Builds the adjustment reason sentence and the deterministic review identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::rules::RecommendationSet;
use chrono::{DateTime, Utc};
use goal_review_core::constants::messages::GOALS_WELL_SUITED;
use goal_review_core::models::{
    GoalReview, NutritionGoals, ProgressAnalysis, Recommendation, ReviewPeriod, ReviewStatus,
};
use tracing::info;
use uuid::Uuid;

/// Review identifier derived from the owner and generation time
#[must_use]
pub fn review_id(user_id: Uuid, generated_at: DateTime<Utc>) -> String {
    format!("goal_review_{user_id}_{}", generated_at.timestamp_millis())
}

/// One-sentence summary of the review.
///
/// With recommendations it embeds rounded calorie adherence, rounded consistency,
/// and the signed weight change to one decimal; without them it is a fixed
/// neutral sentence.
#[must_use]
pub fn adjustment_reason(
    progress: &ProgressAnalysis,
    recommendations: &[Recommendation],
    period: ReviewPeriod,
) -> String {
    if recommendations.is_empty() {
        return GOALS_WELL_SUITED.to_owned();
    }
    // Changes that round to zero print as +0.0, never -0.0
    let weight_change = (progress.weight_progress * 10.0).round() / 10.0;
    let weight_change = if weight_change.abs() < f64::EPSILON {
        0.0
    } else {
        weight_change
    };
    format!(
        "Based on {:.0}% calorie adherence and {:.0}% logging consistency over the {period} period, with a weight change of {weight_change:+.1}, your goals have been adjusted to better match your progress.",
        progress.calorie_adherence.round(),
        progress.consistency_score.round(),
    )
}

/// Inputs of the final assembly step
#[derive(Debug, Clone)]
pub struct ReviewParts {
    /// Review owner
    pub user_id: Uuid,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Reviewed period
    pub period: ReviewPeriod,
    /// Goals in effect during the period
    pub current_goals: NutritionGoals,
    /// Measured progress
    pub progress: ProgressAnalysis,
    /// Generated recommendations and the resulting goals
    pub recommendations: RecommendationSet,
}

/// Assemble the immutable review record, always `Pending`
#[must_use]
pub fn compose_review(parts: ReviewParts) -> GoalReview {
    let ReviewParts {
        user_id,
        generated_at,
        period,
        current_goals,
        progress,
        recommendations:
            RecommendationSet {
                recommendations,
                suggested_goals,
            },
    } = parts;

    let adjustment_reason = adjustment_reason(&progress, &recommendations, period);

    info!(
        user_id = %user_id,
        period = %period,
        recommendations = recommendations.len(),
        calorie_adherence = progress.calorie_adherence,
        consistency_score = progress.consistency_score,
        trend = ?progress.trend_direction,
        "Composed goal review"
    );

    GoalReview {
        id: review_id(user_id, generated_at),
        user_id,
        review_date: generated_at,
        period,
        current_goals,
        suggested_goals,
        progress_analysis: progress,
        recommendations,
        adjustment_reason,
        status: ReviewStatus::Pending,
    }
}
