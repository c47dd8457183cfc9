// ABOUTME: Goal review records: periods, progress analysis, recommendations, and the review itself
// ABOUTME: ReviewPeriod, TrendDirection, Recommendation, ProgressAnalysis, and GoalReview definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{GoalDelta, NutritionGoals};
use crate::constants::period_days;
use crate::errors::ReviewError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Symbolic review window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReviewPeriod {
    /// Last 7 days
    Weekly,
    /// Last 30 days
    Monthly,
    /// Last 90 days
    Quarterly,
}

impl ReviewPeriod {
    /// Every valid period, shortest first
    pub const ALL: [Self; 3] = [Self::Weekly, Self::Monthly, Self::Quarterly];

    /// Window length in days
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Weekly => period_days::WEEKLY,
            Self::Monthly => period_days::MONTHLY,
            Self::Quarterly => period_days::QUARTERLY,
        }
    }

    /// Period name as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }
}

impl fmt::Display for ReviewPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewPeriod {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            _ => Err(ReviewError::InvalidPeriod(s.to_owned())),
        }
    }
}

/// Qualitative weight trend relative to the stated goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Weight moving toward the goal
    Improving,
    /// Weight moving away from the goal
    Declining,
    /// No change beyond the noise threshold
    Stable,
}

/// Lifecycle of a review; the engine only ever creates `Pending` reviews
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Awaiting a decision by the user
    Pending,
    /// Suggested goals were adopted by the host application
    Accepted,
    /// Suggested goals were declined
    Rejected,
}

/// Category of a recommendation
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Change to the daily calorie target
    CalorieAdjustment,
    /// Change to one or more macro targets
    MacroRebalance,
    /// Logging habit guidance, no goal change
    Consistency,
}

impl RecommendationType {
    /// Type name as used on the wire and in identifiers
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CalorieAdjustment => "calorie_adjustment",
            Self::MacroRebalance => "macro_rebalance",
            Self::Consistency => "consistency",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    /// Act on this first
    High,
    /// Worth acting on soon
    Medium,
    /// Nice to have
    Low,
}

impl RecommendationPriority {
    /// Sort rank, lower is more urgent
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// How to put a recommendation into practice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Implementation {
    /// Expected time to see results (e.g. "2-3 weeks")
    pub timeframe: String,
    /// Ordered action steps
    pub steps: Vec<String>,
    /// Metrics to monitor while following the steps
    pub metrics: Vec<String>,
}

/// Goal changes proposed by a recommendation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationImpact {
    /// Per-field deltas, only goal fields may appear
    #[serde(flatten)]
    pub changes: GoalDelta,
    /// Projected weekly weight change if the recommendation is followed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expected_weight_change: Option<f64>,
}

/// Explainable suggestion to alter one or more goals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Identifier, unique within one review
    pub id: String,
    /// Recommendation category
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    /// Urgency
    pub priority: RecommendationPriority,
    /// Short headline
    pub title: String,
    /// What to change
    pub description: String,
    /// Why, including the measured numbers
    pub rationale: String,
    /// What following the recommendation should achieve
    pub expected_outcome: String,
    /// How to follow it
    pub implementation: Implementation,
    /// Proposed goal changes
    pub impact: RecommendationImpact,
}

/// Sort recommendations high → low priority, keeping generation order within a priority
pub fn sort_by_priority(recommendations: &mut [Recommendation]) {
    recommendations.sort_by_key(|recommendation| recommendation.priority.rank());
}

/// Measured progress over the review period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressAnalysis {
    /// Average calories as a capped percentage of the goal
    pub calorie_adherence: f64,
    /// Average protein as a capped percentage of the goal
    pub protein_adherence: f64,
    /// Average carbohydrates as a capped percentage of the goal
    pub carbs_adherence: f64,
    /// Average fat as a capped percentage of the goal
    pub fat_adherence: f64,
    /// Last minus first weight in the window
    pub weight_progress: f64,
    /// Percentage of the period's days with at least one logged entry
    pub consistency_score: f64,
    /// Trend relative to the stated goal
    pub trend_direction: TrendDirection,
}

/// The terminal artifact of a goal review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalReview {
    /// Review identifier
    pub id: String,
    /// User the review belongs to
    pub user_id: Uuid,
    /// Generation timestamp
    pub review_date: DateTime<Utc>,
    /// Window the review covers
    pub period: ReviewPeriod,
    /// Goals in effect during the period
    pub current_goals: NutritionGoals,
    /// Current goals with every recommendation's deltas applied
    pub suggested_goals: NutritionGoals,
    /// Measured progress
    pub progress_analysis: ProgressAnalysis,
    /// Recommendations in generation order
    pub recommendations: Vec<Recommendation>,
    /// One-sentence summary of why goals should (not) change
    pub adjustment_reason: String,
    /// Always `Pending` at creation
    pub status: ReviewStatus,
}

impl GoalReview {
    /// True when at least one recommendation proposes a goal change
    #[must_use]
    pub fn has_adjustments(&self) -> bool {
        self.recommendations
            .iter()
            .any(|recommendation| !recommendation.impact.changes.is_empty())
    }
}
