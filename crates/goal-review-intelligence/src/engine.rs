// ABOUTME: Goal review engine running the full pipeline from raw logs to a composed review
// ABOUTME: Period resolution, daily aggregation, parallel scoring and trend, rules, and composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal review engine
//!
//! A pure, synchronous computation over data the caller already fetched:
//!
//! ```text
//! PeriodWindow -> aggregate_daily -> { AdherenceScorer, analyze_trend } -> rules -> compose_review
//! ```
//!
//! Scoring and trend classification only read the aggregation and the inputs,
//! so they run side by side on the rayon pool.

use crate::adherence::{AdherenceReport, AdherenceScorer};
use crate::aggregation::aggregate_daily;
use crate::composer::{compose_review, ReviewParts};
use crate::config::GoalReviewConfig;
use crate::period::PeriodWindow;
use crate::rules::{generate_recommendations, GoalRule, RuleContext, DEFAULT_RULES};
use crate::trend::{analyze_trend, consistency_score, TrendAnalysis};
use chrono::{DateTime, Utc};
use goal_review_core::errors::ReviewError;
use goal_review_core::models::{
    FoodLogEntry, GoalReview, NutritionGoals, NutritionProfile, ProgressAnalysis, ReviewPeriod,
    WeightEntry, WeightGoal,
};
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

/// Who and what to review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewRequest {
    /// Review owner
    pub user_id: Uuid,
    /// Symbolic period
    pub period: ReviewPeriod,
    /// Reference "now"; the current time when absent
    pub reference_now: Option<DateTime<Utc>>,
}

impl ReviewRequest {
    /// Request ending at the current time
    #[must_use]
    pub const fn new(user_id: Uuid, period: ReviewPeriod) -> Self {
        Self {
            user_id,
            period,
            reference_now: None,
        }
    }

    /// Parse a request with a period given by name
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::InvalidPeriod` when the period name is not recognized
    pub fn parse(user_id: Uuid, period: &str) -> Result<Self, ReviewError> {
        Ok(Self::new(user_id, period.parse()?))
    }

    /// Pin the reference instant
    #[must_use]
    pub fn at(mut self, reference_now: DateTime<Utc>) -> Self {
        self.reference_now = Some(reference_now);
        self
    }

    /// Resolve the concrete window for this request
    #[must_use]
    pub fn window(&self) -> PeriodWindow {
        PeriodWindow::resolve(self.period, self.reference_now.unwrap_or_else(Utc::now))
    }
}

/// Externally owned data the review reads
#[derive(Debug, Clone, Copy)]
pub struct ReviewInputs<'a> {
    /// Current goals
    pub goals: &'a NutritionGoals,
    /// Stated weight objective
    pub stated_goal: WeightGoal,
    /// Food log entries (may extend beyond the window)
    pub food_log: &'a [FoodLogEntry],
    /// Weight entries in any order (may extend beyond the window)
    pub weights: &'a [WeightEntry],
}

/// Adaptive goal review engine with configurable thresholds and rule set
#[derive(Clone)]
pub struct GoalReviewEngine {
    config: GoalReviewConfig,
    rules: Vec<GoalRule>,
}

impl fmt::Debug for GoalReviewEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoalReviewEngine")
            .field("config", &self.config)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl Default for GoalReviewEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalReviewEngine {
    /// Create an engine using the global configuration and the built-in rules
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GoalReviewConfig::global().clone())
    }

    /// Create with custom configuration
    #[must_use]
    pub fn with_config(config: GoalReviewConfig) -> Self {
        Self {
            config,
            rules: DEFAULT_RULES.to_vec(),
        }
    }

    /// Replace the rule set; rules run in the given order
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<GoalRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Append a rule after the existing ones
    #[must_use]
    pub fn add_rule(mut self, rule: GoalRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &GoalReviewConfig {
        &self.config
    }

    /// Run a review over already fetched inputs.
    ///
    /// Never fails: empty logs, missing weights, and zero goals all degrade to
    /// neutral values.
    #[must_use]
    pub fn review(&self, request: &ReviewRequest, inputs: &ReviewInputs<'_>) -> GoalReview {
        let window = request.window();
        let generated_at = window.end;

        let aggregation = aggregate_daily(inputs.food_log, &window);
        if aggregation.is_empty() {
            warn!(
                user_id = %request.user_id,
                period = %request.period,
                "No food log entries in review window"
            );
        }

        let scorer = AdherenceScorer::new(self.config.scoring.adherence_cap);
        let threshold = self.config.trend.weight_change_threshold;
        let (adherence, trend): (AdherenceReport, TrendAnalysis) = rayon::join(
            || scorer.score(&aggregation, inputs.goals),
            || analyze_trend(inputs.weights, &window, inputs.stated_goal, threshold),
        );

        let days_logged = aggregation.days_logged();
        let consistency = consistency_score(days_logged, request.period);
        debug!(days_logged, consistency_score = consistency, "Computed consistency");

        let progress = ProgressAnalysis {
            calorie_adherence: adherence.metrics.calories,
            protein_adherence: adherence.metrics.protein,
            carbs_adherence: adherence.metrics.carbs,
            fat_adherence: adherence.metrics.fat,
            weight_progress: trend.weight_progress,
            consistency_score: consistency,
            trend_direction: trend.direction,
        };

        let context = RuleContext {
            metrics: &adherence.metrics,
            averages: &adherence.averages,
            current_goals: inputs.goals,
            stated_goal: inputs.stated_goal,
            trend: trend.direction,
            weight_progress: trend.weight_progress,
            weight_entries: trend.entries_in_window,
            consistency_score: consistency,
            days_logged,
            period: request.period,
            config: &self.config.rules,
        };
        let recommendations = generate_recommendations(&context, &self.rules, generated_at);

        compose_review(ReviewParts {
            user_id: request.user_id,
            generated_at,
            period: request.period,
            current_goals: *inputs.goals,
            progress,
            recommendations,
        })
    }

    /// Run a review for a profile that may not exist.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::ProfileNotFound` when `profile` is `None`
    pub fn review_profile(
        &self,
        request: &ReviewRequest,
        profile: Option<&NutritionProfile>,
        food_log: &[FoodLogEntry],
        weights: &[WeightEntry],
    ) -> Result<GoalReview, ReviewError> {
        let profile = profile.ok_or(ReviewError::ProfileNotFound {
            user_id: request.user_id,
        })?;
        Ok(self.review(
            request,
            &ReviewInputs {
                goals: &profile.goals,
                stated_goal: profile.stated_goal,
                food_log,
                weights,
            },
        ))
    }
}
