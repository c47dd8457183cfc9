// ABOUTME: Adaptive goal review engine: aggregation, adherence, trend, rules, and composition
// ABOUTME: Pure computation over caller-supplied goals and logs, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Goal Review Intelligence
//!
//! Inspects a user's nutrition and weight history, measures adherence to the
//! current goals, classifies the weight trend, and proposes goal adjustments
//! with explainable recommendations.
//!
//! ## Modules
//!
//! - **period**: symbolic period to concrete window
//! - **aggregation**: per-day nutrient totals
//! - **adherence**: capped adherence percentages
//! - **trend**: weight progress, trend direction, consistency
//! - **rules**: recommendation rules and the generator
//! - **composer**: final review assembly
//! - **engine**: the end-to-end pipeline
//! - **config**: thresholds and factors with environment overrides

/// Capped adherence scoring
pub mod adherence;
/// Daily aggregation of food log entries
pub mod aggregation;
/// Review assembly
pub mod composer;
/// Engine configuration
pub mod config;
/// End-to-end review pipeline
pub mod engine;
/// Period resolution
pub mod period;
/// Goal adjustment rules
pub mod rules;
/// Weight trend and logging consistency
pub mod trend;

pub use adherence::{adherence_percentage, AdherenceMetrics, AdherenceReport, AdherenceScorer};
pub use aggregation::{aggregate_daily, DailyAggregation};
pub use composer::{adjustment_reason, compose_review, review_id, ReviewParts};
pub use config::{ConfigError, GoalReviewConfig};
pub use engine::{GoalReviewEngine, ReviewInputs, ReviewRequest};
pub use period::PeriodWindow;
pub use rules::{
    generate_recommendations, recommendation_id, GoalRule, RecommendationSet, RuleContext,
    RuleOutcome, DEFAULT_RULES,
};
pub use trend::{analyze_trend, classify_trend, consistency_score, weight_progress, TrendAnalysis};
