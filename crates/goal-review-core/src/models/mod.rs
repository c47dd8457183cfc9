// ABOUTME: Core data models for nutrition goal reviews
// ABOUTME: Re-exports nutrition, weight, profile, and review record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Goals, log entries, and profiles are owned by the host application and only
//! read here. Daily totals, recommendations, and reviews are derived on every
//! review and never persisted by the engine.

/// Goals, food log entries, daily totals, and goal deltas
pub mod nutrition;
/// User profile as supplied by the profile store
pub mod profile;
/// Review periods, recommendations, and the review record
pub mod review;
/// Weight entries and stated weight goal
pub mod weight;

pub use nutrition::{DailyTotal, FoodLogEntry, GoalDelta, GoalField, MacroTotals, NutritionGoals};
pub use profile::NutritionProfile;
pub use review::{
    sort_by_priority, GoalReview, Implementation, ProgressAnalysis, Recommendation,
    RecommendationImpact, RecommendationPriority, RecommendationType, ReviewPeriod, ReviewStatus,
    TrendDirection,
};
pub use weight::{WeightEntry, WeightGoal};
