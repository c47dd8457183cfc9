// ABOUTME: Constants for goal review period lengths, adherence bounds, and rule thresholds
// ABOUTME: Shared defaults consumed by the intelligence configuration and the review models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal review constants
//!
//! Default values used throughout the review pipeline. Every tunable value here
//! has a matching field in the intelligence configuration, which may override it
//! from the environment.

/// Length of each symbolic review period in days
pub mod period_days {
    /// Weekly review window
    pub const WEEKLY: u32 = 7;
    /// Monthly review window
    pub const MONTHLY: u32 = 30;
    /// Quarterly review window
    pub const QUARTERLY: u32 = 90;
}

/// Adherence scoring bounds
pub mod adherence {
    /// Upper bound on any adherence percentage, limits runaway recommendations
    /// from extreme over-consumption
    pub const MAX_ADHERENCE_PERCENT: f64 = 150.0;

    /// Adherence representing exactly on-target intake
    pub const TARGET_ADHERENCE_PERCENT: f64 = 100.0;
}

/// Weight trend classification
pub mod trend {
    /// Absolute weight change (user units) that separates a real trend from noise
    pub const WEIGHT_CHANGE_THRESHOLD: f64 = 0.5;
}

/// Consistency scoring
pub mod consistency {
    /// Maximum consistency score (every day of the period logged)
    pub const MAX_CONSISTENCY_SCORE: f64 = 100.0;
}

/// Thresholds that trigger goal adjustment rules (percent adherence unless noted)
pub mod rule_thresholds {
    /// Calorie adherence below which a weight-loss user gets a calorie reduction
    pub const LOW_CALORIE_ADHERENCE: f64 = 80.0;

    /// Protein adherence below which the protein target is raised
    pub const LOW_PROTEIN_ADHERENCE: f64 = 70.0;

    /// Carb/fat adherence above which that macro target is rebalanced downward
    pub const MACRO_OVERCONSUMPTION: f64 = 120.0;

    /// Calorie adherence at or above which a stalled gain warrants more calories
    pub const GAIN_STALL_CALORIE_ADHERENCE: f64 = 95.0;

    /// Consistency score (percent of days logged) below which logging is flagged
    pub const LOW_CONSISTENCY_SCORE: f64 = 50.0;
}

/// Multipliers applied to current goals when a rule fires
pub mod adjustment_factors {
    /// New calorie target as a fraction of the current one (weight loss)
    pub const CALORIE_REDUCTION_FACTOR: f64 = 0.95;

    /// Protein increase as a fraction of the current target
    pub const PROTEIN_INCREASE_FACTOR: f64 = 0.10;

    /// Carb/fat decrease as a fraction of the current target
    pub const MACRO_REDUCTION_FACTOR: f64 = 0.10;

    /// Calorie increase as a fraction of the current target (weight gain)
    pub const CALORIE_INCREASE_FACTOR: f64 = 0.05;
}

/// Energy balance figures used to project weight change
pub mod energy {
    /// Approximate energy stored in one kilogram of body mass (kcal)
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

    /// Days per week, for daily-to-weekly projections
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Fixed wording of review summaries
pub mod messages {
    /// Adjustment reason used when no recommendation fired
    pub const GOALS_WELL_SUITED: &str =
        "Your current goals appear well-suited to your progress. Keep up the great work!";
}

/// Service identification for structured logging
pub mod service_names {
    /// Default service name reported in logs
    pub const GOAL_REVIEW_ENGINE: &str = "goal-review-engine";
}

/// Collaborator access limits
pub mod collaborators {
    /// Default caller-level timeout around fetching profile and logs (seconds)
    pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

    /// Largest accepted fetch timeout (seconds)
    pub const MAX_FETCH_TIMEOUT_SECS: u64 = 300;
}
