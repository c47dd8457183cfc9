// ABOUTME: Goal review engine configuration with environment overrides and validation
// ABOUTME: Groups scoring, trend, and rule settings behind a lazily loaded global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Review Configuration
//!
//! Every threshold the engine uses is configurable. Defaults come from
//! `goal_review_core::constants`; `GOAL_REVIEW_*` environment variables override
//! them. The loaded configuration is validated before use.
//!
//! # Environment variables
//!
//! | Variable | Field |
//! |----------|-------|
//! | `GOAL_REVIEW_ADHERENCE_CAP` | `scoring.adherence_cap` |
//! | `GOAL_REVIEW_TREND_THRESHOLD` | `trend.weight_change_threshold` |
//! | `GOAL_REVIEW_LOW_CALORIE_ADHERENCE` | `rules.thresholds.low_calorie_adherence` |
//! | `GOAL_REVIEW_LOW_PROTEIN_ADHERENCE` | `rules.thresholds.low_protein_adherence` |
//! | `GOAL_REVIEW_MACRO_OVERCONSUMPTION` | `rules.thresholds.macro_overconsumption` |
//! | `GOAL_REVIEW_GAIN_STALL_ADHERENCE` | `rules.thresholds.gain_stall_calorie_adherence` |
//! | `GOAL_REVIEW_LOW_CONSISTENCY` | `rules.thresholds.low_consistency_score` |
//! | `GOAL_REVIEW_CALORIE_REDUCTION_FACTOR` | `rules.factors.calorie_reduction` |
//! | `GOAL_REVIEW_PROTEIN_INCREASE_FACTOR` | `rules.factors.protein_increase` |
//! | `GOAL_REVIEW_MACRO_REDUCTION_FACTOR` | `rules.factors.macro_reduction` |
//! | `GOAL_REVIEW_CALORIE_INCREASE_FACTOR` | `rules.factors.calorie_increase` |

/// Configuration error types
pub mod error;
/// Rule thresholds and adjustment factors
pub mod rules;

pub use error::ConfigError;
pub use rules::{AdjustmentFactors, RecommendationRulesConfig, RuleThresholds};

use goal_review_core::constants::{adherence, trend};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static GOAL_REVIEW_CONFIG: OnceLock<GoalReviewConfig> = OnceLock::new();

/// Adherence scoring settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Upper bound for any adherence percentage
    pub adherence_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            adherence_cap: adherence::MAX_ADHERENCE_PERCENT,
        }
    }
}

/// Weight trend settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendConfig {
    /// Weight change that must be exceeded before a trend is called
    pub weight_change_threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            weight_change_threshold: trend::WEIGHT_CHANGE_THRESHOLD,
        }
    }
}

/// Main goal review configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalReviewConfig {
    /// Adherence scoring
    pub scoring: ScoringConfig,
    /// Trend classification
    pub trend: TrendConfig,
    /// Recommendation rules
    pub rules: RecommendationRulesConfig,
}

impl GoalReviewConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        GOAL_REVIEW_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load goal review config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first setting that is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scoring.adherence_cap.is_finite() || self.scoring.adherence_cap < 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "adherence_cap must be a finite value >= 100",
            ));
        }

        if !self.trend.weight_change_threshold.is_finite()
            || self.trend.weight_change_threshold < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "weight_change_threshold must be a finite value >= 0",
            ));
        }

        let thresholds = &self.rules.thresholds;
        for (value, message) in [
            (
                thresholds.low_calorie_adherence,
                "low_calorie_adherence must be between 0 and the adherence cap",
            ),
            (
                thresholds.low_protein_adherence,
                "low_protein_adherence must be between 0 and the adherence cap",
            ),
            (
                thresholds.macro_overconsumption,
                "macro_overconsumption must be between 0 and the adherence cap",
            ),
            (
                thresholds.gain_stall_calorie_adherence,
                "gain_stall_calorie_adherence must be between 0 and the adherence cap",
            ),
        ] {
            if !(0.0..=self.scoring.adherence_cap).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }

        if !(0.0..=100.0).contains(&thresholds.low_consistency_score) {
            return Err(ConfigError::ValueOutOfRange(
                "low_consistency_score must be between 0 and 100",
            ));
        }

        if thresholds.low_calorie_adherence >= thresholds.gain_stall_calorie_adherence {
            return Err(ConfigError::InvalidRange(
                "low_calorie_adherence must be < gain_stall_calorie_adherence",
            ));
        }

        let factors = &self.rules.factors;
        for (value, message) in [
            (
                factors.calorie_reduction,
                "calorie_reduction must be in (0, 1]",
            ),
            (factors.protein_increase, "protein_increase must be in (0, 1]"),
            (factors.macro_reduction, "macro_reduction must be in (0, 1]"),
            (factors.calorie_increase, "calorie_increase must be in (0, 1]"),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }

        if !factors.kcal_per_kg.is_finite() || factors.kcal_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("kcal_per_kg must be positive"));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
            }
            Err(VarError::NotPresent) => {}
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("GOAL_REVIEW_ADHERENCE_CAP", &mut self.scoring.adherence_cap)?;
        Self::apply_env_var(
            "GOAL_REVIEW_TREND_THRESHOLD",
            &mut self.trend.weight_change_threshold,
        )?;

        let thresholds = &mut self.rules.thresholds;
        Self::apply_env_var(
            "GOAL_REVIEW_LOW_CALORIE_ADHERENCE",
            &mut thresholds.low_calorie_adherence,
        )?;
        Self::apply_env_var(
            "GOAL_REVIEW_LOW_PROTEIN_ADHERENCE",
            &mut thresholds.low_protein_adherence,
        )?;
        Self::apply_env_var(
            "GOAL_REVIEW_MACRO_OVERCONSUMPTION",
            &mut thresholds.macro_overconsumption,
        )?;
        Self::apply_env_var(
            "GOAL_REVIEW_GAIN_STALL_ADHERENCE",
            &mut thresholds.gain_stall_calorie_adherence,
        )?;
        Self::apply_env_var(
            "GOAL_REVIEW_LOW_CONSISTENCY",
            &mut thresholds.low_consistency_score,
        )?;

        let factors = &mut self.rules.factors;
        Self::apply_env_var(
            "GOAL_REVIEW_CALORIE_REDUCTION_FACTOR",
            &mut factors.calorie_reduction,
        )?;
        Self::apply_env_var(
            "GOAL_REVIEW_PROTEIN_INCREASE_FACTOR",
            &mut factors.protein_increase,
        )?;
        Self::apply_env_var(
            "GOAL_REVIEW_MACRO_REDUCTION_FACTOR",
            &mut factors.macro_reduction,
        )?;
        Self::apply_env_var(
            "GOAL_REVIEW_CALORIE_INCREASE_FACTOR",
            &mut factors.calorie_increase,
        )?;

        Ok(self)
    }
}
