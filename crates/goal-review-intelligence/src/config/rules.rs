// ABOUTME: Recommendation rule configuration for goal adjustments
// ABOUTME: Configures trigger thresholds and the adjustment factors applied when rules fire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Rule Configuration
//!
//! Thresholds decide whether a rule fires, factors decide how far it moves a goal.

use goal_review_core::constants::{adjustment_factors, energy, rule_thresholds};
use serde::{Deserialize, Serialize};

/// Thresholds for triggering goal adjustment rules (percent unless noted)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleThresholds {
    /// Calorie adherence below which a weight-loss calorie reduction fires
    pub low_calorie_adherence: f64,
    /// Protein adherence below which a protein increase fires
    pub low_protein_adherence: f64,
    /// Carb/fat adherence above which that macro is rebalanced
    pub macro_overconsumption: f64,
    /// Calorie adherence at or above which a stalled gain gets more calories
    pub gain_stall_calorie_adherence: f64,
    /// Consistency score below which a logging reminder fires
    pub low_consistency_score: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            low_calorie_adherence: rule_thresholds::LOW_CALORIE_ADHERENCE,
            low_protein_adherence: rule_thresholds::LOW_PROTEIN_ADHERENCE,
            macro_overconsumption: rule_thresholds::MACRO_OVERCONSUMPTION,
            gain_stall_calorie_adherence: rule_thresholds::GAIN_STALL_CALORIE_ADHERENCE,
            low_consistency_score: rule_thresholds::LOW_CONSISTENCY_SCORE,
        }
    }
}

/// How far each rule moves the goal it targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjustmentFactors {
    /// New calorie target as a fraction of the current one
    pub calorie_reduction: f64,
    /// Protein increase as a fraction of the current target
    pub protein_increase: f64,
    /// Carb/fat decrease as a fraction of the current target
    pub macro_reduction: f64,
    /// Calorie increase as a fraction of the current target
    pub calorie_increase: f64,
    /// Energy per unit of body weight, for weight change projections
    pub kcal_per_kg: f64,
}

impl Default for AdjustmentFactors {
    fn default() -> Self {
        Self {
            calorie_reduction: adjustment_factors::CALORIE_REDUCTION_FACTOR,
            protein_increase: adjustment_factors::PROTEIN_INCREASE_FACTOR,
            macro_reduction: adjustment_factors::MACRO_REDUCTION_FACTOR,
            calorie_increase: adjustment_factors::CALORIE_INCREASE_FACTOR,
            kcal_per_kg: energy::KCAL_PER_KG_BODY_MASS,
        }
    }
}

/// Recommendation rule configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRulesConfig {
    /// Trigger thresholds
    pub thresholds: RuleThresholds,
    /// Adjustment factors
    pub factors: AdjustmentFactors,
}
