// ABOUTME: Nutrition profile as returned by the host's profile store
// ABOUTME: Pairs a user's current goals with their stated weight objective
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{NutritionGoals, WeightGoal};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Goals and objective for one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    /// Profile owner
    pub user_id: Uuid,
    /// Current daily targets
    pub goals: NutritionGoals,
    /// Stated weight objective
    pub stated_goal: WeightGoal,
}

impl NutritionProfile {
    /// Create a profile
    #[must_use]
    pub const fn new(user_id: Uuid, goals: NutritionGoals, stated_goal: WeightGoal) -> Self {
        Self {
            user_id,
            goals,
            stated_goal,
        }
    }
}
