// ABOUTME: Collaborator store abstractions for profiles, food logs, and weight logs
// ABOUTME: Pluggable async backends (in-memory, JSON fixture) consumed by the review service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Review input stores
//!
//! The review engine never performs I/O. The service fetches a profile and both
//! logs through these traits and hands the data to the engine.
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use goal_review_engine::models::{NutritionGoals, NutritionProfile, WeightGoal};
//! use goal_review_engine::stores::{memory::InMemoryStore, ProfileStore};
//! use uuid::Uuid;
//! # async fn example() -> Result<(), goal_review_engine::errors::AppError> {
//!
//! let store = InMemoryStore::new();
//! let user_id = Uuid::new_v4();
//! store.insert_profile(NutritionProfile::new(
//!     user_id,
//!     NutritionGoals::new(2000.0, 150.0, 200.0, 70.0),
//!     WeightGoal::Lose,
//! ));
//!
//! let profile = store.get_profile(user_id).await?;
//! assert!(profile.is_some());
//! # Ok(())
//! # }
//! ```

/// `JSON` fixture file backed store
pub mod json_file;
/// In-memory store implementation
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use goal_review_core::errors::AppResult;
use goal_review_core::models::{FoodLogEntry, NutritionProfile, WeightEntry};
use uuid::Uuid;

/// Source of nutrition profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile for a user, `None` when the user has none
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<NutritionProfile>>;
}

/// Source of food log entries
#[async_trait]
pub trait FoodLogStore: Send + Sync {
    /// Entries logged in `[start, end]`, in any order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list_food_entries(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<FoodLogEntry>>;
}

/// Source of weight entries
#[async_trait]
pub trait WeightLogStore: Send + Sync {
    /// Entries dated within `[start, end]` (by calendar date), in any order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list_weight_entries(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WeightEntry>>;
}
