// ABOUTME: In-memory review input store backed by concurrent hash maps
// ABOUTME: Implements the profile, food log, and weight log stores for tests and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FoodLogStore, ProfileStore, WeightLogStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use goal_review_core::errors::AppResult;
use goal_review_core::models::{FoodLogEntry, NutritionProfile, WeightEntry};
use std::sync::Arc;
use uuid::Uuid;

/// Thread-safe store keeping every collaborator's data in memory.
///
/// Cloning is cheap and clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    profiles: Arc<DashMap<Uuid, NutritionProfile>>,
    food_log: Arc<DashMap<Uuid, Vec<FoodLogEntry>>>,
    weights: Arc<DashMap<Uuid, Vec<WeightEntry>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile
    pub fn insert_profile(&self, profile: NutritionProfile) {
        self.profiles.insert(profile.user_id, profile);
    }

    /// Append food log entries for a user
    pub fn log_food(&self, user_id: Uuid, entries: impl IntoIterator<Item = FoodLogEntry>) {
        self.food_log.entry(user_id).or_default().extend(entries);
    }

    /// Append weight entries for a user
    pub fn log_weights(&self, user_id: Uuid, entries: impl IntoIterator<Item = WeightEntry>) {
        self.weights.entry(user_id).or_default().extend(entries);
    }

    /// Number of stored profiles
    #[must_use]
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<NutritionProfile>> {
        Ok(self.profiles.get(&user_id).map(|p| p.value().clone()))
    }
}

#[async_trait]
impl FoodLogStore for InMemoryStore {
    async fn list_food_entries(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<FoodLogEntry>> {
        Ok(self.food_log.get(&user_id).map_or_else(Vec::new, |entries| {
            entries
                .iter()
                .filter(|e| e.logged_at_timestamp >= start && e.logged_at_timestamp <= end)
                .cloned()
                .collect()
        }))
    }
}

#[async_trait]
impl WeightLogStore for InMemoryStore {
    async fn list_weight_entries(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WeightEntry>> {
        let (first, last) = (start.date_naive(), end.date_naive());
        Ok(self.weights.get(&user_id).map_or_else(Vec::new, |entries| {
            entries
                .iter()
                .filter(|w| w.date >= first && w.date <= last)
                .copied()
                .collect()
        }))
    }
}
