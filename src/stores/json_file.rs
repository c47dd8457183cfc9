// ABOUTME: JSON file backed review input store reading a single user's fixture
// ABOUTME: Profile, food log, and weight entries loaded from disk on every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FoodLogStore, ProfileStore, WeightLogStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use goal_review_core::errors::{AppError, AppResult};
use goal_review_core::models::{FoodLogEntry, NutritionProfile, WeightEntry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

/// Everything a review reads for one user, as stored on disk
///
/// ```json
/// {
///   "profile": {
///     "userId": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
///     "goals": { "calories": 2000, "protein": 150, "carbs": 200, "fat": 70 },
///     "statedGoal": "lose"
///   },
///   "foodLog": [
///     { "loggedAtTimestamp": "2024-03-01T12:00:00Z", "calories": 600,
///       "protein": 40, "carbs": 60, "fat": 20, "servings": 1 }
///   ],
///   "weights": [ { "date": "2024-03-01", "weight": 82.4 } ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFixture {
    /// Goals and stated objective
    pub profile: NutritionProfile,
    /// Food log history
    #[serde(default)]
    pub food_log: Vec<FoodLogEntry>,
    /// Weight history
    #[serde(default)]
    pub weights: Vec<WeightEntry>,
}

impl ReviewFixture {
    /// Parse a fixture from `JSON` text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is not a valid fixture
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a fixture file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or a serialization
    /// error if its contents are not a valid fixture
    pub async fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read fixture {}", path.display())).with_source(e)
        })?;
        Self::from_json(&text)
    }

    /// Write the fixture as pretty `JSON`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be written
    pub async fn save(&self, path: &Path) -> AppResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).await.map_err(|e| {
            AppError::storage(format!("Failed to write fixture {}", path.display())).with_source(e)
        })
    }

    /// Owner of the fixture
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.profile.user_id
    }
}

/// Store serving one user's data from a fixture file.
///
/// The file is re-read on every call so edits show up without a restart.
/// Requests for any other user see no profile and empty logs.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given fixture path; the file is not read yet
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Fixture path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the fixture
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed
    pub async fn fixture(&self) -> AppResult<ReviewFixture> {
        let fixture = ReviewFixture::load(&self.path).await?;
        debug!(
            path = %self.path.display(),
            food_entries = fixture.food_log.len(),
            weight_entries = fixture.weights.len(),
            "Loaded review fixture"
        );
        Ok(fixture)
    }

    async fn fixture_for(&self, user_id: Uuid) -> AppResult<Option<ReviewFixture>> {
        let fixture = self.fixture().await?;
        Ok((fixture.user_id() == user_id).then_some(fixture))
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<NutritionProfile>> {
        Ok(self.fixture_for(user_id).await?.map(|f| f.profile))
    }
}

#[async_trait]
impl FoodLogStore for JsonFileStore {
    async fn list_food_entries(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<FoodLogEntry>> {
        Ok(self
            .fixture_for(user_id)
            .await?
            .map(|f| {
                f.food_log
                    .into_iter()
                    .filter(|e| e.logged_at_timestamp >= start && e.logged_at_timestamp <= end)
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl WeightLogStore for JsonFileStore {
    async fn list_weight_entries(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WeightEntry>> {
        let (first, last) = (start.date_naive(), end.date_naive());
        Ok(self
            .fixture_for(user_id)
            .await?
            .map(|f| {
                f.weights
                    .into_iter()
                    .filter(|w| w.date >= first && w.date <= last)
                    .collect()
            })
            .unwrap_or_default())
    }
}
