// ABOUTME: Review service fetching collaborator data and running the goal review engine
// ABOUTME: Concurrent log fetching under a caller-level timeout, typed errors for missing profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal review service
//!
//! The engine is pure; this layer owns the I/O. One call resolves the window,
//! fetches the profile, fetches both logs concurrently, then computes the
//! review. Fetch and compute together are bounded by
//! [`ServiceConfig::fetch_timeout`]. Collaborator failures propagate unchanged
//! and are never retried.

use crate::config::ServiceConfig;
use crate::stores::{FoodLogStore, ProfileStore, WeightLogStore};
use chrono::{DateTime, Utc};
use goal_review_core::errors::{AppError, AppResult, ReviewError};
use goal_review_core::models::GoalReview;
use goal_review_intelligence::{GoalReviewEngine, ReviewRequest};
use std::sync::Arc;
use tokio::time;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

/// Async front of the review engine over pluggable stores
pub struct GoalReviewService<P, F, W> {
    profiles: Arc<P>,
    food_log: Arc<F>,
    weights: Arc<W>,
    engine: Arc<GoalReviewEngine>,
    config: ServiceConfig,
}

impl<P, F, W> Clone for GoalReviewService<P, F, W> {
    fn clone(&self) -> Self {
        Self {
            profiles: Arc::clone(&self.profiles),
            food_log: Arc::clone(&self.food_log),
            weights: Arc::clone(&self.weights),
            engine: Arc::clone(&self.engine),
            config: self.config,
        }
    }
}

impl<S> GoalReviewService<S, S, S>
where
    S: ProfileStore + FoodLogStore + WeightLogStore,
{
    /// Service over a single store that provides every collaborator
    #[must_use]
    pub fn from_store(store: Arc<S>) -> Self {
        Self::new(Arc::clone(&store), Arc::clone(&store), store)
    }
}

impl<P, F, W> GoalReviewService<P, F, W>
where
    P: ProfileStore,
    F: FoodLogStore,
    W: WeightLogStore,
{
    /// Create a service with the global engine and service configuration
    #[must_use]
    pub fn new(profiles: Arc<P>, food_log: Arc<F>, weights: Arc<W>) -> Self {
        Self {
            profiles,
            food_log,
            weights,
            engine: Arc::new(GoalReviewEngine::new()),
            config: *ServiceConfig::global(),
        }
    }

    /// Replace the engine
    #[must_use]
    pub fn with_engine(mut self, engine: GoalReviewEngine) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    /// Replace the service configuration
    #[must_use]
    pub const fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Engine used for computation
    #[must_use]
    pub fn engine(&self) -> &GoalReviewEngine {
        &self.engine
    }

    /// Generate a review for a period given by name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown period name, plus everything
    /// [`Self::generate_review`] returns
    pub async fn generate_review_named(
        &self,
        user_id: Uuid,
        period: &str,
        now: Option<DateTime<Utc>>,
    ) -> AppResult<GoalReview> {
        let mut request = ReviewRequest::parse(user_id, period)?;
        if let Some(now) = now {
            request = request.at(now);
        }
        self.generate_review(request).await
    }

    /// Generate a review.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when the user has no profile
    /// - `ExternalServiceTimeout` when fetching and computing exceed the timeout
    /// - any error returned by a store
    pub async fn generate_review(&self, request: ReviewRequest) -> AppResult<GoalReview> {
        // Pin "now" so the fetched window and the computed window agree
        let request = request.at(request.reference_now.unwrap_or_else(Utc::now));
        let span = info_span!(
            "goal_review",
            user_id = %request.user_id,
            period = %request.period
        );
        let timeout = self.config.fetch_timeout;

        time::timeout(timeout, self.fetch_and_review(request))
            .instrument(span)
            .await
            .map_err(|_| {
                warn!(
                    user_id = %request.user_id,
                    timeout_ms = timeout.as_millis() as u64,
                    "Goal review timed out"
                );
                AppError::timeout("Goal review", timeout).with_user_id(request.user_id)
            })?
    }

    async fn fetch_and_review(&self, request: ReviewRequest) -> AppResult<GoalReview> {
        let window = request.window();

        let profile = self
            .profiles
            .get_profile(request.user_id)
            .await?
            .ok_or(ReviewError::ProfileNotFound {
                user_id: request.user_id,
            })?;

        let (food_log, weights) = tokio::try_join!(
            self.food_log
                .list_food_entries(request.user_id, window.start, window.end),
            self.weights
                .list_weight_entries(request.user_id, window.start, window.end),
        )?;
        debug!(
            food_entries = food_log.len(),
            weight_entries = weights.len(),
            "Fetched review inputs"
        );

        Ok(self
            .engine
            .review_profile(&request, Some(&profile), &food_log, &weights)?)
    }
}
