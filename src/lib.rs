// ABOUTME: Main library entry point for the adaptive goal review engine
// ABOUTME: Re-exports core models and the engine, adds stores, the async service, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Goal Review Engine
//!
//! Periodic reviews of a user's nutrition goals. A review measures adherence to
//! the current calorie and macro targets, classifies the weight trend against
//! the stated objective, and proposes adjusted goals with explainable
//! recommendations.
//!
//! ## Architecture
//!
//! - **`goal-review-core`**: models, error types, constants
//! - **`goal-review-intelligence`**: the pure review engine and its configuration
//! - **stores**: async collaborator traits with in-memory and `JSON` file backends
//! - **service**: fetch-then-compute orchestration under a timeout
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use goal_review_engine::errors::AppResult;
//! use goal_review_engine::models::{NutritionGoals, NutritionProfile, ReviewPeriod, WeightGoal};
//! use goal_review_engine::service::GoalReviewService;
//! use goal_review_engine::stores::memory::InMemoryStore;
//! use goal_review_engine::ReviewRequest;
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryStore::new());
//!     let user_id = Uuid::new_v4();
//!     store.insert_profile(NutritionProfile::new(
//!         user_id,
//!         NutritionGoals::new(2000.0, 150.0, 200.0, 70.0),
//!         WeightGoal::Lose,
//!     ));
//!
//!     let service = GoalReviewService::from_store(store);
//!     let review = service
//!         .generate_review(ReviewRequest::new(user_id, ReviewPeriod::Weekly))
//!         .await?;
//!     println!("{}", review.adjustment_reason);
//!     Ok(())
//! }
//! ```

/// Service configuration
pub mod config;
/// Structured logging setup
pub mod logging;
/// Async review service
pub mod service;
/// Collaborator stores
pub mod stores;

/// Unified error types
pub use goal_review_core::errors;
/// Domain models
pub use goal_review_core::models;
/// Shared constants
pub use goal_review_core::constants;

/// The review engine
pub use goal_review_intelligence as intelligence;

pub use goal_review_intelligence::{GoalReviewConfig, GoalReviewEngine, ReviewInputs, ReviewRequest};
