// ABOUTME: Error variants raised by the goal review pipeline
// ABOUTME: Fatal preconditions (missing profile, invalid period/goal) with AppError conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;
use uuid::Uuid;

/// Fatal failures of a goal review.
///
/// Everything else (empty logs, no weight entries, zero-valued goals) degrades to
/// neutral values instead of failing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// No profile (and therefore no goals) exists for the user
    #[error("Nutrition profile not found for user {user_id}")]
    ProfileNotFound {
        /// User whose profile was requested
        user_id: Uuid,
    },

    /// Period is not one of `weekly`, `monthly`, `quarterly`
    #[error("Invalid review period '{0}': expected weekly, monthly, or quarterly")]
    InvalidPeriod(String),

    /// Stated goal is not one of `lose`, `maintain`, `gain`
    #[error("Invalid weight goal '{0}': expected lose, maintain, or gain")]
    InvalidGoal(String),
}

impl ReviewError {
    /// Error code used when surfacing this failure to a request layer
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ProfileNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::InvalidPeriod(_) | Self::InvalidGoal(_) => ErrorCode::InvalidInput,
        }
    }
}

impl From<ReviewError> for AppError {
    fn from(error: ReviewError) -> Self {
        let code = error.code();
        let app_error = Self::new(code, error.to_string());
        match error {
            ReviewError::ProfileNotFound { user_id } => app_error
                .with_user_id(user_id)
                .with_resource_id("nutrition_profile"),
            ReviewError::InvalidPeriod(value) => {
                app_error.with_details(serde_json::json!({ "period": value }))
            }
            ReviewError::InvalidGoal(value) => {
                app_error.with_details(serde_json::json!({ "goal": value }))
            }
        }
    }
}
