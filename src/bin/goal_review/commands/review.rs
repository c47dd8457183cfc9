// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Runs a goal review over a JSON fixture through the review service
// ABOUTME: Resolves the user from the fixture when not given and prints the review JSON

use anyhow::Result;
use chrono::{DateTime, Utc};
use goal_review_engine::models::ReviewPeriod;
use goal_review_engine::service::GoalReviewService;
use goal_review_engine::stores::json_file::JsonFileStore;
use goal_review_engine::ReviewRequest;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Review the fixture at `input` and print the result
pub async fn run(
    input: &Path,
    period: ReviewPeriod,
    now: Option<DateTime<Utc>>,
    user: Option<Uuid>,
    pretty: bool,
) -> Result<()> {
    let store = Arc::new(JsonFileStore::new(input));
    let user_id = match user {
        Some(user_id) => user_id,
        None => store.fixture().await?.user_id(),
    };

    let mut request = ReviewRequest::new(user_id, period);
    if let Some(now) = now {
        request = request.at(now);
    }

    let service = GoalReviewService::from_store(store);
    let review = service.generate_review(request).await?;
    info!(
        review_id = %review.id,
        recommendations = review.recommendations.len(),
        "Review generated"
    );

    let output = if pretty {
        serde_json::to_string_pretty(&review)?
    } else {
        serde_json::to_string(&review)?
    };
    println!("{output}");
    Ok(())
}
