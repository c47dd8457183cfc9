// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Lists the supported review periods with their window lengths
// ABOUTME: Output is one tab-separated line per period

use goal_review_engine::models::ReviewPeriod;

/// Print every period and its length in days
pub fn run() {
    for period in ReviewPeriod::ALL {
        println!("{period}\t{} days", period.days());
    }
}
