// ABOUTME: goal-review CLI - run a goal review over a JSON fixture from the command line
// ABOUTME: Prints the review as JSON, or lists the supported review periods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Weekly review ending now
//! goal-review review --input fixture.json --period weekly
//!
//! # Reproducible monthly review at a fixed instant, pretty printed
//! goal-review review --input fixture.json --period monthly --now 2024-03-31T12:00:00Z --pretty
//!
//! # List the supported periods
//! goal-review periods
//! ```

mod commands;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use goal_review_engine::logging::LoggingConfig;
use goal_review_engine::models::ReviewPeriod;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "goal-review",
    about = "Adaptive nutrition goal review",
    long_about = "Review nutrition goal adherence and weight trend over a period and suggest adjusted goals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run a review over a fixture file and print it as JSON
    Review {
        /// Fixture file with profile, food log, and weights
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Review period (weekly, monthly, quarterly)
        #[arg(long, short = 'p', default_value = "weekly")]
        period: ReviewPeriod,

        /// Reference instant (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// User to review, defaults to the fixture's profile owner
        #[arg(long)]
        user: Option<Uuid>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List supported review periods and their lengths
    Periods,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Review {
            input,
            period,
            now,
            user,
            pretty,
        } => {
            debug!(input = %input.display(), %period, "Running review command");
            commands::review::run(&input, period, now, user, pretty).await?;
        }
        Command::Periods => commands::periods::run(),
    }

    Ok(())
}
