// ABOUTME: Core types and constants for the adaptive goal review engine
// ABOUTME: Foundation crate with error handling, nutrition models, and review constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Goal Review Core
//!
//! Foundation crate providing shared types and constants for the adaptive
//! goal review engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ReviewError`
//! - **constants**: Review thresholds, period lengths, and adjustment factors
//! - **models**: Nutrition goals, food log entries, weight entries, and review records

/// Unified error handling system with standard error codes
pub mod errors;

/// Review constants organized by domain
pub mod constants;

/// Core data models (goals, log entries, reviews, recommendations)
pub mod models;
