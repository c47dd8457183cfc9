// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command modules for the goal-review CLI
// ABOUTME: Review execution and period listing

pub mod periods;
pub mod review;
