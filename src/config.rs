// ABOUTME: Service-level configuration for fetching review inputs from collaborators
// ABOUTME: Environment-driven fetch timeout with validation and a lazily loaded global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service configuration
//!
//! Engine thresholds live in [`goal_review_intelligence::config`]; this module
//! only covers what the async service adds around the engine.

use goal_review_core::constants::collaborators::{
    DEFAULT_FETCH_TIMEOUT_SECS, MAX_FETCH_TIMEOUT_SECS,
};
use goal_review_intelligence::ConfigError;
use std::env::{self, VarError};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

/// Environment variable holding the fetch timeout in seconds
pub const FETCH_TIMEOUT_ENV: &str = "GOAL_REVIEW_FETCH_TIMEOUT_SECS";

static SERVICE_CONFIG: OnceLock<ServiceConfig> = OnceLock::new();

/// Settings for the review service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Upper bound on fetching the profile and both logs
    pub fetch_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Get the global configuration, loading it on first use
    pub fn global() -> &'static Self {
        SERVICE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load service config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout variable is not valid unicode, is not a
    /// whole number of seconds, or is out of range
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        match env::var(FETCH_TIMEOUT_ENV) {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {FETCH_TIMEOUT_ENV}")))?;
                config.fetch_timeout = Duration::from_secs(secs);
            }
            Err(VarError::NotPresent) => {}
            Err(e) => return Err(e.into()),
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the timeout is zero or above the maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        let secs = self.fetch_timeout.as_secs();
        if self.fetch_timeout.is_zero() || secs > MAX_FETCH_TIMEOUT_SECS {
            return Err(ConfigError::ValueOutOfRange(
                "fetch timeout must be positive and at most 300 seconds",
            ));
        }
        Ok(())
    }

    /// Override the fetch timeout
    #[must_use]
    pub const fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }
}
