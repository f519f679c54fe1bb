//! Collector configuration module.
//!
//! Settings for the accumulator that scrapers feed: how often it checkpoints
//! and how fetches are retried.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Collector configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Write a checkpoint after this many merged batches
    pub checkpoint_every: usize,

    /// Attempts per fetch before giving up
    pub retry_attempts: u32,

    /// Pause between attempts in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            checkpoint_every: 10,
            retry_attempts: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl CollectorConfig {
    /// Pause between attempts.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Validate for CollectorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.checkpoint_every == 0 {
            return Err(ConfigError::ValidationError(
                "collector.checkpoint_every must be greater than 0".to_string(),
            ));
        }

        if self.retry_attempts == 0 {
            return Err(ConfigError::ValidationError(
                "collector.retry_attempts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
