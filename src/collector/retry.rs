//! Bounded retry for fallible fetches.

use std::fmt::Display;
use std::time::Duration;

use tracing::warn;

use crate::config::collector::CollectorConfig;
use crate::error::collector::CollectorError;
use crate::error::CodecResult;

/// How many times to try an operation and how long to pause in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, at least one
    attempts: u32,

    /// Pause after each failed attempt except the last
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy; `attempts` is clamped to at least one.
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    /// Creates a policy from collector configuration.
    pub fn from_config(config: &CollectorConfig) -> Self {
        Self::new(config.retry_attempts, config.retry_delay())
    }

    /// Total attempts made before giving up.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Pause between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&CollectorConfig::default())
    }
}

/// Runs `op` until it succeeds or the policy's attempts are used up.
///
/// `op` receives the 1-based attempt number.
///
/// # Errors
///
/// * `CollectorError::RetriesExhausted` - Carrying the last failure message.
pub fn retry<T, E, F>(policy: &RetryPolicy, mut op: F) -> CodecResult<T>
where
    E: Display,
    F: FnMut(u32) -> Result<T, E>,
{
    let mut last_error = String::new();
    for attempt in 1..=policy.attempts {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!(attempt, attempts = policy.attempts, error = %e, "Attempt failed");
                last_error = e.to_string();
                if attempt < policy.attempts && !policy.delay.is_zero() {
                    std::thread::sleep(policy.delay);
                }
            }
        }
    }

    Err(CollectorError::RetriesExhausted {
        attempts: policy.attempts,
        last_error,
    }
    .into())
}
