//! Collector error module.
//!
//! This module defines error types raised while gathering codes from a source.

use thiserror::Error;

/// Errors that can occur while collecting codes.
#[derive(Error, Debug)]
pub enum CollectorError {
    /// A source failed to deliver a page.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Every attempt of a retried operation failed.
    #[error("gave up after {attempts} attempt(s): {last_error}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// The failure reported by the last attempt
        last_error: String,
    },
}
