//! Verification error module.
//!
//! This module defines the fatal outcomes of a codec run's correctness gates.
//! None of these may be downgraded to a warning.

use std::path::PathBuf;
use thiserror::Error;

use crate::codec::SizeReport;

/// Number of offending codes quoted in a round-trip error message.
const SAMPLE_LEN: usize = 5;

/// Errors raised when a codec run fails one of its gates.
#[derive(Error, Debug)]
pub enum VerificationError {
    /// Decoding the artifact did not reproduce the original code set.
    #[error(
        "round trip lost {} code(s) {:?} and invented {} code(s) {:?}",
        .missing.len(),
        sample(.missing),
        .extraneous.len(),
        sample(.extraneous)
    )]
    RoundTrip {
        /// Codes in the input that the artifact does not reproduce
        missing: Vec<String>,
        /// Codes the artifact reproduces that were never in the input
        extraneous: Vec<String>,
    },

    /// The compressed artifact is not smaller than the original input.
    #[error(
        "compressed artifact is {} bytes, not smaller than the {} byte input",
        .report.compressed_size,
        .report.original_size
    )]
    CompressionGate {
        /// The sizes that failed the gate
        report: SizeReport,
    },

    /// The compressed artifact does not decompress to the raw artifact.
    #[error("compressed artifact {0} does not match the raw artifact")]
    ArtifactMismatch(PathBuf),
}

fn sample(codes: &[String]) -> &[String] {
    &codes[..codes.len().min(SAMPLE_LEN)]
}
