//! Workspace error module.
//!
//! This module defines error types raised while locating schools and their
//! code sets on disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving school inputs.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// The requested school directory or code set file does not exist.
    #[error("Missing input: {0} does not exist")]
    MissingInput(PathBuf),

    /// The school name cannot be used as a directory name.
    #[error("Invalid school name: {0:?}")]
    InvalidSchoolName(String),
}
