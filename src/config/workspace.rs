//! Workspace configuration module.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where school directories live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Directory holding one sub-directory per school
    pub root: PathBuf,

    /// Sub-directory names that are never treated as schools
    pub excluded: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            excluded: vec!["env".to_string(), "target".to_string()],
        }
    }
}

impl Validate for WorkspaceConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "workspace.root cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
