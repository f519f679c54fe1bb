//! School workspace.
//!
//! Every institution lives in its own directory under a workspace root. A school
//! directory holds the code set produced by its scraper (`codes.json` by default)
//! and, once the codec has run, the raw and compressed trie artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::workspace::WorkspaceConfig;
use crate::error::workspace::WorkspaceError;
use crate::error::CodecResult;

/// A school's code set as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSet {
    /// File the codes were read from
    pub path: PathBuf,

    /// Codes in file order, duplicates preserved
    pub codes: Vec<String>,

    /// Size of the file in bytes
    pub byte_size: u64,
}

/// Reads a JSON array of strings.
///
/// # Errors
///
/// * `WorkspaceError::MissingInput` - If the file does not exist.
/// * `CodecError::Serialization` - If the file is not a JSON array of strings.
pub fn load_codes(path: &Path) -> CodecResult<CodeSet> {
    if !path.is_file() {
        return Err(WorkspaceError::MissingInput(path.to_path_buf()).into());
    }

    let bytes = fs::read(path)?;
    let codes: Vec<String> = serde_json::from_slice(&bytes)?;
    debug!(path = %path.display(), codes = codes.len(), bytes = bytes.len(), "Loaded code set");

    Ok(CodeSet {
        path: path.to_path_buf(),
        codes,
        byte_size: bytes.len() as u64,
    })
}

/// The directory tree holding one sub-directory per school.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    excluded: Vec<String>,
}

impl Workspace {
    /// Creates a workspace rooted at `root`, ignoring the `excluded` directory names.
    pub fn new<P: Into<PathBuf>>(root: P, excluded: Vec<String>) -> Self {
        Self {
            root: root.into(),
            excluded,
        }
    }

    /// Creates a workspace from configuration.
    pub fn from_config(config: &WorkspaceConfig) -> Self {
        Self::new(config.root.clone(), config.excluded.clone())
    }

    /// Returns the workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists school names in ascending order.
    ///
    /// Hidden directories, excluded names and plain files are skipped.
    pub fn list_schools(&self) -> CodecResult<Vec<String>> {
        let mut schools = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                warn!(path = %entry.path().display(), "Skipping directory with non UTF-8 name");
                continue;
            };
            if self.is_listed(&name) {
                schools.push(name);
            }
        }
        schools.sort();
        Ok(schools)
    }

    /// Creates the directory for a new school. Creating an existing school is a no-op.
    ///
    /// # Errors
    ///
    /// * `WorkspaceError::InvalidSchoolName` - If the name is empty, hidden,
    ///   excluded, or contains a path separator.
    pub fn create_school(&self, name: &str) -> CodecResult<PathBuf> {
        self.check_name(name)?;
        let dir = self.root.join(name);
        fs::create_dir_all(&dir)?;
        info!(school = name, path = %dir.display(), "Created school directory");
        Ok(dir)
    }

    /// Resolves an existing school directory.
    ///
    /// # Errors
    ///
    /// * `WorkspaceError::MissingInput` - If the directory does not exist.
    pub fn school_dir(&self, name: &str) -> CodecResult<PathBuf> {
        self.check_name(name)?;
        let dir = self.root.join(name);
        if !dir.is_dir() {
            return Err(WorkspaceError::MissingInput(dir).into());
        }
        Ok(dir)
    }

    fn is_listed(&self, name: &str) -> bool {
        !name.starts_with('.') && !self.excluded.iter().any(|excluded| excluded == name)
    }

    fn check_name(&self, name: &str) -> CodecResult<()> {
        let valid = !name.trim().is_empty()
            && !name.contains(['/', '\\'])
            && self.is_listed(name);
        if valid {
            Ok(())
        } else {
            Err(WorkspaceError::InvalidSchoolName(name.to_string()).into())
        }
    }
}
