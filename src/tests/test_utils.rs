//! Test utilities and fixtures for codetrie.
//!
//! This module provides reusable fixtures and proptest strategies shared by
//! the crate-internal test suites.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum code length for generated test data.
const MAX_CODE_LENGTH: usize = 24;

/// Maximum code set size for generated test data.
const MAX_SET_SIZE: usize = 64;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Strategy for single codes over an arbitrary alphabet, empty string included.
pub fn code_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        // Course-code shaped: department, space, number
        "[A-Z]{2,4} [0-9]{3}[A-Z]?",
        // Anything at all
        proptest::collection::vec(proptest::char::any(), 0..MAX_CODE_LENGTH)
            .prop_map(|chars| chars.into_iter().collect::<String>()),
    ]
    .boxed()
}

/// Strategy for code sets, duplicates allowed.
pub fn code_set_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(code_strategy(), 0..MAX_SET_SIZE).boxed()
}

/// Test fixture holding a temporary workspace root.
///
/// Environment variables set through the fixture are removed when it drops.
pub struct TestFixture {
    /// Temporary directory acting as the workspace root
    pub temp_dir: TempDir,
    /// Environment variables to clean up after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file relative to the fixture root, creating parent directories.
    pub fn write_file<C: AsRef<[u8]>>(&self, relative: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
