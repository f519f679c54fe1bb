//! Test modules for codetrie.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error display and reporting
//! - Code collection against mocked sources
//! - Property-based laws of the trie codec
//! - Shared fixtures and strategies

pub mod error_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{code_set_strategy, code_strategy, create_test_dir, TestFixture};
