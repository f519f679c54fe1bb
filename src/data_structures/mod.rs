//! Data structures for codetrie.
//!
//! This module contains the in-memory structures the codec is built on.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Single ownership, no shared mutable state
//! - Deterministic iteration order wherever output is persisted

pub mod lau_trie;

// Re-export common data structures
pub use lau_trie::{LauTrie, LauTrieConfig, LauTrieError, LauTrieResult};
