//! Error types for Lau Trie.
//!
//! This module defines the error types that can occur while encoding or decoding a
//! serialized Lau Trie. Building and querying a trie never fails.

/// Errors that can occur in Lau Trie operations.
#[derive(Debug, thiserror::Error)]
pub enum LauTrieError {
    /// The serialized form does not match the nested node-object shape.
    #[error("Malformed trie: {0}")]
    Malformed(String),

    /// The serialized form nests deeper than the decoder allows.
    #[error("Trie nesting exceeds maximum decode depth of {max_depth}")]
    DepthExceeded {
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// A code is longer than the deepest nesting the decoder accepts, so its
    /// serialized form could never be read back.
    #[error("Code of {length} characters exceeds the maximum trie depth of {max_depth}")]
    CodeTooLong {
        /// Length of the longest code in characters.
        length: usize,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}

impl From<serde_json::Error> for LauTrieError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
