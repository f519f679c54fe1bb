//! Lau Trie Implementation
//!
//! This module provides the prefix tree behind the code codec. Codes that share a
//! prefix share the nodes spelling it, which is what makes institutional course
//! code sets (many codes per department prefix) collapse so well.
//!
//! The trie has no build/finalized phase of its own: inserting after
//! serializing is legal and simply makes earlier artifacts stale.
//!
//! # Example
//!
//! ```
//! use codetrie_lib::data_structures::lau_trie::LauTrie;
//!
//! let trie: LauTrie = ["CS 101", "CS 102"].into_iter().collect();
//! let json = trie.to_json_string().unwrap();
//!
//! let decoded = LauTrie::from_json_slice(json.as_bytes()).unwrap();
//! assert_eq!(decoded.codes().collect::<Vec<_>>(), vec!["CS 101", "CS 102"]);
//! ```

mod error;
mod iter;
mod json;
mod node;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use error::LauTrieError;
pub use iter::Codes;
pub use json::TERMINAL_KEY;
pub use node::TrieNode;

/// Result type for Lau Trie operations
pub type LauTrieResult<T> = Result<T, LauTrieError>;

/// Default bound on how deeply a serialized trie may nest when decoded.
pub const DEFAULT_MAX_DECODE_DEPTH: usize = 1024;

/// Configuration options for the Lau Trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauTrieConfig {
    /// Maximum nesting accepted when decoding (the longest decodable code)
    pub max_decode_depth: usize,
}

impl Default for LauTrieConfig {
    fn default() -> Self {
        Self {
            max_decode_depth: DEFAULT_MAX_DECODE_DEPTH,
        }
    }
}

/// Lau Trie is a prefix tree over `char` sequences with a deterministic,
/// lossless JSON form.
///
/// Key features:
/// * Any Unicode string is a valid code, including the empty string
/// * Insertion is idempotent; the tree depends only on the set of codes
/// * Children are kept in ascending `char` order, so serialization and
///   enumeration are reproducible byte for byte
/// * Single-owner nodes with no back-references
#[derive(Debug, Clone, Default)]
pub struct LauTrie {
    /// The root node of the trie (the empty prefix)
    root: TrieNode,

    /// Configuration options
    config: LauTrieConfig,
}

impl LauTrie {
    /// Creates a new empty `LauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LauTrieConfig::default())
    }

    /// Creates a new empty `LauTrie` with the specified configuration.
    pub fn with_config(config: LauTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &LauTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a code into the trie.
    ///
    /// # Arguments
    ///
    /// * `code` - The code to insert. The empty string marks the root terminal.
    ///
    /// # Returns
    ///
    /// `true` if the code was not present before, `false` otherwise.
    pub fn insert<K>(&mut self, code: K) -> bool
    where
        K: AsRef<str>,
    {
        let mut node = &mut self.root;
        for c in code.as_ref().chars() {
            node = node.children.entry(c).or_default();
        }
        let is_new = !node.is_terminal;
        node.is_terminal = true;
        is_new
    }

    /// Inserts every code from `codes`.
    ///
    /// Duplicates collapse, so the resulting tree depends only on the set of
    /// distinct codes, never on their order or multiplicity.
    ///
    /// # Returns
    ///
    /// The number of codes that were newly added.
    pub fn build<I, K>(&mut self, codes: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        codes
            .into_iter()
            .filter(|code| self.insert(code))
            .count()
    }

    /// Checks if a code exists in the trie.
    pub fn contains<K>(&self, code: K) -> bool
    where
        K: AsRef<str>,
    {
        self.find_node(code.as_ref())
            .is_some_and(|node| node.is_terminal)
    }

    /// Finds all codes starting with `prefix`, in ascending order.
    ///
    /// An empty prefix returns every code.
    pub fn find_by_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        match self.find_node(prefix) {
            Some(node) => Codes::new(node, prefix.to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// Returns a lazy iterator over every code in ascending `char` order.
    ///
    /// Each call starts a fresh traversal, so the sequence can be restarted at
    /// will for an unchanged trie.
    pub fn codes(&self) -> Codes<'_> {
        Codes::new(&self.root, String::new())
    }

    /// Returns the number of distinct codes in the trie.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.terminal_count()
    }

    /// Checks if the trie holds no codes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_vacant()
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Clears all codes from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }

    /// Length in characters of the longest code in the trie.
    pub fn longest_code_len(&self) -> usize {
        self.root.height()
    }

    /// Checks every code is short enough to be decoded again under this trie's
    /// configuration.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::CodeTooLong` - If the longest code exceeds `max_decode_depth`.
    pub fn check_depth(&self) -> LauTrieResult<()> {
        let length = self.longest_code_len();
        let max_depth = self.config.max_decode_depth;
        if length > max_depth {
            return Err(LauTrieError::CodeTooLong { length, max_depth });
        }
        Ok(())
    }

    /// Serializes the trie to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::CodeTooLong` - If the result could not be decoded again.
    pub fn to_json_vec(&self) -> LauTrieResult<Vec<u8>> {
        self.check_depth()?;
        Ok(serde_json::to_vec(&self.root)?)
    }

    /// Serializes the trie to a compact JSON string.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::CodeTooLong` - If the result could not be decoded again.
    pub fn to_json_string(&self) -> LauTrieResult<String> {
        self.check_depth()?;
        Ok(serde_json::to_string(&self.root)?)
    }

    /// Converts the trie to its nested mapping as a JSON value.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::CodeTooLong` - If the result could not be decoded again.
    pub fn to_value(&self) -> LauTrieResult<serde_json::Value> {
        self.check_depth()?;
        Ok(serde_json::to_value(&self.root)?)
    }

    /// Decodes a trie from JSON bytes using the default configuration.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::Malformed` - If the bytes are not a well-formed trie object.
    /// * `LauTrieError::DepthExceeded` - If the nesting is deeper than allowed.
    pub fn from_json_slice(bytes: &[u8]) -> LauTrieResult<Self> {
        Self::from_json_slice_with_config(bytes, LauTrieConfig::default())
    }

    /// Decodes a trie from JSON bytes with the specified configuration.
    pub fn from_json_slice_with_config(bytes: &[u8], config: LauTrieConfig) -> LauTrieResult<Self> {
        let root = json::decode_slice(bytes, config.max_decode_depth)?;
        Ok(Self { root, config })
    }

    /// Decodes a trie from an already parsed JSON value.
    pub fn from_value(value: &serde_json::Value) -> LauTrieResult<Self> {
        let config = LauTrieConfig::default();
        let root = json::decode_root(value, config.max_decode_depth)?;
        Ok(Self { root, config })
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

impl PartialEq for LauTrie {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for LauTrie {}

impl<K: AsRef<str>> FromIterator<K> for LauTrie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.build(iter);
        trie
    }
}

impl<K: AsRef<str>> Extend<K> for LauTrie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.build(iter);
    }
}

impl<'a> IntoIterator for &'a LauTrie {
    type Item = String;
    type IntoIter = Codes<'a>;

    fn into_iter(self) -> Codes<'a> {
        self.codes()
    }
}

/// Serializes the nested mapping, refusing tries whose longest code exceeds
/// `max_decode_depth`. Each character nests one level.
impl Serialize for LauTrie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.check_depth().map_err(serde::ser::Error::custom)?;
        self.root.serialize(serializer)
    }
}

/// Decodes with the default configuration.
///
/// The deserializer's own recursion limit applies before `max_decode_depth`:
/// `serde_json::from_str` and `from_slice` stop at 128 levels, which rejects
/// codes longer than 127 characters. Use [`LauTrie::from_json_slice`] to decode
/// artifacts, which lifts that limit and enforces `max_decode_depth` instead.
impl<'de> Deserialize<'de> for LauTrie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let config = LauTrieConfig::default();
        let root = json::decode_root(deserializer, config.max_decode_depth)
            .map_err(serde::de::Error::custom)?;
        Ok(Self { root, config })
    }
}
