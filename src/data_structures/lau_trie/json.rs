//! JSON form of the Lau Trie.
//!
//! A node serializes to an object. The empty key `""` mapped to `true` marks the
//! node terminal; every other key is exactly one character and maps to that
//! child's object. Real child keys can never be empty, so the marker never
//! collides with a character. Entries are written marker first, then children in
//! ascending `char` order.
//!
//! ```text
//! ["CS 101", "CS 102"]  =>  {"C":{"S":{" ":{"1":{"0":{"1":{"":true},"2":{"":true}}}}}}}
//! ```

use std::cell::Cell;

use serde::de::{self, DeserializeSeed, MapAccess, Unexpected, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serialize, Serializer};

use super::node::TrieNode;
use super::{LauTrieError, LauTrieResult};

/// Key that marks a node as terminal.
pub const TERMINAL_KEY: &str = "";

impl Serialize for TrieNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.children.len() + usize::from(self.is_terminal);
        let mut map = serializer.serialize_map(Some(len))?;
        if self.is_terminal {
            map.serialize_entry(TERMINAL_KEY, &true)?;
        }
        for (c, child) in &self.children {
            map.serialize_entry(c, child)?;
        }
        map.end()
    }
}

/// Decodes one node object, tracking how deep it sits below the root.
#[derive(Clone, Copy)]
struct NodeSeed<'a> {
    depth: usize,
    max_depth: usize,
    overflowed: &'a Cell<bool>,
}

impl<'a> NodeSeed<'a> {
    fn child(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }
}

impl<'de, 'a> DeserializeSeed<'de> for NodeSeed<'a> {
    type Value = TrieNode;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<TrieNode, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, 'a> Visitor<'de> for NodeSeed<'a> {
    type Value = TrieNode;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a trie node object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TrieNode, A::Error> {
        if self.depth > self.max_depth {
            self.overflowed.set(true);
            return Err(de::Error::custom(format!(
                "nesting exceeds maximum decode depth of {}",
                self.max_depth
            )));
        }

        let mut node = TrieNode::new();
        while let Some(key) = map.next_key::<String>()? {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (None, _) => {
                    if node.is_terminal {
                        return Err(de::Error::duplicate_field("terminal marker"));
                    }
                    if !map.next_value::<bool>()? {
                        return Err(de::Error::invalid_value(
                            Unexpected::Bool(false),
                            &"the terminal marker `true`",
                        ));
                    }
                    node.is_terminal = true;
                }
                (Some(c), None) => {
                    let child = map.next_value_seed(self.child())?;
                    if node.children.insert(c, child).is_some() {
                        return Err(de::Error::custom(format!("duplicate child key {c:?}")));
                    }
                }
                _ => {
                    return Err(de::Error::invalid_value(
                        Unexpected::Str(&key),
                        &"a single-character child key or the empty terminal marker",
                    ));
                }
            }
        }

        if self.depth > 0 && node.is_vacant() {
            return Err(de::Error::custom(
                "non-root node is neither terminal nor has children",
            ));
        }
        Ok(node)
    }
}

/// Decodes a root node from any serde deserializer.
pub(super) fn decode_root<'de, D>(deserializer: D, max_depth: usize) -> LauTrieResult<TrieNode>
where
    D: Deserializer<'de>,
{
    let overflowed = Cell::new(false);
    let seed = NodeSeed {
        depth: 0,
        max_depth,
        overflowed: &overflowed,
    };
    match seed.deserialize(deserializer) {
        Ok(root) => Ok(root),
        Err(_) if overflowed.get() => Err(LauTrieError::DepthExceeded { max_depth }),
        Err(e) => Err(LauTrieError::Malformed(e.to_string())),
    }
}

/// Decodes a root node from JSON bytes, rejecting trailing content.
pub(super) fn decode_slice(bytes: &[u8], max_depth: usize) -> LauTrieResult<TrieNode> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    // Nesting is bounded by `max_depth` in the seed instead of serde_json's fixed limit.
    deserializer.disable_recursion_limit();
    let root = decode_root(&mut deserializer, max_depth)?;
    deserializer.end()?;
    Ok(root)
}
