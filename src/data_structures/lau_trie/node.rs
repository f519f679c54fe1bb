//! Node implementation for the Lau Trie.
//!
//! This module provides the TrieNode structure used in the Lau Trie implementation.
//! Every node is owned by exactly one parent, so the whole tree is released by
//! dropping the root. Dropping, like the counting helpers, walks an explicit
//! stack, so a single very long code cannot exhaust the call stack.

use std::collections::BTreeMap;

/// A node in the Lau Trie.
///
/// Each node represents the prefix spelled by the path from the root. Terminal
/// nodes mark the end of an inserted code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Map of characters to child nodes, iterated in ascending `char` order
    pub children: BTreeMap<char, TrieNode>,

    /// Whether some inserted code ends exactly at this node
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_terminal: false,
        }
    }

    /// Returns `true` if the node carries neither a terminal mark nor children.
    pub fn is_vacant(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Counts this node and every node below it.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }

    /// Counts the terminal nodes in this subtree.
    pub fn terminal_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_terminal {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }

    /// Length in characters of the longest path below this node.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }
        height
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
