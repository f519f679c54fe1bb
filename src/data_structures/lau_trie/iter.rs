//! Lazy enumeration of the codes stored in a Lau Trie.

use std::collections::btree_map;
use std::iter::FusedIterator;

use super::node::TrieNode;

/// Depth-first iterator over every terminal path below a node.
///
/// Codes come out in ascending lexicographic `char` order: a node's own code is
/// yielded before any code below it, and siblings are visited in key order.
/// The traversal keeps one child iterator per level plus a single shared prefix
/// buffer, so it allocates only for the strings it yields.
#[derive(Debug, Clone)]
pub struct Codes<'a> {
    start: Option<&'a TrieNode>,
    stack: Vec<btree_map::Iter<'a, char, TrieNode>>,
    prefix: String,
}

impl<'a> Codes<'a> {
    pub(super) fn new(node: &'a TrieNode, prefix: String) -> Self {
        Self {
            start: Some(node),
            stack: Vec::new(),
            prefix,
        }
    }
}

impl<'a> Iterator for Codes<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(start) = self.start.take() {
            self.stack.push(start.children.iter());
            if start.is_terminal {
                return Some(self.prefix.clone());
            }
        }

        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some((c, child)) => {
                    self.prefix.push(*c);
                    self.stack.push(child.children.iter());
                    if child.is_terminal {
                        return Some(self.prefix.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The starting level has no character of its own to drop.
                    if !self.stack.is_empty() {
                        self.prefix.pop();
                    }
                }
            }
        }
    }
}

impl FusedIterator for Codes<'_> {}
