//! Ordered prefix tree over alias characters.
//!
//! Keys are walked as Unicode scalar values (`char`), never bytes, so a
//! multi-byte character such as `灵` is a single edge. Children are kept in a
//! `BTreeMap` so iteration order (and therefore any report built from it) is
//! stable across runs.
//!
//! A trie is filled once while a dictionary is built and only read afterwards.

use std::collections::BTreeMap;

use crate::TagAction;

#[derive(Debug, Clone, Default)]
struct Node {
    children: BTreeMap<char, Node>,
    action: Option<TagAction>,
}

/// Prefix tree mapping alias strings to the [`TagAction`] they trigger.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `action` under `key` if the key has no action yet.
    ///
    /// Returns `false`, leaving the existing action in place, when `key` is
    /// already registered.
    pub fn insert(&mut self, key: &str, action: TagAction) -> bool {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.action.is_some() {
            return false;
        }
        node.action = Some(action);
        self.len += 1;
        true
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&TagAction> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        node.action.as_ref()
    }

    /// Exact-key lookup over an already decoded key.
    pub fn get_chars(&self, key: &[char]) -> Option<&TagAction> {
        let mut node = &self.root;
        for c in key {
            node = node.children.get(c)?;
        }
        node.action.as_ref()
    }

    /// Longest registered key that is a prefix of `chars` and at most `limit`
    /// characters long. Returns its length and action.
    ///
    /// This yields the same answer as trying `get_chars(&chars[..n])` for
    /// `n = min(limit, chars.len())` down to `1` and keeping the first hit, in
    /// a single walk.
    pub fn longest_match(&self, chars: &[char], limit: usize) -> Option<(usize, &TagAction)> {
        let mut node = &self.root;
        let mut best = None;
        for (idx, c) in chars.iter().take(limit).enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(action) = node.action.as_ref() {
                best = Some((idx + 1, action));
            }
        }
        best
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All registered keys with their actions, in lexicographic char order.
    pub fn iter(&self) -> Vec<(String, &TagAction)> {
        let mut out = Vec::with_capacity(self.len);
        let mut prefix = String::new();
        collect(&self.root, &mut prefix, &mut out);
        out
    }
}

fn collect<'a>(node: &'a Node, prefix: &mut String, out: &mut Vec<(String, &'a TagAction)>) {
    if let Some(action) = node.action.as_ref() {
        out.push((prefix.clone(), action));
    }
    for (c, child) in &node.children {
        prefix.push(*c);
        collect(child, prefix, out);
        prefix.pop();
    }
}
