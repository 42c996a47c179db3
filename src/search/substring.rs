//! Substring index for reverse history search.
//!
//! A suffix trie over every indexed string: inserting a string adds each of
//! its suffixes, so a containment query is a single walk from the root.
//! Insertion is incremental per string; the structure is never rebuilt over
//! the full set on `add`. Duplicates are retained as separate entries.

use std::collections::HashMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Ids of entries containing the path to this node as a substring, in
    /// ascending (insertion) order, deduplicated.
    entries: Vec<usize>,
}

impl TrieNode {
    fn mark(&mut self, id: usize) {
        if self.entries.last() != Some(&id) {
            self.entries.push(id);
        }
    }
}

/// An incrementally-built index answering "which entries contain this
/// substring". Entry ids are assigned in insertion order and never change.
#[derive(Debug, Default)]
pub struct SubstringIndex {
    root: TrieNode,
    entries: Vec<String>,
}

impl SubstringIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries ever added.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry with the given id.
    pub fn entry(&self, id: usize) -> &str {
        &self.entries[id]
    }

    /// Insert a string and return its id. Repeated insertion of the same
    /// string yields distinct ids.
    pub fn add(&mut self, s: &str) -> usize {
        let id = self.entries.len();
        self.entries.push(s.to_string());
        let chars: Vec<char> = s.chars().collect();
        self.root.mark(id);
        for start in 0..chars.len() {
            let mut node = &mut self.root;
            for &ch in &chars[start..] {
                node = node.children.entry(ch).or_default();
                node.mark(id);
            }
        }
        id
    }

    /// Ids of entries containing `query` as a contiguous run, in insertion
    /// order. The empty query matches every entry.
    pub fn search_ids(&self, query: &str) -> Vec<usize> {
        let mut node = &self.root;
        for ch in query.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }
        node.entries.clone()
    }

    /// Entries containing `query` as a contiguous run, in insertion order.
    pub fn search(&self, query: &str) -> Vec<&str> {
        self.search_ids(query)
            .into_iter()
            .map(|id| self.entries[id].as_str())
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
