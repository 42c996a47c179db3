//! Bounded command history backed by the substring index.
//!
//! The index itself is append-only; eviction keeps a live window of entry
//! ids and compacts (rebuilds from the live entries) only once the evicted
//! entries outnumber the live ones, so pushes stay amortized O(1).

use crate::search::SubstringIndex;

pub const DEFAULT_MAX_HISTORY: usize = 1000;

/// Ordered list of previously executed command strings, oldest evicted
/// first once the configured bound is reached.
#[derive(Debug)]
pub struct History {
    index: SubstringIndex,
    /// First live entry id; everything before it has been evicted.
    start: usize,
    max_size: usize,
}

impl History {
    pub fn new(max_size: usize) -> Self {
        Self {
            index: SubstringIndex::new(),
            start: 0,
            max_size: max_size.max(1),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.index.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a command line, evicting the oldest entry when full. Blank
    /// lines are not recorded.
    pub fn push(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        self.index.add(trimmed);
        if self.len() > self.max_size {
            self.start += 1;
        }
        if self.start > self.len() {
            self.compact();
        }
    }

    /// Live entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        (self.start..self.index.len())
            .map(|id| self.index.entry(id).to_string())
            .collect()
    }

    /// Live entries containing `query` as a substring, oldest first. An
    /// empty query yields nothing; an empty search buffer means "no search".
    pub fn search(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        self.index
            .search_ids(query)
            .into_iter()
            .filter(|id| *id >= self.start)
            .map(|id| self.index.entry(id).to_string())
            .collect()
    }

    /// Drop everything, including the index.
    pub fn clear(&mut self) {
        self.index = SubstringIndex::new();
        self.start = 0;
    }

    fn compact(&mut self) {
        let live: Vec<String> = self.entries();
        let mut index = SubstringIndex::new();
        for entry in &live {
            index.add(entry);
        }
        self.index = index;
        self.start = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

// ============================================================================
// Tests
// ============================================================================
