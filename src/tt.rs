//! Transposition table for caching search results.
//!
//! Maps Zobrist cache keys to the deepest score seen for that position.
//! One entry per key; a store at greater-or-equal depth overwrites, a
//! shallower store is ignored.

use std::collections::HashMap;

/// A cached search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub depth: u32,
    pub score: i32,
}

/// Transposition table owned by a single search.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    /// Look up an entry by cache key.
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<TtEntry> {
        self.entries.get(&key).copied()
    }

    /// Store a result, keeping whichever entry was searched deeper.
    pub fn store(&mut self, key: u64, depth: u32, score: i32) {
        match self.entries.get_mut(&key) {
            Some(entry) if entry.depth > depth => {}
            Some(entry) => {
                entry.depth = depth;
                entry.score = score;
            }
            None => {
                self.entries.insert(key, TtEntry { depth, score });
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
