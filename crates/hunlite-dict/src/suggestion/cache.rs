//! Memoized suggestion results.
//!
//! Entries are keyed by the word exactly as it was passed to `suggest` and
//! remember the limit they were computed with. An entry answers a later
//! request when that request asks for no more than the entry's limit, or
//! when the entry already holds every candidate there was. The cache only
//! grows; [`SuggestionCache::clear`] empties it.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

#[derive(Clone, Debug)]
struct CacheEntry {
    suggestions: Vec<String>,
    limit: usize,
}

impl CacheEntry {
    fn answers(&self, limit: usize) -> bool {
        limit <= self.limit || self.suggestions.len() < self.limit
    }
}

/// Concurrent per-word suggestion memo.
#[derive(Debug, Default)]
pub struct SuggestionCache {
    entries: DashMap<String, CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached suggestions for `word`, truncated to `limit`, if the entry
    /// can answer a request of that size.
    pub fn get(&self, word: &str, limit: usize) -> Option<Vec<String>> {
        if let Some(entry) = self.entries.get(word) {
            if entry.answers(limit) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.suggestions.iter().take(limit).cloned().collect());
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Record the suggestions computed for `word` under `limit`.
    pub fn insert(&self, word: &str, suggestions: Vec<String>, limit: usize) {
        self.entries
            .insert(word.to_string(), CacheEntry { suggestions, limit });
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
