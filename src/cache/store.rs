//! Product Cache Module
//!
//! Main cache engine combining HashMap storage with recency tracking.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, RecencyOrder, WriteOutcome, DEFAULT_CAPACITY};

// == Product Cache ==
/// Fixed-capacity key/value store with least-recently-used eviction.
///
/// Keys are canonical product ids; values are opaque. Lookups hand out
/// shared borrows, never copies, so callers treat them as snapshots.
#[derive(Debug)]
pub struct ProductCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Recency order, LRU at the head
    recency: RecencyOrder,
    /// Lookup and write activity
    stats: CacheStats,
    /// Maximum number of resident entries
    capacity: usize,
}

impl<V> ProductCache<V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            recency: RecencyOrder::new(),
            stats: CacheStats::for_capacity(capacity),
            capacity,
        }
    }

    // == Set ==
    /// Inserts or overwrites `key` and marks it most recently used.
    ///
    /// Inserting a new key into a full cache evicts exactly one entry, the
    /// least recently used, before the insert. Overwrites never evict.
    /// Callers that only need the side effect can ignore the outcome.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> WriteOutcome {
        let key = key.into();

        let outcome = if self.entries.contains_key(&key) {
            WriteOutcome::Overwritten
        } else if self.entries.len() >= self.capacity {
            match self.recency.evict_oldest() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    debug!(key = %evicted, "evicted least recently used product");
                    WriteOutcome::Displaced { evicted }
                }
                None => WriteOutcome::Inserted,
            }
        } else {
            WriteOutcome::Inserted
        };

        self.recency.touch(&key);
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.observe_write(&outcome);
        outcome
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// `None` is the ordinary miss signal.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.get_entry(key).map(|entry| &entry.value)
    }

    // == Get Entry ==
    /// Like [`get`](Self::get) but exposes the entry metadata as well.
    pub fn get_entry(&mut self, key: &str) -> Option<&CacheEntry<V>> {
        let hit = self.entries.contains_key(key);
        self.stats.observe_lookup(hit);
        if hit {
            self.recency.touch(key);
        }
        self.entries.get(key)
    }

    // == Has ==
    /// Membership check. Does not affect recency or statistics.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Clear ==
    /// Removes every entry and resets the recency order.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    // == Size ==
    /// Number of resident entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Keys By Recency ==
    /// Resident keys from least to most recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.recency.iter().cloned().collect()
    }

    // == Stats ==
    /// Activity counters with the current resident count filled in.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            ..self.stats
        }
    }
}

impl<V> Default for ProductCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
