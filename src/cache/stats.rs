//! Cache Activity Module
//!
//! Records what lookups and writes did to the product cache, so the
//! storefront can tell whether the cache is actually saving product fetches
//! or just churning at its capacity.

use serde::Serialize;

// == Write Outcome ==
/// Effect of a single `set` on the resident set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// New key, room to spare
    Inserted,
    /// Key was already resident; its value was replaced in place
    Overwritten,
    /// New key into a full cache; `evicted` made room for it
    Displaced { evicted: String },
}

impl WriteOutcome {
    pub fn evicted(&self) -> Option<&str> {
        match self {
            WriteOutcome::Displaced { evicted } => Some(evicted),
            _ => None,
        }
    }
}

// == Cache Stats ==
/// Activity counters for one cache instance, plus its current fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups served from the cache (fetches avoided)
    pub hits: u64,
    /// Lookups that fell through to the product source
    pub misses: u64,
    /// Writes that added a new product
    pub inserts: u64,
    /// Writes that refreshed an already cached product
    pub overwrites: u64,
    /// Products pushed out to make room
    pub evictions: u64,
    /// Products currently resident
    pub total_entries: usize,
    /// Configured capacity
    pub capacity: usize,
}

impl CacheStats {
    pub(crate) fn for_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub(crate) fn observe_lookup(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub(crate) fn observe_write(&mut self, outcome: &WriteOutcome) {
        match outcome {
            WriteOutcome::Overwritten => self.overwrites += 1,
            WriteOutcome::Inserted => self.inserts += 1,
            WriteOutcome::Displaced { .. } => {
                self.inserts += 1;
                self.evictions += 1;
            }
        }
    }

    /// Share of lookups served from the cache; None before the first lookup.
    pub fn hit_rate(&self) -> Option<f64> {
        let lookups = self.hits + self.misses;
        (lookups > 0).then(|| self.hits as f64 / lookups as f64)
    }

    /// Resident entries as a fraction of capacity.
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.total_entries as f64 / self.capacity as f64
    }

    /// How many times over the cache has been fully replaced by evictions.
    ///
    /// Values well above 1 mean the working set outgrows `capacity`.
    pub fn turnover(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.evictions as f64 / self.capacity as f64
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn displaced(key: &str) -> WriteOutcome {
        WriteOutcome::Displaced {
            evicted: key.to_string(),
        }
    }

    #[test]
    fn test_fresh_stats_have_no_hit_rate() {
        let stats = CacheStats::for_capacity(50);
        assert_eq!(stats.capacity, 50);
        assert_eq!(stats.hit_rate(), None);
        assert_eq!(stats.fill_ratio(), 0.0);
        assert_eq!(stats.turnover(), 0.0);
    }

    #[test]
    fn test_lookups_split_hits_and_misses() {
        let mut stats = CacheStats::for_capacity(4);
        stats.observe_lookup(true);
        stats.observe_lookup(true);
        stats.observe_lookup(true);
        stats.observe_lookup(false);

        assert_eq!((stats.hits, stats.misses), (3, 1));
        assert_eq!(stats.hit_rate(), Some(0.75));
    }

    #[test]
    fn test_displacement_counts_as_insert_and_eviction() {
        let mut stats = CacheStats::for_capacity(2);
        stats.observe_write(&WriteOutcome::Inserted);
        stats.observe_write(&WriteOutcome::Overwritten);
        stats.observe_write(&displaced("ring-1"));
        stats.observe_write(&displaced("ring-2"));
        stats.observe_write(&displaced("ring-3"));

        assert_eq!(stats.inserts, 4);
        assert_eq!(stats.overwrites, 1);
        assert_eq!(stats.evictions, 3);
        assert_eq!(stats.turnover(), 1.5);
    }

    #[test]
    fn test_fill_ratio() {
        let stats = CacheStats {
            total_entries: 10,
            ..CacheStats::for_capacity(40)
        };
        assert_eq!(stats.fill_ratio(), 0.25);
    }

    #[test]
    fn test_outcome_evicted_key() {
        assert_eq!(displaced("a").evicted(), Some("a"));
        assert_eq!(WriteOutcome::Inserted.evicted(), None);
        assert_eq!(WriteOutcome::Overwritten.evicted(), None);
    }
}
