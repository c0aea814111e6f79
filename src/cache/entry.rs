//! Cache Entry Module
//!
//! Wraps a cached value with the instant it was last written.

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// A single resident value plus write metadata.
///
/// The value is opaque to the cache and never inspected.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was last written
    pub cached_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            cached_at: Utc::now(),
        }
    }

    // == Age ==
    /// Milliseconds since the entry was written.
    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.cached_at).num_milliseconds().max(0)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_keeps_value() {
        let entry = CacheEntry::new(vec![1, 2, 3]);
        assert_eq!(entry.value, vec![1, 2, 3]);
    }

    #[test]
    fn test_entry_timestamp_is_recent() {
        let before = Utc::now();
        let entry = CacheEntry::new("ring");
        let after = Utc::now();

        assert!(entry.cached_at >= before);
        assert!(entry.cached_at <= after);
        assert!(entry.age_ms() >= 0);
    }
}
