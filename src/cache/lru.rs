//! Recency Order Module
//!
//! Tracks the total recency order of resident cache keys.

use std::collections::VecDeque;

// == Recency Order ==
/// Ordered sequence of keys by last access.
///
/// - Front (head) = least recently used, next eviction victim
/// - Back (tail) = most recently used
///
/// Touch is a linear scan-and-splice, fine at storefront capacities. A
/// linked list plus index map would be needed for O(1) touch at large sizes.
#[derive(Debug, Default)]
pub struct RecencyOrder {
    order: VecDeque<String>,
}

impl RecencyOrder {
    // == Constructor ==
    /// Creates a new empty recency order.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used (moves it to the tail).
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the order.
    pub fn remove(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if the order is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Iterate ==
    /// Keys from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recency_new() {
        let order = RecencyOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_touch_new_keys_oldest_first() {
        let mut order = RecencyOrder::new();

        order.touch("ring");
        order.touch("necklace");
        order.touch("bracelet");

        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_oldest(), Some(&"ring".to_string()));
    }

    #[test]
    fn test_touch_existing_key_moves_to_tail() {
        let mut order = RecencyOrder::new();

        order.touch("ring");
        order.touch("necklace");
        order.touch("bracelet");
        order.touch("ring");

        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_oldest(), Some(&"necklace".to_string()));
        let keys: Vec<&String> = order.iter().collect();
        assert_eq!(keys, vec!["necklace", "bracelet", "ring"]);
    }

    #[test]
    fn test_evict_in_recency_order() {
        let mut order = RecencyOrder::new();

        order.touch("a");
        order.touch("b");
        order.touch("c");
        order.touch("a");
        order.touch("c");
        order.touch("b");

        // a, c, b touched last in that order
        assert_eq!(order.evict_oldest(), Some("a".to_string()));
        assert_eq!(order.evict_oldest(), Some("c".to_string()));
        assert_eq!(order.evict_oldest(), Some("b".to_string()));
        assert_eq!(order.evict_oldest(), None);
    }

    #[test]
    fn test_remove_and_remove_missing() {
        let mut order = RecencyOrder::new();

        order.touch("key1");
        order.touch("key2");
        order.remove("key1");
        order.remove("nonexistent");

        assert_eq!(order.len(), 1);
        assert!(!order.contains("key1"));
        assert!(order.contains("key2"));
    }

    #[test]
    fn test_touch_same_key_is_single_entry() {
        let mut order = RecencyOrder::new();

        order.touch("key1");
        order.touch("key1");
        order.touch("key1");

        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut order = RecencyOrder::new();
        order.touch("a");
        order.touch("b");
        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.peek_oldest(), None);
    }
}
