//! Bounded least-recently-used cache.
//!
//! A small map plus an explicit recency queue. Tensor counts are tiny (the
//! default capacity is 16), so the O(n) queue scan on touch is cheaper in
//! practice than a linked-list scheme and far simpler to audit.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// LRU cache with a fixed entry capacity.
///
/// Reads count as use: `get` refreshes the entry's recency. When a new key
/// is inserted at capacity, the least recently used entry is evicted.
#[derive(Debug)]
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    capacity: usize,
    map: HashMap<K, V>,
    // Front is least recently used, back is most recently used.
    recency: VecDeque<K>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Cache holding at most `capacity` entries; a requested capacity of
    /// zero is clamped to one, a cache that can hold nothing cannot serve.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            recency: VecDeque::with_capacity(capacity),
        }
    }

    /// Entry capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up a key, refreshing its recency on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.map.contains_key(key) {
            self.touch(key);
            self.map.get(key)
        } else {
            None
        }
    }

    /// Insert a value, returning the evicted key if capacity was exceeded.
    ///
    /// Re-inserting an existing key replaces its value and refreshes its
    /// recency without evicting anything.
    pub fn insert(&mut self, key: K, value: V) -> Option<K> {
        if self.map.insert(key.clone(), value).is_some() {
            self.touch(&key);
            return None;
        }

        self.recency.push_back(key);
        if self.map.len() > self.capacity {
            if let Some(oldest) = self.recency.pop_front() {
                self.map.remove(&oldest);
                return Some(oldest);
            }
        }
        None
    }

    fn touch(&mut self, key: &K) {
        if let Some(pos) = self.recency.iter().position(|k| k == key) {
            if let Some(k) = self.recency.remove(pos) {
                self.recency.push_back(k);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_inserted_value() {
        let mut cache = LruCache::new(4);
        cache.insert("a", 1);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), None);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = LruCache::new(2);
        assert_eq!(cache.insert("a", 1), None);
        assert_eq!(cache.insert("b", 2), None);
        assert_eq!(cache.insert("c", 3), Some("a"));
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn test_read_refreshes_recency() {
        let mut cache = LruCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        // Touch "a" so "b" becomes the eviction candidate.
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.insert("c", 3), Some("b"));
        assert_eq!(cache.get(&"a"), Some(&1));
    }

    #[test]
    fn test_reinsert_replaces_without_eviction() {
        let mut cache = LruCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(cache.insert("a", 10), None);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a"), Some(&10));
        // "a" was refreshed by the re-insert, so "b" is evicted next.
        assert_eq!(cache.insert("c", 3), Some("b"));
    }

    #[test]
    fn test_zero_capacity_clamped_to_one() {
        let mut cache = LruCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.insert("a", 1);
        assert_eq!(cache.insert("b", 2), Some("a"));
        assert_eq!(cache.get(&"b"), Some(&2));
    }

    #[test]
    fn test_len_tracks_entries() {
        let mut cache = LruCache::new(3);
        assert!(cache.is_empty());
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(cache.len(), 2);
        cache.insert("c", 3);
        cache.insert("d", 4);
        assert_eq!(cache.len(), 3);
    }
}
