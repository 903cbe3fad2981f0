//! SharedLruCache: LruCache behind a single lock

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Thread-safe LRU cache
///
/// Every operation takes the lock exactly once, so a `get` or `put` is
/// atomic with respect to every other call. Even `get` needs exclusive
/// access because a hit relinks the entry.
pub struct SharedLruCache<K, V> {
    /// Cache state (index and recency list)
    cache: Mutex<LruCache<K, V>>,

    /// Cache statistics
    stats: Arc<CacheStats>,
}

impl<K, V> SharedLruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new SharedLruCache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries
    ///
    /// # Returns
    /// * `Result<SharedLruCache>` - fails with `Error::ZeroCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            cache: Mutex::new(LruCache::new(capacity)?),
            stats: Arc::new(CacheStats::new()),
        })
    }

    /// Get a copy of a value, marking it as most recently used
    pub fn get(&self, key: &K) -> Option<V> {
        let value = self.cache.lock().get(key).cloned();
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    /// Insert or update a key-value pair
    pub fn put(&self, key: K, value: V) {
        let mut cache = self.cache.lock();
        if cache.contains(&key) {
            cache.put(key, value);
            self.stats.record_update();
            return;
        }

        self.stats.record_insert();
        if cache.push(key, value).is_some() {
            self.stats.record_eviction();
        }
    }

    /// Copy out all entries, least recently used first
    pub fn snapshot(&self) -> Vec<(K, V)> {
        self.cache.lock().snapshot()
    }

    /// Get current number of entries
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.lock().capacity()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get a shared handle to the cache statistics
    pub fn stats_handle(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }
}
