//! # lrucache
//!
//! Fixed-capacity key-value cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to arena slot (O(1) lookup)
//! - **Recency list**: doubly-linked list of slot indices, LRU at the head,
//!   MRU at the tail (O(1) relink and eviction)
//! - **SharedLruCache**: the same cache behind one `parking_lot` mutex, with
//!   hit/miss statistics
//!
//! ```
//! use lrucache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put(1, "one");
//! cache.put(2, "two");
//! cache.get(&1);
//! cache.put(3, "three"); // evicts 2
//!
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.snapshot(), vec![(1, "one"), (3, "three")]);
//! # Ok::<(), lrucache::Error>(())
//! ```

#![warn(missing_docs)]

mod error;
mod lru;
mod shared;
mod stats;

pub use error::{Error, Result};
pub use lru::{Iter, LruCache};
pub use shared::SharedLruCache;
pub use stats::CacheStats;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_replacement_scenario() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.get(&1), Some(&1));
        cache.put(3, 3);

        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some(&1));
        assert_eq!(cache.get(&3), Some(&3));
    }

    #[test]
    fn test_same_key_replacement_scenario() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(2, 3);

        assert_eq!(cache.get(&1), Some(&1));
        assert_eq!(cache.get(&2), Some(&3));
    }

    #[test]
    fn test_snapshot_scenario() {
        let mut cache = LruCache::new(3).unwrap();
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);
        cache.get(&2);
        cache.put(4, 4);
        assert_eq!(cache.get(&1), None);
        cache.put(5, 5);

        let actual: HashSet<_> = cache.snapshot().into_iter().collect();
        let expected: HashSet<_> = [(2, 2), (4, 4), (5, 5)].into_iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(LruCache::<i32, i32>::new(0).unwrap_err(), Error::ZeroCapacity);
        assert!(SharedLruCache::<i32, i32>::new(0).is_err());
    }
}
