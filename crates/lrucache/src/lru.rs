//! LRU (Least Recently Used) cache implementation
//!
//! Entries live in a slot arena threaded by a doubly-linked list of slot
//! indices. The list runs from the least recently used entry (head) to the
//! most recently used one (tail), and the hash index maps each key straight
//! to its slot, so lookup, relink and eviction are all O(1).

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Slot in the recency list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU cache with fixed capacity
pub struct LruCache<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Node<K, V>>,
    /// Least recently used slot, next to be evicted
    head: Option<usize>,
    /// Most recently used slot
    tail: Option<usize>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache holding at most `capacity` entries
    ///
    /// # Errors
    /// * `Error::ZeroCapacity` - if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        debug!(capacity, "creating lru cache");

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            capacity,
        })
    }

    /// Get a value and mark it as most recently used
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.move_to_back(idx);
        Some(&self.nodes[idx].value)
    }

    /// Get a value without touching its recency
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|&idx| &self.nodes[idx].value)
    }

    /// Check whether a key is resident, without touching its recency
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Insert or update a key-value pair
    ///
    /// The key becomes the most recently used entry. Inserting a new key
    /// into a full cache evicts the least recently used entry.
    pub fn put(&mut self, key: K, value: V) {
        self.push(key, value);
    }

    /// Insert or update a key-value pair, returning the evicted entry
    ///
    /// Returns `None` when the key was already resident or the cache had
    /// room; updates never evict.
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx].value = value;
            self.move_to_back(idx);
            return None;
        }

        let idx = match self.head {
            Some(idx) if self.nodes.len() >= self.capacity => idx,
            _ => {
                let idx = self.nodes.len();
                self.nodes.push(Node {
                    key: key.clone(),
                    value,
                    prev: None,
                    next: None,
                });
                self.link_back(idx);
                self.map.insert(key, idx);
                return None;
            }
        };

        // Full: recycle the LRU slot for the new entry
        self.unlink(idx);
        let node = &mut self.nodes[idx];
        let old_key = std::mem::replace(&mut node.key, key.clone());
        let old_value = std::mem::replace(&mut node.value, value);
        self.map.remove(&old_key);
        self.map.insert(key, idx);
        self.link_back(idx);

        trace!(slot = idx, capacity = self.capacity, "evicted least recently used entry");
        Some((old_key, old_value))
    }

    /// Least recently used entry, the next eviction candidate
    pub fn lru(&self) -> Option<(&K, &V)> {
        self.head.map(|idx| self.entry(idx))
    }

    /// Most recently used entry
    pub fn mru(&self) -> Option<(&K, &V)> {
        self.tail.map(|idx| self.entry(idx))
    }

    /// Iterate entries from least to most recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.map.len(),
        }
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn entry(&self, idx: usize) -> (&K, &V) {
        let node = &self.nodes[idx];
        (&node.key, &node.value)
    }

    fn move_to_back(&mut self, idx: usize) {
        if self.tail == Some(idx) {
            return;
        }

        self.unlink(idx);
        self.link_back(idx);
    }

    fn link_back(&mut self, idx: usize) {
        let old_tail = self.tail;
        {
            let node = &mut self.nodes[idx];
            node.prev = old_tail;
            node.next = None;
        }

        match old_tail {
            Some(tail_idx) => self.nodes[tail_idx].next = Some(idx),
            None => self.head = Some(idx),
        }

        self.tail = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = &mut self.nodes[idx];
            (node.prev.take(), node.next.take())
        };

        match prev {
            Some(prev_idx) => self.nodes[prev_idx].next = next,
            None => self.head = next,
        }

        match next {
            Some(next_idx) => self.nodes[next_idx].prev = prev,
            None => self.tail = prev,
        }
    }
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Copy out all entries, least recently used first
    ///
    /// Does not affect recency.
    pub fn snapshot(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over cache entries, least recently used first
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    next: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes: &'a [Node<K, V>] = self.nodes;
        let node = &nodes[self.next?];
        self.next = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
