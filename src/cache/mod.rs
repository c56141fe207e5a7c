//! Generic LRU cache.
//!
//! The engine memoizes two expensive computations per normalized prefix:
//! finished completion lists and similar-prefix expansions. Both sit behind
//! [`LruCache`], a fixed-capacity cache with O(1) amortized get/put and
//! strict recency eviction.
//!
//! Entries live in a `Vec` arena linked into a doubly-linked recency list
//! by index (head = most recent, tail = least recent), with a `FxHashMap`
//! for key lookup. No unsafe code.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Sentinel for null links in the recency list.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

/// Fixed-capacity least-recently-used cache.
///
/// `get` and `put` both mark the touched entry most-recently-used; when an
/// insert exceeds capacity the least-recently-used entry is evicted. A
/// capacity of 0 is a valid no-op cache that never retains anything.
///
/// # Example
///
/// ```rust
/// use libautocomplete::cache::LruCache;
///
/// let mut cache = LruCache::new(1);
/// cache.put(1, "a");
/// cache.put(2, "b");
/// assert_eq!(cache.get(&1), None);
/// assert_eq!(cache.get(&2), Some(&"b"));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    map: FxHashMap<K, usize>,
    slots: Vec<Option<Entry<K, V>>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: FxHashMap::default(),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Looks up `key`, marking the entry most-recently-used on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.detach(idx);
        self.push_front(idx);
        self.slots[idx].as_ref().map(|entry| &entry.value)
    }

    /// Inserts or updates `key`, marking it most-recently-used.
    ///
    /// Evicts the least-recently-used entry if the insert exceeds capacity.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        if let Some(&idx) = self.map.get(&key) {
            if let Some(entry) = self.slots[idx].as_mut() {
                entry.value = value;
            }
            self.detach(idx);
            self.push_front(idx);
            return;
        }

        let entry = Entry {
            key: key.clone(),
            value,
            prev: NIL,
            next: NIL,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(entry);
                idx
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };
        self.map.insert(key, idx);
        self.push_front(idx);

        if self.map.len() > self.capacity {
            self.evict_tail();
        }
    }

    /// Drops all entries and resets recency state.
    pub fn clear(&mut self) {
        self.map.clear();
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = match &self.slots[idx] {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        if prev != NIL {
            if let Some(entry) = self.slots[prev].as_mut() {
                entry.next = next;
            }
        } else {
            self.head = next;
        }

        if next != NIL {
            if let Some(entry) = self.slots[next].as_mut() {
                entry.prev = prev;
            }
        } else {
            self.tail = prev;
        }

        if let Some(entry) = self.slots[idx].as_mut() {
            entry.prev = NIL;
            entry.next = NIL;
        }
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(entry) = self.slots[idx].as_mut() {
            entry.prev = NIL;
            entry.next = old_head;
        }
        if old_head != NIL {
            if let Some(entry) = self.slots[old_head].as_mut() {
                entry.prev = idx;
            }
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn evict_tail(&mut self) {
        let idx = self.tail;
        if idx == NIL {
            return;
        }
        self.detach(idx);
        if let Some(entry) = self.slots[idx].take() {
            self.map.remove(&entry.key);
        }
        self.free.push(idx);
    }
}
