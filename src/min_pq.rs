//! Array-backed binary min-heap used as the search frontier.
//!
//! Unlike `std::collections::BinaryHeap`, the queue tracks its own logical
//! capacity: the backing store doubles when an insert finds it full and halves
//! once a removal leaves it at most one third occupied. Keeping growth and
//! shrink thresholds apart means a run of alternating inserts and removals at
//! a boundary never reallocates on every call.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PqError {
    #[error("priority queue is empty")]
    Empty,
}

/// A min-priority queue over any totally ordered key.
///
/// The smallest key sits at index 0; the children of index `k` are `2k + 1`
/// and `2k + 2`.
#[derive(Debug, Clone)]
pub struct MinPq<K> {
    keys: Vec<K>,
    capacity: usize,
}

impl<K: Ord> MinPq<K> {
    /// Creates an empty queue with room for one key.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty queue with room for `capacity` keys before the first
    /// resize.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            keys: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of keys the queue holds before it next doubles.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the smallest key without removing it.
    #[inline]
    pub fn min(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Adds `key` and restores heap order by swimming it towards the root.
    pub fn insert(&mut self, key: K) {
        if self.keys.len() == self.capacity {
            self.resize(2 * self.capacity);
        }

        self.keys.push(key);
        self.swim(self.keys.len() - 1);
    }

    /// Removes and returns the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`PqError::Empty`] when there is nothing to remove.
    pub fn delete_min(&mut self) -> Result<K, PqError> {
        if self.keys.is_empty() {
            return Err(PqError::Empty);
        }

        // the last key takes the root's slot, then sinks
        let min = self.keys.swap_remove(0);
        if !self.keys.is_empty() {
            self.sink(0);
        }

        if self.capacity > 1 && self.keys.len() <= self.capacity / 3 {
            self.resize(self.capacity / 2);
        }
        Ok(min)
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.keys.len());

        if capacity > self.keys.capacity() {
            self.keys.reserve_exact(capacity - self.keys.len());
        } else {
            self.keys.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.keys[k] >= self.keys[parent] {
                break;
            }
            self.keys.swap(k, parent);
            k = parent;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.keys.len();
        loop {
            let left = 2 * k + 1;
            if left >= n {
                break;
            }

            let mut child = left;
            if left + 1 < n && self.keys[left + 1] < self.keys[left] {
                child = left + 1;
            }
            if self.keys[child] >= self.keys[k] {
                break;
            }

            self.keys.swap(k, child);
            k = child;
        }
    }
}

impl<K: Ord> Default for MinPq<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for MinPq<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for MinPq<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut pq = Self::new();
        pq.extend(iter);
        pq
    }
}
