//! Best-first frontier of candidate paths.
//!
//! Entries carry whole paths rather than parent links; duplicates for the
//! same endpoint are allowed and filtered lazily at pop time by the engine.
//! A monotonic insertion counter breaks cost ties deterministically
//! (oldest entry first).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A frontier entry wrapping a path with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to get
/// min-heap behavior (lowest cost first).
#[derive(Debug)]
struct Entry<N> {
    key: Reverse<(u64, u64)>,
    path: Vec<N>,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N> Eq for Entry<N> {}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-heap of candidate paths keyed by `(cost, insertion order)`.
#[derive(Debug)]
pub struct Frontier<N> {
    heap: BinaryHeap<Entry<N>>,
    next_order: u64,
}

impl<N> Frontier<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_order: 0,
        }
    }

    /// Push a candidate path with its corrected cost (`g + h` of the
    /// endpoint).
    pub fn push(&mut self, path: Vec<N>, cost: u64) {
        let order = self.next_order;
        self.next_order += 1;
        self.heap.push(Entry {
            key: Reverse((cost, order)),
            path,
        });
    }

    /// Pop the cheapest path, oldest first among equal costs.
    #[must_use]
    pub fn pop(&mut self) -> Option<(Vec<N>, u64)> {
        self.heap.pop().map(|entry| {
            let Reverse((cost, _)) = entry.key;
            (entry.path, cost)
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<N> Default for Frontier<N> {
    fn default() -> Self {
        Self::new()
    }
}
