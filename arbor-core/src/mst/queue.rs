//! Binary min-heap that counts its own ordering decisions.
//!
//! Prim's comparison counter is defined as "every comparison the priority
//! queue performs". `std::collections::BinaryHeap` hides its comparator, so
//! this heap owns the sift routines and charges each key comparison to
//! [`CountingMinHeap::comparisons`].
//!
//! Costs per operation:
//! - `push`: one comparison per level climbed, plus the one that stops the
//!   climb (none when the entry lands at the root).
//! - `pop`: per level descended, one comparison to pick the smaller child
//!   when both children exist, and one comparing the sinking entry with that
//!   child.
//!
//! Equal keys never move past each other, so the heap is not stable but it is
//! deterministic for a fixed push sequence.

use std::cmp::Ordering;

/// Min-heap of `(key, value)` pairs ordered by `key` alone.
#[derive(Clone, Debug)]
pub struct CountingMinHeap<K, V> {
    entries: Vec<(K, V)>,
    comparisons: u64,
}

impl<K: Ord, V> Default for CountingMinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> CountingMinHeap<K, V> {
    /// Creates an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            comparisons: 0,
        }
    }

    /// Returns the number of queued entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of key comparisons performed so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn comparisons(&self) -> u64 { self.comparisons }

    /// Queues `value` under `key`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::CountingMinHeap;
    ///
    /// let mut heap = CountingMinHeap::new();
    /// heap.push(5, 'a');
    /// heap.push(2, 'b');
    /// assert_eq!(heap.comparisons(), 1);
    /// assert_eq!(heap.pop(), Some((2, 'b')));
    /// ```
    pub fn push(&mut self, key: K, value: V) {
        self.entries.push((key, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop(&mut self) -> Option<(K, V)> {
        if self.entries.is_empty() {
            return None;
        }
        let top = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    fn compare(&mut self, left: usize, right: usize) -> Ordering {
        self.comparisons += 1;
        match (self.entries.get(left), self.entries.get(right)) {
            (Some((left_key, _)), Some((right_key, _))) => left_key.cmp(right_key),
            _ => Ordering::Equal,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) >> 1;
            if self.compare(index, parent) != Ordering::Less {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = index * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.compare(left, right) == Ordering::Greater {
                right
            } else {
                left
            };
            if self.compare(index, child) != Ordering::Greater {
                break;
            }
            self.entries.swap(index, child);
            index = child;
        }
    }
}
