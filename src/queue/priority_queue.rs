//! Minimum-priority queue over `(value, priority)` entries.
//!
//! There is no decrease-key. A caller that finds a better priority for a
//! value inserts it again; the old entry stays in the heap and comes out
//! later with its outdated priority. Callers must recognise and skip those
//! stale entries (the shortest-path search does this by comparing against
//! its distance table).

use serde::{Deserialize, Serialize};

use super::binary_heap::{DenseHeap, HeapOrder};

/// A value paired with the priority it was queued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeapEntry<V, P = f64> {
    /// The queued value
    pub value: V,
    /// Lower priorities are extracted first
    pub priority: P,
}

impl<V, P> HeapEntry<V, P> {
    /// Creates a new entry.
    pub fn new(value: V, priority: P) -> Self {
        Self { value, priority }
    }

    /// Splits the entry into its value and priority.
    pub fn into_parts(self) -> (V, P) {
        (self.value, self.priority)
    }
}

/// Ordering that keeps the lowest priority at the root.
#[derive(Debug)]
pub(crate) struct LowestPriority;

impl<V, P: PartialOrd> HeapOrder<HeapEntry<V, P>> for LowestPriority {
    fn above(a: &HeapEntry<V, P>, b: &HeapEntry<V, P>) -> bool {
        a.priority < b.priority
    }
}

/// A min-priority queue backed by a binary heap.
///
/// `insert` and `extract_min` are both O(log n). The same value may be
/// queued any number of times with different priorities; the queue never
/// deduplicates.
///
/// # Example
///
/// ```rust
/// use graphpaths::queue::PriorityQueue;
///
/// let mut er = PriorityQueue::new();
/// er.insert("common cold", 10.0);
/// er.insert("broken bone", 4.0);
/// er.insert("car accident", 2.0);
///
/// let first = er.extract_min().unwrap();
/// assert_eq!(first.value, "car accident");
/// assert_eq!(first.priority, 2.0);
/// assert_eq!(er.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<V, P = f64> {
    heap: DenseHeap<HeapEntry<V, P>, LowestPriority>,
}

impl<V, P: PartialOrd> Default for PriorityQueue<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P: PartialOrd> PriorityQueue<V, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: DenseHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: DenseHeap::with_capacity(capacity),
        }
    }

    /// Queues `value` under `priority`. O(log n).
    ///
    /// The entry is appended and moved toward the root while its parent's
    /// priority is strictly greater.
    pub fn insert(&mut self, value: V, priority: P) {
        self.heap.push(HeapEntry::new(value, priority));
    }

    /// Removes and returns the entry with the lowest priority. O(log n).
    ///
    /// Returns `None` when the queue is empty.
    pub fn extract_min(&mut self) -> Option<HeapEntry<V, P>> {
        self.heap.pop()
    }

    /// Returns the entry with the lowest priority without removing it.
    pub fn peek(&self) -> Option<&HeapEntry<V, P>> {
        self.heap.peek()
    }

    /// Returns the number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no entries are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates over the queued entries in heap (not priority) order.
    pub fn iter(&self) -> std::slice::Iter<'_, HeapEntry<V, P>> {
        self.heap.as_slice().iter()
    }

    /// Drains the queue into a vector in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<HeapEntry<V, P>> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.extract_min() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks that every entry's priority is no lower than its parent's.
    pub fn is_valid_heap(&self) -> bool {
        self.heap.is_valid()
    }
}

impl<V, P: PartialOrd> Extend<(V, P)> for PriorityQueue<V, P> {
    fn extend<I: IntoIterator<Item = (V, P)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.heap.reserve(iter.size_hint().0);
        for (value, priority) in iter {
            self.insert(value, priority);
        }
    }
}

impl<V, P: PartialOrd> FromIterator<(V, P)> for PriorityQueue<V, P> {
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(value, priority)| HeapEntry::new(value, priority))
            .collect();
        Self {
            heap: DenseHeap::from_vec(entries),
        }
    }
}
