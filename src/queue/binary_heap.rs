//! Binary heap stored in a dense vector.
//!
//! The tree is implicit: the children of slot `i` live at `2i + 1` and
//! `2i + 2`, its parent at `(i - 1) / 2`. Which of two entries belongs
//! nearer the root is decided by a [`HeapOrder`], so the same sift logic
//! backs both the min-priority [`PriorityQueue`](super::PriorityQueue) and
//! the [`MaxHeap`].

use std::fmt;
use std::marker::PhantomData;

/// Decides which of two entries belongs nearer the root.
pub(crate) trait HeapOrder<T> {
    /// Returns true if `a` must sit strictly above `b`.
    ///
    /// Entries that compare equal (or are unordered, like NaN) never swap.
    fn above(a: &T, b: &T) -> bool;
}

/// Ordering that keeps the greatest value at the root.
#[derive(Debug)]
pub(crate) struct Greatest;

impl<T: PartialOrd> HeapOrder<T> for Greatest {
    fn above(a: &T, b: &T) -> bool {
        a > b
    }
}

pub(crate) struct DenseHeap<T, O> {
    items: Vec<T>,
    order: PhantomData<fn() -> O>,
}

impl<T, O: HeapOrder<T>> DenseHeap<T, O> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    /// Builds a heap from arbitrary items in O(n).
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        let mut heap = Self {
            items,
            order: PhantomData,
        };
        for idx in (0..heap.items.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes the root, moving the last entry into its place.
    pub(crate) fn pop(&mut self) -> Option<T> {
        let last = self.items.pop()?;
        if self.items.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.items[0], last);
        self.sift_down(0);
        Some(root)
    }

    /// Checks that no entry sits strictly above its parent.
    pub(crate) fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|idx| !O::above(&self.items[idx], &self.items[parent(idx)]))
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = parent(idx);
            if !O::above(&self.items[idx], &self.items[parent]) {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut target = idx;

            if left < len && O::above(&self.items[left], &self.items[target]) {
                target = left;
            }
            if right < len && O::above(&self.items[right], &self.items[target]) {
                target = right;
            }
            if target == idx {
                break;
            }

            self.items.swap(idx, target);
            idx = target;
        }
    }
}

impl<T: Clone, O> Clone for DenseHeap<T, O> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for DenseHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

/// A max binary heap: the greatest value is always at the root.
///
/// # Example
///
/// ```rust
/// use graphpaths::queue::MaxHeap;
///
/// let mut heap = MaxHeap::from_vec(vec![41, 39, 33, 18, 27, 12]);
/// heap.push(55);
///
/// assert_eq!(heap.pop(), Some(55));
/// assert_eq!(heap.pop(), Some(41));
/// assert_eq!(heap.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    heap: DenseHeap<T, Greatest>,
}

impl<T: PartialOrd> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> MaxHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            heap: DenseHeap::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: DenseHeap::with_capacity(capacity),
        }
    }

    /// Builds a heap from values in any order.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            heap: DenseHeap::from_vec(values),
        }
    }

    /// Adds a value. O(log n).
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
    }

    /// Removes and returns the greatest value, or `None` if empty. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop()
    }

    /// Returns the greatest value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Returns the number of values in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Checks the max-heap property over the whole backing vector.
    pub fn is_valid_heap(&self) -> bool {
        self.heap.is_valid()
    }
}

impl<T: PartialOrd> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.heap.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: PartialOrd> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_heap_pops_none() {
        let mut heap: MaxHeap<i32> = MaxHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn test_push_keeps_max_at_root() {
        let mut heap = MaxHeap::new();
        for value in [41, 39, 32, 18, 27, 12, 55, 33, 1, 199] {
            heap.push(value);
            assert!(heap.is_valid_heap());
        }
        assert_eq!(heap.peek(), Some(&199));
        assert_eq!(heap.len(), 10);
    }

    #[test]
    fn test_pop_yields_descending_order() {
        let mut heap = MaxHeap::from_vec(vec![55, 39, 41, 18, 27, 12, 33]);
        let mut drained = Vec::new();
        while let Some(value) = heap.pop() {
            assert!(heap.is_valid_heap());
            drained.push(value);
        }
        assert_eq!(drained, vec![55, 41, 39, 33, 27, 18, 12]);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_from_vec_heapifies_unordered_input() {
        let heap = MaxHeap::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(heap.is_valid_heap());
        assert_eq!(heap.peek(), Some(&9));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut heap: MaxHeap<i32> = [5, 5, 3, 5].into_iter().collect();
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(3));
    }

    #[test]
    fn test_single_element() {
        let mut heap = MaxHeap::new();
        heap.push("only");
        assert_eq!(heap.pop(), Some("only"));
        assert!(heap.is_empty());
    }
}
