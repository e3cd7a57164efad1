//! Heap-backed priority structures.
//!
//! [`PriorityQueue`] is the min-priority queue used as the frontier of the
//! shortest-path search. [`MaxHeap`] shares its dense binary heap.
//!
//! # Example
//!
//! ```rust
//! use graphpaths::queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert("x", 10.0);
//! queue.insert("y", 5.0);
//! queue.insert("y", 1.0); // a better priority for "y"; the old entry stays
//!
//! assert_eq!(queue.extract_min().map(|e| e.priority), Some(1.0));
//! assert_eq!(queue.len(), 2);
//! ```

mod binary_heap;
mod priority_queue;

pub use binary_heap::MaxHeap;
pub use priority_queue::{HeapEntry, PriorityQueue};
