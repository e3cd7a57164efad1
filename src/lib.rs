//! graphpaths - weighted shortest paths and classic graph algorithms
//!
//! The core of this crate is a Dijkstra shortest-path engine over an
//! undirected, non-negatively weighted graph, driven by a binary-heap
//! priority queue. Around it sit independent helpers: depth-first and
//! breadth-first traversal, Kahn's topological sort and a bubble sort.
//!
//! Everything is synchronous and single-threaded. A built graph can be
//! shared by reference between concurrent queries because every query keeps
//! its own search state.

pub mod error;
pub mod graph;
pub mod queue;
pub mod sorting;
pub mod topological;
