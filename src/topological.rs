//! Topological ordering of a directed acyclic graph (Kahn's algorithm).
//!
//! Vertices are the indices `0..vertex_count`. An edge `(u, v)` means `u`
//! must come before `v`. Vertices with no remaining incoming edges are
//! processed first-in first-out, seeded in ascending index order, so the
//! result is deterministic.
//!
//! # Example
//!
//! ```rust
//! use graphpaths::topological::{can_complete, topological_order};
//!
//! let order = topological_order(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//! assert_eq!(order, vec![0, 1, 2, 3]);
//!
//! assert!(!can_complete(2, &[(0, 1), (1, 0)]));
//! ```

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{TopologyError, TopologyResult};

/// Orders `vertex_count` vertices so that every edge points forward.
///
/// # Errors
///
/// * [`TopologyError::VertexOutOfRange`] if an edge names a vertex
///   `>= vertex_count`
/// * [`TopologyError::Cycle`] if the edges contain a cycle
pub fn topological_order(vertex_count: usize, edges: &[(usize, usize)]) -> TopologyResult<Vec<usize>> {
    let adjacency = build_adjacency(vertex_count, edges)?;
    let mut in_degree = in_degrees(&adjacency);

    let mut ready: VecDeque<usize> = (0..vertex_count).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(vertex_count);

    while let Some(vertex) = ready.pop_front() {
        order.push(vertex);
        for &next in &adjacency[vertex] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push_back(next);
            }
        }
    }

    if order.len() < vertex_count {
        debug!(ordered = order.len(), vertex_count, "cycle prevents topological order");
        return Err(TopologyError::Cycle {
            ordered: order.len(),
            vertex_count,
        });
    }
    Ok(order)
}

/// Returns true if every vertex can be ordered, i.e. the edges are acyclic.
///
/// Out-of-range edges also yield `false`.
pub fn can_complete(vertex_count: usize, edges: &[(usize, usize)]) -> bool {
    topological_order(vertex_count, edges).is_ok()
}

/// Converts `(item, prerequisite)` pairs into `(prerequisite, item)` edges.
///
/// Course schedules are usually written with the dependent first; this
/// flips them into the before-after direction [`topological_order`]
/// expects.
///
/// ```rust
/// use graphpaths::topological::{from_prerequisites, topological_order};
///
/// // course 1 requires course 0
/// let edges = from_prerequisites(&[(1, 0)]);
/// assert_eq!(topological_order(2, &edges).unwrap(), vec![0, 1]);
/// ```
pub fn from_prerequisites(pairs: &[(usize, usize)]) -> Vec<(usize, usize)> {
    pairs.iter().map(|&(item, prereq)| (prereq, item)).collect()
}

fn build_adjacency(vertex_count: usize, edges: &[(usize, usize)]) -> TopologyResult<Vec<Vec<usize>>> {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for &(from, to) in edges {
        for vertex in [from, to] {
            if vertex >= vertex_count {
                return Err(TopologyError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        adjacency[from].push(to);
    }
    Ok(adjacency)
}

fn in_degrees(adjacency: &[Vec<usize>]) -> Vec<usize> {
    let mut in_degree = vec![0; adjacency.len()];
    for targets in adjacency {
        for &v in targets {
            in_degree[v] += 1;
        }
    }
    in_degree
}
