//! Undirected graph without edge weights.
//!
//! Same arena layout as [`WeightedGraph`](super::WeightedGraph): labels are
//! mapped to dense slots, and adjacency lists hold slot indices. Unlike the
//! weighted graph, edges and vertices can be removed.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::config::{DuplicateVertexPolicy, GraphConfig};
use crate::error::{GraphError, GraphResult};

#[derive(Debug, Clone)]
struct VertexRecord<V> {
    label: V,
    neighbors: Vec<usize>,
}

/// An undirected, unweighted graph supporting traversal.
///
/// # Example
///
/// ```rust
/// use graphpaths::graph::Graph;
///
/// let mut graph = Graph::new();
/// for v in ["A", "B", "C"] {
///     graph.add_vertex(v).unwrap();
/// }
/// graph.add_edge("A", "B").unwrap();
/// graph.add_edge("A", "C").unwrap();
///
/// let order: Vec<&str> = graph.breadth_first(&"A").unwrap().copied().collect();
/// assert_eq!(order, vec!["A", "B", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V> {
    records: Vec<VertexRecord<V>>,
    indices: HashMap<V, usize>,
    edge_count: usize,
    config: GraphConfig,
}

impl<V> Default for Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Creates an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            records: Vec::new(),
            indices: HashMap::new(),
            edge_count: 0,
            config,
        }
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            records: Vec::with_capacity(vertices),
            indices: HashMap::with_capacity(vertices),
            edge_count: 0,
            config: GraphConfig::default(),
        }
    }

    /// Registers a vertex with no neighbors.
    ///
    /// Repeated ids follow the configured [`DuplicateVertexPolicy`].
    pub fn add_vertex(&mut self, vertex: V) -> GraphResult<(), V> {
        if self.indices.contains_key(&vertex) {
            return match self.config.duplicate_vertices {
                DuplicateVertexPolicy::Reject => Err(GraphError::DuplicateVertex(vertex)),
                DuplicateVertexPolicy::Ignore => Ok(()),
            };
        }

        self.indices.insert(vertex.clone(), self.records.len());
        self.records.push(VertexRecord {
            label: vertex,
            neighbors: Vec::new(),
        });
        Ok(())
    }

    /// Connects two registered vertices.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either endpoint is missing, or
    /// [`GraphError::SelfLoop`] if `u == v` and self-loops are disabled.
    pub fn add_edge(&mut self, u: V, v: V) -> GraphResult<(), V> {
        let from = self.index_of(&u)?;
        let to = self.index_of(&v)?;

        if from == to && !self.config.allow_self_loops {
            return Err(GraphError::SelfLoop(u));
        }

        self.records[from].neighbors.push(to);
        if from != to {
            self.records[to].neighbors.push(from);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Removes every edge between `u` and `v`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either endpoint is missing, or
    /// [`GraphError::MissingEdge`] if they are not adjacent.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> GraphResult<(), V> {
        let from = self.index_of(u)?;
        let to = self.index_of(v)?;

        let before = self.records[from].neighbors.len();
        self.records[from].neighbors.retain(|&n| n != to);
        let removed = before - self.records[from].neighbors.len();
        if removed == 0 {
            return Err(GraphError::MissingEdge {
                from: u.clone(),
                to: v.clone(),
            });
        }

        self.records[to].neighbors.retain(|&n| n != from);
        self.edge_count -= removed;
        Ok(())
    }

    /// Removes a vertex together with every edge touching it.
    ///
    /// Remaining vertices keep their relative registration order.
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphResult<(), V> {
        let idx = self.index_of(vertex)?;

        let record = self.records.remove(idx);
        self.indices.remove(&record.label);
        self.edge_count -= record.neighbors.len();

        for other in &mut self.records {
            other.neighbors.retain(|&n| n != idx);
            for n in &mut other.neighbors {
                if *n > idx {
                    *n -= 1;
                }
            }
        }
        for slot in self.indices.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }

        debug!(
            vertex = ?record.label,
            edges = record.neighbors.len(),
            "removed vertex"
        );
        Ok(())
    }

    /// Checks if a vertex is registered.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    /// Returns the number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the vertices in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.records.iter().map(|record| &record.label)
    }

    /// Iterates over the neighbors of `vertex` in insertion order.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<impl Iterator<Item = &V> + '_, V> {
        let idx = self.index_of(vertex)?;
        Ok(self.records[idx]
            .neighbors
            .iter()
            .map(|&n| &self.records[n].label))
    }

    pub(super) fn index_of(&self, vertex: &V) -> GraphResult<usize, V> {
        self.indices
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    pub(super) fn label(&self, idx: usize) -> &V {
        &self.records[idx].label
    }

    pub(super) fn neighbor_slots(&self, idx: usize) -> &[usize] {
        &self.records[idx].neighbors
    }
}
