//! Undirected graph with non-negative edge weights.
//!
//! Vertices live in a dense vector of records; a hash map translates a
//! vertex label to its slot once, at the API boundary, so the search loop
//! works on plain indices.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::config::{DuplicateVertexPolicy, GraphConfig};
use crate::error::{GraphError, GraphResult};

/// One half of an undirected edge, stored in the adjacency list of the
/// other endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct WeightedEdge {
    pub(super) target: usize,
    pub(super) weight: f64,
}

#[derive(Debug, Clone)]
struct VertexRecord<V> {
    label: V,
    edges: Vec<WeightedEdge>,
}

/// An undirected graph whose edges carry non-negative weights.
///
/// Vertices must be registered with [`add_vertex`](Self::add_vertex) before
/// edges can reference them. Every edge is visible from both endpoints with
/// the same weight.
///
/// # Example
///
/// ```rust
/// use graphpaths::graph::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// for v in ["A", "B", "C"] {
///     graph.add_vertex(v).unwrap();
/// }
/// graph.add_edge("A", "B", 4.0).unwrap();
/// graph.add_edge("A", "C", 2.0).unwrap();
/// graph.add_edge("C", "B", 1.0).unwrap();
///
/// let path = graph.shortest_path(&"A", &"B").unwrap().unwrap();
/// assert_eq!(path.vertices(), &["A", "C", "B"]);
/// assert_eq!(path.total_weight(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    records: Vec<VertexRecord<V>>,
    indices: HashMap<V, usize>,
    edge_count: usize,
    config: GraphConfig,
}

impl<V> Default for WeightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WeightedGraph<V>
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

    /// Returns the configuration the graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Registers a vertex with an empty neighbor list.
    ///
    /// A repeated id fails with [`GraphError::DuplicateVertex`] under the
    /// default [`DuplicateVertexPolicy::Reject`], and is a no-op under
    /// [`DuplicateVertexPolicy::Ignore`]. Either way the existing
    /// neighbors are left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphpaths::error::GraphError;
    /// use graphpaths::graph::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new();
    /// graph.add_vertex("A").unwrap();
    /// assert_eq!(graph.add_vertex("A"), Err(GraphError::DuplicateVertex("A")));
    /// ```
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
            edges: Vec::new(),
        });
        Ok(())
    }

    /// Adds an undirected edge between two registered vertices.
    ///
    /// The weight must be finite and non-negative. On any error the graph
    /// is left unchanged. Parallel edges are kept; a self-loop is stored
    /// once in the vertex's own list.
    ///
    /// # Errors
    ///
    /// * [`GraphError::UnknownVertex`] if either endpoint is not registered
    /// * [`GraphError::SelfLoop`] if `u == v` and self-loops are disabled
    /// * [`GraphError::InvalidWeight`] for a negative, NaN or infinite weight
    pub fn add_edge(&mut self, u: V, v: V, weight: f64) -> GraphResult<(), V> {
        let from = self.index_of(&u)?;
        let to = self.index_of(&v)?;

        if from == to && !self.config.allow_self_loops {
            return Err(GraphError::SelfLoop(u));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: u,
                to: v,
                weight,
            });
        }

        self.records[from].edges.push(WeightedEdge { target: to, weight });
        if from != to {
            self.records[to].edges.push(WeightedEdge {
                target: from,
                weight,
            });
        }
        self.edge_count += 1;
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

    /// Iterates over `(neighbor, weight)` pairs in insertion order.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<impl Iterator<Item = (&V, f64)> + '_, V> {
        let idx = self.index_of(vertex)?;
        Ok(self.records[idx]
            .edges
            .iter()
            .map(|edge| (&self.records[edge.target].label, edge.weight)))
    }

    /// Returns the lightest weight among edges joining `u` and `v`.
    ///
    /// `None` if either vertex is unknown or they are not adjacent.
    pub fn edge_weight(&self, u: &V, v: &V) -> Option<f64> {
        let from = *self.indices.get(u)?;
        let to = *self.indices.get(v)?;
        self.records[from]
            .edges
            .iter()
            .filter(|edge| edge.target == to)
            .map(|edge| edge.weight)
            .reduce(f64::min)
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

    pub(super) fn edges_of(&self, idx: usize) -> &[WeightedEdge] {
        &self.records[idx].edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightedGraph<&'static str> {
        let mut graph = WeightedGraph::new();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_vertex("C").unwrap();
        graph.add_edge("A", "B", 4.0).unwrap();
        graph.add_edge("A", "C", 2.0).unwrap();
        graph.add_edge("B", "C", 1.5).unwrap();
        graph
    }

    #[test]
    fn test_create_empty_graph() {
        let graph: WeightedGraph<&str> = WeightedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_vertex() {
        let mut graph = WeightedGraph::with_capacity(2);
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.contains_vertex(&"A"));
        assert!(!graph.contains_vertex(&"Z"));
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_vertex_rejected_by_default() {
        let mut graph = triangle();
        let result = graph.add_vertex("A");

        assert_eq!(result, Err(GraphError::DuplicateVertex("A")));
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.neighbors(&"A").unwrap().count(), 2);
    }

    #[test]
    fn test_duplicate_vertex_ignored_keeps_neighbors() {
        let config = GraphConfig {
            duplicate_vertices: DuplicateVertexPolicy::Ignore,
            ..GraphConfig::default()
        };
        let mut graph = WeightedGraph::with_config(config);
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();

        assert!(graph.add_vertex("A").is_ok());
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(1.0));
    }

    #[test]
    fn test_edges_are_symmetric() {
        let graph = triangle();
        assert_eq!(graph.edge_count(), 3);

        for u in graph.vertices() {
            for (v, weight) in graph.neighbors(u).unwrap() {
                let back: Vec<f64> = graph
                    .neighbors(v)
                    .unwrap()
                    .filter(|(n, _)| *n == u)
                    .map(|(_, w)| w)
                    .collect();
                assert!(back.contains(&weight), "{v:?} missing back edge to {u:?}");
            }
        }
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let graph = triangle();
        let neighbors: Vec<(&str, f64)> = graph
            .neighbors(&"A")
            .unwrap()
            .map(|(v, w)| (*v, w))
            .collect();
        assert_eq!(neighbors, vec![("B", 4.0), ("C", 2.0)]);

        assert!(matches!(
            graph.neighbors(&"Z"),
            Err(GraphError::UnknownVertex("Z"))
        ));
    }

    #[test]
    fn test_add_edge_unknown_vertex_leaves_graph_unchanged() {
        let mut graph = triangle();

        assert_eq!(
            graph.add_edge("A", "Z", 1.0),
            Err(GraphError::UnknownVertex("Z"))
        );
        assert_eq!(
            graph.add_edge("Y", "A", 1.0),
            Err(GraphError::UnknownVertex("Y"))
        );
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.neighbors(&"A").unwrap().count(), 2);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let mut graph = triangle();

        for weight in [-1.0, f64::NAN, f64::INFINITY] {
            let err = graph.add_edge("A", "B", weight).unwrap_err();
            assert!(matches!(err, GraphError::InvalidWeight { .. }));
        }
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(4.0));
    }

    #[test]
    fn test_zero_weight_allowed() {
        let mut graph = triangle();
        assert!(graph.add_edge("A", "B", 0.0).is_ok());
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(0.0));
    }

    #[test]
    fn test_parallel_edges_report_lightest_weight() {
        let mut graph = triangle();
        graph.add_edge("B", "A", 3.0).unwrap();

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(3.0));
        assert_eq!(graph.edge_weight(&"B", &"A"), Some(3.0));
        assert_eq!(graph.edge_weight(&"A", &"Z"), None);
    }

    #[test]
    fn test_self_loop_stored_once() {
        let mut graph = triangle();
        graph.add_edge("C", "C", 5.0).unwrap();

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors(&"C").unwrap().count(), 3);
        assert_eq!(graph.edge_weight(&"C", &"C"), Some(5.0));
    }

    #[test]
    fn test_self_loop_rejected_when_disabled() {
        let config = GraphConfig {
            allow_self_loops: false,
            ..GraphConfig::default()
        };
        let mut graph = WeightedGraph::with_config(config);
        graph.add_vertex(1).unwrap();

        assert_eq!(graph.add_edge(1, 1, 1.0), Err(GraphError::SelfLoop(1)));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.config().allow_self_loops);
    }
}
