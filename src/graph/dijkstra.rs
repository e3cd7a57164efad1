//! Dijkstra's single-source shortest paths over a [`WeightedGraph`].
//!
//! The frontier is a [`PriorityQueue`] without decrease-key: a relaxed
//! vertex is queued again under its better distance and the superseded
//! entry is skipped when it is eventually extracted. Correctness relies on
//! every edge weight being non-negative, which `add_edge` enforces.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;
use tracing::{debug, trace};

use super::weighted::WeightedGraph;
use crate::error::GraphResult;
use crate::queue::PriorityQueue;

/// A shortest path from a start vertex to a finish vertex, both inclusive.
///
/// # Example
///
/// ```rust
/// use graphpaths::graph::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// graph.add_vertex('a').unwrap();
/// graph.add_vertex('b').unwrap();
/// graph.add_edge('a', 'b', 2.5).unwrap();
///
/// let path = graph.shortest_path(&'a', &'b').unwrap().unwrap();
/// assert_eq!(path.start(), &'a');
/// assert_eq!(path.finish(), &'b');
/// assert_eq!(path.hop_count(), 1);
/// assert_eq!(path.total_weight(), 2.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<V> {
    vertices: Vec<V>,
    total_weight: f64,
}

impl<V> ShortestPath<V> {
    /// The vertices from start to finish.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Consumes the path, returning its vertices.
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }

    /// Sum of the edge weights along the path.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The first vertex of the path.
    pub fn start(&self) -> &V {
        &self.vertices[0]
    }

    /// The last vertex of the path.
    pub fn finish(&self) -> &V {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Number of vertices on the path (never zero).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: a path holds at least its start vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges on the path.
    pub fn hop_count(&self) -> usize {
        self.vertices.len() - 1
    }
}

/// Distances and predecessors from one start vertex to every vertex of the
/// graph, as produced by [`WeightedGraph::shortest_paths_from`].
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g, V> {
    graph: &'g WeightedGraph<V>,
    start: usize,
    distances: Vec<f64>,
    previous: Vec<Option<usize>>,
}

impl<'g, V> ShortestPathTree<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// The vertex the tree was grown from.
    pub fn start(&self) -> &'g V {
        self.graph.label(self.start)
    }

    /// Shortest distance to `vertex`.
    ///
    /// `None` if the vertex is unreachable or not in the graph.
    pub fn distance_to(&self, vertex: &V) -> Option<f64> {
        let idx = self.graph.index_of(vertex).ok()?;
        let distance = self.distances[idx];
        distance.is_finite().then_some(distance)
    }

    /// Shortest path to `vertex`.
    ///
    /// `None` if the vertex is unreachable or not in the graph.
    pub fn path_to(&self, vertex: &V) -> Option<ShortestPath<V>> {
        let idx = self.graph.index_of(vertex).ok()?;
        reconstruct(self.graph, &self.distances, &self.previous, self.start, idx)
    }

    /// Iterates over every reachable vertex with its distance, in
    /// registration order. The start vertex is included at distance 0.
    pub fn reachable(&self) -> impl Iterator<Item = (&'g V, f64)> + '_ {
        let graph = self.graph;
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, distance)| distance.is_finite())
            .map(move |(idx, &distance)| (graph.label(idx), distance))
    }
}

/// Per-query search state. Lives only for one query.
struct Search {
    distances: Vec<f64>,
    previous: Vec<Option<usize>>,
    settled: Vec<bool>,
    extracted: usize,
    stale: usize,
}

impl Search {
    fn run<V>(graph: &WeightedGraph<V>, start: usize, finish: Option<usize>) -> Self
    where
        V: Clone + Eq + Hash + Debug,
    {
        let count = graph.vertex_count();
        let mut search = Self {
            distances: vec![f64::INFINITY; count],
            previous: vec![None; count],
            settled: vec![false; count],
            extracted: 0,
            stale: 0,
        };
        search.distances[start] = 0.0;

        let mut frontier: PriorityQueue<usize> = search
            .distances
            .iter()
            .copied()
            .enumerate()
            .collect();

        while let Some(entry) = frontier.extract_min() {
            let (current, distance) = entry.into_parts();
            search.extracted += 1;

            if search.settled[current] || distance > search.distances[current] {
                search.stale += 1;
                trace!(vertex = ?graph.label(current), distance, "skipped stale entry");
                continue;
            }
            if distance.is_infinite() {
                // Everything still queued is unreachable.
                break;
            }
            search.settled[current] = true;
            trace!(vertex = ?graph.label(current), distance, "settled vertex");

            if Some(current) == finish {
                break;
            }

            for edge in graph.edges_of(current) {
                let candidate = distance + edge.weight;
                if candidate < search.distances[edge.target] {
                    search.distances[edge.target] = candidate;
                    search.previous[edge.target] = Some(current);
                    frontier.insert(edge.target, candidate);
                    trace!(
                        vertex = ?graph.label(edge.target),
                        via = ?graph.label(current),
                        distance = candidate,
                        "relaxed edge"
                    );
                }
            }
        }

        debug!(
            extracted = search.extracted,
            stale = search.stale,
            "shortest path search finished"
        );
        search
    }
}

fn reconstruct<V: Clone>(
    graph: &WeightedGraph<V>,
    distances: &[f64],
    previous: &[Option<usize>],
    start: usize,
    finish: usize,
) -> Option<ShortestPath<V>>
where
    V: Eq + Hash + Debug,
{
    let total_weight = distances[finish];
    if !total_weight.is_finite() {
        return None;
    }

    let mut vertices = vec![graph.label(finish).clone()];
    let mut current = finish;
    while current != start {
        current = previous[current]?;
        vertices.push(graph.label(current).clone());
    }
    vertices.reverse();

    Some(ShortestPath {
        vertices,
        total_weight,
    })
}

impl<V> WeightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Finds a minimum-weight path from `start` to `finish`.
    ///
    /// The search stops as soon as `finish` is settled. Returns `Ok(None)`
    /// when `finish` cannot be reached; `start == finish` yields the
    /// single-vertex path.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`](crate::error::GraphError::UnknownVertex)
    /// if either endpoint is not registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphpaths::graph::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new();
    /// for v in ["A", "B", "G"] {
    ///     graph.add_vertex(v).unwrap();
    /// }
    /// graph.add_edge("A", "B", 1.0).unwrap();
    ///
    /// assert!(graph.shortest_path(&"A", &"G").unwrap().is_none());
    /// assert_eq!(graph.shortest_path(&"A", &"A").unwrap().unwrap().vertices(), &["A"]);
    /// assert!(graph.shortest_path(&"A", &"Z").is_err());
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn shortest_path(&self, start: &V, finish: &V) -> GraphResult<Option<ShortestPath<V>>, V> {
        let start_idx = self.index_of(start)?;
        let finish_idx = self.index_of(finish)?;

        let search = Search::run(self, start_idx, Some(finish_idx));
        Ok(reconstruct(
            self,
            &search.distances,
            &search.previous,
            start_idx,
            finish_idx,
        ))
    }

    /// Runs the search to completion from `start`, recording the shortest
    /// distance and path to every reachable vertex.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphpaths::graph::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new();
    /// for v in 0..3 {
    ///     graph.add_vertex(v).unwrap();
    /// }
    /// graph.add_edge(0, 1, 2.0).unwrap();
    ///
    /// let tree = graph.shortest_paths_from(&0).unwrap();
    /// assert_eq!(tree.distance_to(&1), Some(2.0));
    /// assert_eq!(tree.distance_to(&2), None);
    /// assert_eq!(tree.reachable().count(), 2);
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn shortest_paths_from(&self, start: &V) -> GraphResult<ShortestPathTree<'_, V>, V> {
        let start_idx = self.index_of(start)?;
        let search = Search::run(self, start_idx, None);

        Ok(ShortestPathTree {
            graph: self,
            start: start_idx,
            distances: search.distances,
            previous: search.previous,
        })
    }
}
