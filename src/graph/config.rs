//! Construction-time graph settings.

use serde::{Deserialize, Serialize};

/// What `add_vertex` does with an id that is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateVertexPolicy {
    /// Fail with `GraphError::DuplicateVertex`
    #[default]
    Reject,
    /// Leave the existing vertex and its neighbors untouched
    Ignore,
}

/// Settings shared by [`WeightedGraph`](super::WeightedGraph) and
/// [`Graph`](super::Graph).
///
/// # Example
///
/// ```rust
/// use graphpaths::graph::{DuplicateVertexPolicy, GraphConfig, WeightedGraph};
///
/// let config = GraphConfig {
///     duplicate_vertices: DuplicateVertexPolicy::Ignore,
///     ..GraphConfig::default()
/// };
/// let mut graph = WeightedGraph::with_config(config);
/// graph.add_vertex("A").unwrap();
/// assert!(graph.add_vertex("A").is_ok());
/// assert_eq!(graph.vertex_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Handling of repeated `add_vertex` calls
    pub duplicate_vertices: DuplicateVertexPolicy,
    /// Whether `add_edge(v, v, ..)` is accepted
    pub allow_self_loops: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            duplicate_vertices: DuplicateVertexPolicy::Reject,
            allow_self_loops: true,
        }
    }
}
