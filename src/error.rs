//! Error types for graph construction and ordering.
//!
//! Structural errors are reported at the call that caused them. An
//! unreachable destination is not an error: shortest-path queries return
//! `Ok(None)` for it.

use std::fmt::Debug;

/// Errors raised while building or querying a graph.
///
/// The offending vertex is carried in the error so callers can match on it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError<V: Debug> {
    /// The vertex has not been registered with `add_vertex`.
    #[error("Unknown vertex: {0:?}")]
    UnknownVertex(V),

    /// The vertex is already registered and duplicates are rejected.
    #[error("Vertex already exists: {0:?}")]
    DuplicateVertex(V),

    /// Edge weights must be finite and non-negative.
    #[error("Invalid weight {weight} for edge {from:?} - {to:?}")]
    InvalidWeight {
        /// First endpoint of the rejected edge
        from: V,
        /// Second endpoint of the rejected edge
        to: V,
        /// The rejected weight
        weight: f64,
    },

    /// Self-loops are disabled in the graph configuration.
    #[error("Self-loop on vertex {0:?} is not allowed")]
    SelfLoop(V),

    /// No edge joins the two vertices.
    #[error("No edge between {from:?} and {to:?}")]
    MissingEdge {
        /// First endpoint
        from: V,
        /// Second endpoint
        to: V,
    },
}

/// Result type alias for graph operations.
pub type GraphResult<T, V> = Result<T, GraphError<V>>;

/// Errors raised by topological ordering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// An edge endpoint is not a valid vertex index.
    #[error("Vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending index
        vertex: usize,
        /// Number of vertices in the graph
        vertex_count: usize,
    },

    /// The graph contains a cycle, so only part of it could be ordered.
    #[error("Graph contains a cycle: ordered {ordered} of {vertex_count} vertices")]
    Cycle {
        /// How many vertices were ordered before the cycle blocked progress
        ordered: usize,
        /// Number of vertices in the graph
        vertex_count: usize,
    },
}

/// Result type alias for topological ordering.
pub type TopologyResult<T> = Result<T, TopologyError>;
