//! Graph structures and the algorithms that run over them.
//!
//! - [`WeightedGraph`] stores non-negative weighted undirected edges and
//!   answers shortest-path queries with Dijkstra's algorithm.
//! - [`Graph`] stores unweighted undirected edges and supports depth-first
//!   and breadth-first traversal.
//!
//! # Example
//!
//! ```rust
//! use graphpaths::graph::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new();
//! for v in ["A", "B", "C", "D", "E", "F"] {
//!     graph.add_vertex(v).unwrap();
//! }
//! graph.add_edge("A", "B", 4.0).unwrap();
//! graph.add_edge("A", "C", 2.0).unwrap();
//! graph.add_edge("B", "E", 3.0).unwrap();
//! graph.add_edge("C", "D", 2.0).unwrap();
//! graph.add_edge("C", "F", 4.0).unwrap();
//! graph.add_edge("D", "E", 3.0).unwrap();
//! graph.add_edge("D", "F", 1.0).unwrap();
//! graph.add_edge("E", "F", 1.0).unwrap();
//!
//! let path = graph.shortest_path(&"A", &"E").unwrap().unwrap();
//! assert_eq!(path.vertices(), &["A", "C", "D", "F", "E"]);
//! assert_eq!(path.total_weight(), 6.0);
//! ```

mod config;
mod dijkstra;
mod traversal;
mod unweighted;
mod weighted;

pub use config::{DuplicateVertexPolicy, GraphConfig};
pub use dijkstra::{ShortestPath, ShortestPathTree};
pub use traversal::{BreadthFirst, DepthFirst, StackOrder};
pub use unweighted::Graph;
pub use weighted::WeightedGraph;
