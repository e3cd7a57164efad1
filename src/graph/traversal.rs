//! Lazy depth-first and breadth-first traversals of a [`Graph`].
//!
//! Each iterator visits every vertex reachable from its start exactly once
//! and keeps its own visited set, so several traversals can run over the
//! same graph at the same time.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use super::unweighted::Graph;
use crate::error::GraphResult;

/// Depth-first preorder: a vertex is yielded, then each of its unvisited
/// neighbors is explored fully, in adjacency order.
///
/// Produces the same order as the textbook recursive formulation, but uses
/// an explicit stack so deep graphs cannot overflow the call stack.
#[derive(Debug, Clone)]
pub struct DepthFirst<'g, V> {
    graph: &'g Graph<V>,
    visited: Vec<bool>,
    // (vertex slot, position of the next neighbor to examine)
    stack: Vec<(usize, usize)>,
    pending: Option<usize>,
}

impl<'g, V> Iterator for DepthFirst<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            self.stack.push((start, 0));
            return Some(self.graph.label(start));
        }

        while let Some((vertex, cursor)) = self.stack.last_mut() {
            let neighbors = self.graph.neighbor_slots(*vertex);
            match neighbors.get(*cursor) {
                Some(&next) => {
                    *cursor += 1;
                    if !self.visited[next] {
                        self.visited[next] = true;
                        self.stack.push((next, 0));
                        return Some(self.graph.label(next));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Stack-order depth-first traversal: neighbors are marked when pushed and
/// the most recently pushed vertex is yielded next.
///
/// This visits the same vertices as [`DepthFirst`] but, for a vertex with
/// several neighbors, explores the last-listed one first.
#[derive(Debug, Clone)]
pub struct StackOrder<'g, V> {
    graph: &'g Graph<V>,
    visited: Vec<bool>,
    stack: Vec<usize>,
}

impl<'g, V> Iterator for StackOrder<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.stack.pop()?;
        for &next in self.graph.neighbor_slots(vertex) {
            if !self.visited[next] {
                self.visited[next] = true;
                self.stack.push(next);
            }
        }
        Some(self.graph.label(vertex))
    }
}

/// Breadth-first traversal: vertices are yielded in order of hop distance
/// from the start, ties broken by adjacency order.
#[derive(Debug, Clone)]
pub struct BreadthFirst<'g, V> {
    graph: &'g Graph<V>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'g, V> Iterator for BreadthFirst<'g, V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        for &next in self.graph.neighbor_slots(vertex) {
            if !self.visited[next] {
                self.visited[next] = true;
                self.queue.push_back(next);
            }
        }
        Some(self.graph.label(vertex))
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Depth-first preorder from `start`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphpaths::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// for v in ["A", "B", "C", "D"] {
    ///     graph.add_vertex(v).unwrap();
    /// }
    /// graph.add_edge("A", "B").unwrap();
    /// graph.add_edge("A", "C").unwrap();
    /// graph.add_edge("B", "D").unwrap();
    ///
    /// let order: Vec<_> = graph.depth_first(&"A").unwrap().copied().collect();
    /// assert_eq!(order, vec!["A", "B", "D", "C"]);
    /// ```
    pub fn depth_first(&self, start: &V) -> GraphResult<DepthFirst<'_, V>, V> {
        let start = self.index_of(start)?;
        Ok(DepthFirst {
            graph: self,
            visited: self.visited_from(start),
            stack: Vec::new(),
            pending: Some(start),
        })
    }

    /// Depth-first traversal from `start` in stack-pop order.
    pub fn depth_first_by_stack(&self, start: &V) -> GraphResult<StackOrder<'_, V>, V> {
        let start = self.index_of(start)?;
        Ok(StackOrder {
            graph: self,
            visited: self.visited_from(start),
            stack: vec![start],
        })
    }

    /// Breadth-first traversal from `start`.
    pub fn breadth_first(&self, start: &V) -> GraphResult<BreadthFirst<'_, V>, V> {
        let start = self.index_of(start)?;
        Ok(BreadthFirst {
            graph: self,
            visited: self.visited_from(start),
            queue: VecDeque::from([start]),
        })
    }

    fn visited_from(&self, start: usize) -> Vec<bool> {
        let mut visited = vec![false; self.vertex_count()];
        visited[start] = true;
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use std::collections::HashSet;

    fn sample_graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for v in ["A", "B", "C", "D", "E", "F"] {
            graph.add_vertex(v).unwrap();
        }
        for (u, v) in [
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("C", "E"),
            ("D", "E"),
            ("D", "F"),
            ("E", "F"),
        ] {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    /// Reference recursive preorder used to check the explicit-stack version.
    fn recursive_preorder(graph: &Graph<&'static str>, start: &'static str) -> Vec<&'static str> {
        fn visit(
            graph: &Graph<&'static str>,
            vertex: &'static str,
            seen: &mut HashSet<&'static str>,
            out: &mut Vec<&'static str>,
        ) {
            seen.insert(vertex);
            out.push(vertex);
            let neighbors: Vec<&'static str> = graph.neighbors(&vertex).unwrap().copied().collect();
            for next in neighbors {
                if !seen.contains(next) {
                    visit(graph, next, seen, out);
                }
            }
        }

        let mut out = Vec::new();
        visit(graph, start, &mut HashSet::new(), &mut out);
        out
    }

    #[test]
    fn test_depth_first_preorder() {
        let graph = sample_graph();
        let order: Vec<&str> = graph.depth_first(&"A").unwrap().copied().collect();
        assert_eq!(order, vec!["A", "B", "D", "E", "C", "F"]);
    }

    #[test]
    fn test_depth_first_matches_recursive_formulation() {
        let graph = sample_graph();
        for start in ["A", "C", "F"] {
            let order: Vec<&str> = graph.depth_first(&start).unwrap().copied().collect();
            assert_eq!(order, recursive_preorder(&graph, start), "start {start}");
        }
    }

    #[test]
    fn test_depth_first_by_stack() {
        let graph = sample_graph();
        let order: Vec<&str> = graph.depth_first_by_stack(&"A").unwrap().copied().collect();
        assert_eq!(order, vec!["A", "C", "E", "F", "D", "B"]);
    }

    #[test]
    fn test_breadth_first() {
        let graph = sample_graph();
        let order: Vec<&str> = graph.breadth_first(&"A").unwrap().copied().collect();
        assert_eq!(order, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_traversals_stay_in_component() {
        let mut graph = sample_graph();
        graph.add_vertex("X").unwrap();
        graph.add_vertex("Y").unwrap();
        graph.add_edge("X", "Y").unwrap();

        let dfs: HashSet<&str> = graph.depth_first(&"A").unwrap().copied().collect();
        let stack: HashSet<&str> = graph.depth_first_by_stack(&"A").unwrap().copied().collect();
        let bfs: Vec<&str> = graph.breadth_first(&"X").unwrap().copied().collect();

        assert_eq!(dfs.len(), 6);
        assert_eq!(dfs, stack);
        assert!(!dfs.contains("X"));
        assert_eq!(bfs, vec!["X", "Y"]);
    }

    #[test]
    fn test_isolated_start() {
        let mut graph = sample_graph();
        graph.add_vertex("G").unwrap();
        let order: Vec<&str> = graph.depth_first(&"G").unwrap().copied().collect();
        assert_eq!(order, vec!["G"]);
    }

    #[test]
    fn test_self_loops_and_parallel_edges_visit_once() {
        let mut graph = sample_graph();
        graph.add_edge("A", "A").unwrap();
        graph.add_edge("A", "B").unwrap();

        let dfs: Vec<&str> = graph.depth_first(&"A").unwrap().copied().collect();
        let bfs: Vec<&str> = graph.breadth_first(&"A").unwrap().copied().collect();
        assert_eq!(dfs.len(), 6);
        assert_eq!(bfs.len(), 6);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let mut graph = Graph::with_capacity(100_000);
        for v in 0..100_000u32 {
            graph.add_vertex(v).unwrap();
        }
        for v in 1..100_000u32 {
            graph.add_edge(v - 1, v).unwrap();
        }

        let last = graph.depth_first(&0).unwrap().last();
        assert_eq!(last, Some(&99_999));
    }

    #[test]
    fn test_unknown_start() {
        let graph = sample_graph();
        assert!(matches!(
            graph.depth_first(&"Z"),
            Err(GraphError::UnknownVertex("Z"))
        ));
        assert!(graph.breadth_first(&"Z").is_err());
        assert!(graph.depth_first_by_stack(&"Z").is_err());
    }
}
