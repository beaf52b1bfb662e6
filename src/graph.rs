use std::fmt::Debug;
use std::hash::Hash;

use crate::collections::FxIndexMap;


/// Read-only view of an undirected weighted graph.
///
/// The traversal and shortest-path functions only ever read through this
/// trait, so any storage that can enumerate its nodes and the weighted
/// neighbors of a node can be routed over. `neighbors` must be repeatable:
/// asking twice about the same node yields the same sequence.
pub trait Graph {
    /// Hashable caller value identifying a node; identity must be stable
    /// while a traversal runs.
    type Node: Eq + Hash + Clone + Debug;

    /// Open per-edge payload; algorithms project it to a cost through a
    /// caller-supplied weight function.
    type Weights;

    /// All nodes, in a stable order.
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// The weighted neighbors of `node`; empty for unknown nodes.
    fn neighbors(&self, node: &Self::Node) -> impl Iterator<Item = (&Self::Node, &Self::Weights)>;

    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn contains(&self, node: &Self::Node) -> bool {
        self.nodes().any(|known| known == node)
    }
}

/// In-memory undirected multigraph backed by insertion-ordered adjacency
/// lists.
///
/// Both endpoints of an edge list each other with the same weights payload.
/// Parallel edges are kept as-is; a self-loop appears once in its node's
/// list. Insertion order of nodes and edges is preserved, which keeps
/// traversal output deterministic without an order function.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W> {
    adjacency: FxIndexMap<N, Vec<(N, W)>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Clone,
{
    pub fn new() -> Self {
        AdjacencyGraph { adjacency: FxIndexMap::default() }
    }

    /// Add an isolated node; a no-op if the node already exists
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// The weights payload is recorded on both endpoints. Calling this
    /// again for the same pair adds a parallel edge.
    pub fn add_edge(&mut self, a: N, b: N, weights: W) {
        if a == b {
            self.adjacency.entry(a).or_default().push((b, weights));
            return;
        }
        self.adjacency
            .entry(a.clone())
            .or_default()
            .push((b.clone(), weights.clone()));
        self.adjacency.entry(b).or_default().push((a, weights));
    }

    pub fn from_edges(edges: impl IntoIterator<Item = (N, N, W)>) -> Self {
        let mut graph = AdjacencyGraph::new();
        for (a, b, weights) in edges {
            graph.add_edge(a, b, weights);
        }
        graph
    }
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Clone,
{
    fn default() -> Self {
        AdjacencyGraph::new()
    }
}

impl<N, W> Graph for AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
{
    type Node = N;
    type Weights = W;

    fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    fn neighbors(&self, node: &N) -> impl Iterator<Item = (&N, &W)> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(|(neighbor, weights)| (neighbor, weights))
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("a", "b", 7);

        let from_a: Vec<_> = graph.neighbors(&"a").map(|(n, w)| (*n, *w)).collect();
        let from_b: Vec<_> = graph.neighbors(&"b").map(|(n, w)| (*n, *w)).collect();
        assert_eq!(from_a, vec![("b", 7)]);
        assert_eq!(from_b, vec![("a", 7)]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("a", "b", 1);
        graph.add_edge("a", "b", 4);

        let from_a: Vec<_> = graph.neighbors(&"a").map(|(n, w)| (*n, *w)).collect();
        assert_eq!(from_a, vec![("b", 1), ("b", 4)]);
        assert_eq!(graph.neighbors(&"b").count(), 2);
    }

    #[test]
    fn self_loops_are_listed_once() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("a", "a", 3);

        let from_a: Vec<_> = graph.neighbors(&"a").map(|(n, w)| (*n, *w)).collect();
        assert_eq!(from_a, vec![("a", 3)]);
    }

    #[test]
    fn nodes_keep_insertion_order() {
        let mut graph = AdjacencyGraph::new();
        graph.add_node("x");
        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "c", 1);

        let nodes: Vec<_> = graph.nodes().copied().collect();
        assert_eq!(nodes, vec!["x", "a", "b", "c"]);
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn add_node_keeps_existing_edges() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("a", "b", 1);
        graph.add_node("a");

        assert_eq!(graph.neighbors(&"a").count(), 1);
    }

    #[test]
    fn unknown_nodes_have_no_neighbors() {
        let graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
        assert_eq!(graph.neighbors(&"ghost").count(), 0);
        assert!(!graph.contains(&"ghost"));
    }

    #[test]
    fn neighbor_iteration_is_repeatable() {
        let graph = AdjacencyGraph::from_edges([("a", "b", 1), ("a", "c", 2)]);

        let first: Vec<_> = graph.neighbors(&"a").map(|(n, _)| *n).collect();
        let second: Vec<_> = graph.neighbors(&"a").map(|(n, _)| *n).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["b", "c"]);
    }

    #[test]
    fn weights_payload_is_caller_defined() {
        #[derive(Debug, Clone, PartialEq)]
        struct Road {
            distance: u32,
            minutes: u32,
        }

        let mut graph = AdjacencyGraph::new();
        graph.add_edge("home", "office", Road { distance: 12, minutes: 25 });

        let (_, road) = graph.neighbors(&"home").next().unwrap();
        assert_eq!(road, &Road { distance: 12, minutes: 25 });
    }
}
