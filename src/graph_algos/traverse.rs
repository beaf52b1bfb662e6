use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use crate::frontier::{Frontier, Queue, Stack};
use crate::graph::Graph;


type NeighborOrder<'g, N> = Box<dyn Fn(&N, &N) -> Ordering + 'g>;

/// When the visited check happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitPolicy {
    /// Mark nodes as they are queued; nothing enters the frontier twice
    OnInsertion,
    /// Mark nodes as they are removed; a node may sit in the frontier more
    /// than once before its first removal
    OnRemoval,
}

/// Lazy traversal of the component reachable from a source node.
///
/// Yields each reachable node exactly once and can be abandoned at any
/// point. The frontier type decides the order: [`BreadthFirst`] uses a
/// [`Queue`], [`DepthFirst`] a [`Stack`]. Construct through the
/// `*_traverse` functions.
pub struct Traverse<'g, G: Graph, F> {
    graph: &'g G,
    frontier: F,
    visited: FxHashSet<G::Node>,
    order: Option<NeighborOrder<'g, G::Node>>,
    policy: VisitPolicy,
}

/// Queue-driven traversal in non-decreasing edge distance from the source
pub type BreadthFirst<'g, G> = Traverse<'g, G, Queue<<G as Graph>::Node>>;

/// Stack-driven traversal that exhausts one branch before the next
pub type DepthFirst<'g, G> = Traverse<'g, G, Stack<<G as Graph>::Node>>;

/// Visit `source`'s component breadth-first, in the graph's own neighbor
/// order.
pub fn breadth_first_traverse<'g, G>(graph: &'g G, source: &G::Node) -> BreadthFirst<'g, G>
where
    G: Graph,
{
    let mut frontier = Queue::new();
    frontier.insert(source.clone());
    let mut visited = FxHashSet::default();
    visited.insert(source.clone());
    Traverse {
        graph,
        frontier,
        visited,
        order: None,
        policy: VisitPolicy::OnInsertion,
    }
}

/// Breadth-first with neighbors expanded in ascending `order_by` key,
/// for output that does not depend on graph construction order.
pub fn breadth_first_traverse_by<'g, G, K, F>(
    graph: &'g G,
    source: &G::Node,
    order_by: F,
) -> BreadthFirst<'g, G>
where
    G: Graph,
    K: Ord,
    F: Fn(&G::Node) -> K + 'g,
{
    let mut traversal = breadth_first_traverse(graph, source);
    traversal.order = Some(Box::new(move |a: &G::Node, b: &G::Node| {
        order_by(a).cmp(&order_by(b))
    }));
    traversal
}

/// Visit `source`'s component depth-first, in the graph's own neighbor
/// order.
pub fn depth_first_traverse<'g, G>(graph: &'g G, source: &G::Node) -> DepthFirst<'g, G>
where
    G: Graph,
{
    let mut frontier = Stack::new();
    frontier.insert(source.clone());
    Traverse {
        graph,
        frontier,
        visited: FxHashSet::default(),
        order: None,
        policy: VisitPolicy::OnRemoval,
    }
}

/// Depth-first with neighbors expanded in ascending `order_by` key.
pub fn depth_first_traverse_by<'g, G, K, F>(
    graph: &'g G,
    source: &G::Node,
    order_by: F,
) -> DepthFirst<'g, G>
where
    G: Graph,
    K: Ord,
    F: Fn(&G::Node) -> K + 'g,
{
    let mut traversal = depth_first_traverse(graph, source);
    traversal.order = Some(Box::new(move |a: &G::Node, b: &G::Node| {
        order_by(a).cmp(&order_by(b))
    }));
    traversal
}

impl<'g, G, F> Traverse<'g, G, F>
where
    G: Graph,
    F: Frontier<G::Node>,
{
    /// Queue `node`'s neighbors per the visit policy
    fn expand(&mut self, node: &G::Node) {
        let graph = self.graph;
        let mut neighbors: Vec<&G::Node> =
            graph.neighbors(node).map(|(neighbor, _)| neighbor).collect();
        if let Some(order) = &self.order {
            neighbors.sort_by(|&a, &b| order(a, b));
        }
        match self.policy {
            VisitPolicy::OnInsertion => {
                for neighbor in neighbors {
                    if !self.visited.contains(neighbor) {
                        self.visited.insert(neighbor.clone());
                        self.frontier.insert(neighbor.clone());
                    }
                }
            }
            VisitPolicy::OnRemoval => {
                // Reversed so the first neighbor in order comes off the
                // stack first, matching a recursive walk
                for neighbor in neighbors.into_iter().rev() {
                    if !self.visited.contains(neighbor) {
                        self.frontier.insert(neighbor.clone());
                    }
                }
            }
        }
    }
}

impl<'g, G, F> Iterator for Traverse<'g, G, F>
where
    G: Graph,
    F: Frontier<G::Node>,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<G::Node> {
        loop {
            let node = self.frontier.remove_next().ok()?;
            if self.policy == VisitPolicy::OnRemoval {
                if self.visited.contains(&node) {
                    continue;
                }
                self.visited.insert(node.clone());
            }
            self.expand(&node);
            return Some(node);
        }
    }
}

/// Depth-first by actual recursion, same visitation order as
/// [`depth_first_traverse`].
///
/// The order is materialized up front. Recursion depth grows with the
/// longest explored path, so prefer the iterative form on deep graphs.
pub fn recursive_depth_first_traverse<G>(graph: &G, source: &G::Node) -> Vec<G::Node>
where
    G: Graph,
{
    let mut visited = FxHashSet::default();
    let mut out = Vec::new();
    visit(graph, source, None, &mut visited, &mut out);
    out
}

/// Recursive depth-first with neighbors visited in ascending `order_by`
/// key.
pub fn recursive_depth_first_traverse_by<G, K, F>(
    graph: &G,
    source: &G::Node,
    order_by: F,
) -> Vec<G::Node>
where
    G: Graph,
    K: Ord,
    F: Fn(&G::Node) -> K,
{
    let order = |a: &G::Node, b: &G::Node| order_by(a).cmp(&order_by(b));
    let mut visited = FxHashSet::default();
    let mut out = Vec::new();
    visit(graph, source, Some(&order), &mut visited, &mut out);
    out
}

fn visit<G>(
    graph: &G,
    node: &G::Node,
    order: Option<&dyn Fn(&G::Node, &G::Node) -> Ordering>,
    visited: &mut FxHashSet<G::Node>,
    out: &mut Vec<G::Node>,
) where
    G: Graph,
{
    visited.insert(node.clone());
    out.push(node.clone());
    let mut neighbors: Vec<&G::Node> =
        graph.neighbors(node).map(|(neighbor, _)| neighbor).collect();
    if let Some(order) = order {
        neighbors.sort_by(|&a, &b| order(a, b));
    }
    for neighbor in neighbors {
        if !visited.contains(neighbor) {
            visit(graph, neighbor, order, visited, out);
        }
    }
}
