use crate::graph::Graph;
use crate::graph_algos::traverse::{
    breadth_first_traverse, breadth_first_traverse_by, depth_first_traverse,
    depth_first_traverse_by,
};


/// Find the first node satisfying `predicate` under a caller-chosen
/// traversal.
///
/// `traverse` is any function producing a visitation sequence from a graph
/// and source, typically [`breadth_first_traverse`] or
/// [`depth_first_traverse`]. The sequence is consumed lazily and abandoned
/// at the first match, so unexplored parts of the graph are never touched.
pub fn search<'g, G, T, I, P>(
    traverse: T,
    graph: &'g G,
    source: &'g G::Node,
    predicate: P,
) -> Option<G::Node>
where
    G: Graph,
    T: FnOnce(&'g G, &'g G::Node) -> I,
    I: IntoIterator<Item = G::Node>,
    P: Fn(&G::Node) -> bool,
{
    traverse(graph, source)
        .into_iter()
        .find(|node| predicate(node))
}

/// First match in breadth-first order: the closest match by edge count
pub fn breadth_first_search<G, P>(graph: &G, source: &G::Node, predicate: P) -> Option<G::Node>
where
    G: Graph,
    P: Fn(&G::Node) -> bool,
{
    search(breadth_first_traverse, graph, source, predicate)
}

/// Breadth-first search with neighbors explored in ascending `order_by`
/// key, making ties at the same depth deterministic
pub fn breadth_first_search_by<'g, G, P, K, F>(
    graph: &'g G,
    source: &'g G::Node,
    predicate: P,
    order_by: F,
) -> Option<G::Node>
where
    G: Graph,
    P: Fn(&G::Node) -> bool,
    K: Ord,
    F: Fn(&G::Node) -> K + 'g,
{
    search(
        |graph, source| breadth_first_traverse_by(graph, source, order_by),
        graph,
        source,
        predicate,
    )
}

/// First match in depth-first order
pub fn depth_first_search<G, P>(graph: &G, source: &G::Node, predicate: P) -> Option<G::Node>
where
    G: Graph,
    P: Fn(&G::Node) -> bool,
{
    search(depth_first_traverse, graph, source, predicate)
}

/// Depth-first search with neighbors explored in ascending `order_by` key
pub fn depth_first_search_by<'g, G, P, K, F>(
    graph: &'g G,
    source: &'g G::Node,
    predicate: P,
    order_by: F,
) -> Option<G::Node>
where
    G: Graph,
    P: Fn(&G::Node) -> bool,
    K: Ord,
    F: Fn(&G::Node) -> K + 'g,
{
    search(
        |graph, source| depth_first_traverse_by(graph, source, order_by),
        graph,
        source,
        predicate,
    )
}
