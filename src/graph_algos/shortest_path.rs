use std::cmp::Ordering;
use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashSet;

use super::PredecessorMap;
use crate::errors::RetraceError;
use crate::frontier::Queue;
use crate::graph::Graph;


/// Fewest-edges path from `source` to `destination`, inclusive.
///
/// Breadth-first exploration with predecessor bookkeeping; returns the
/// moment the destination is first discovered, which in level order is
/// already a minimal path. `Ok(None)` when the destination is unreachable
/// or absent. Routing a node to itself yields the one-node path.
pub fn shortest_path<G>(
    graph: &G,
    source: &G::Node,
    destination: &G::Node,
) -> Result<Option<Vec<G::Node>>, RetraceError>
where
    G: Graph,
{
    explore(graph, source, destination, None)
}

/// [`shortest_path`] with neighbors explored in ascending `order_by` key.
///
/// The key picks among equal-length paths; it never changes whether a path
/// exists or how long the result is.
pub fn shortest_path_by<G, K, F>(
    graph: &G,
    source: &G::Node,
    destination: &G::Node,
    order_by: F,
) -> Result<Option<Vec<G::Node>>, RetraceError>
where
    G: Graph,
    K: Ord,
    F: Fn(&G::Node) -> K,
{
    let order = |a: &G::Node, b: &G::Node| order_by(a).cmp(&order_by(b));
    explore(graph, source, destination, Some(&order))
}

fn explore<G>(
    graph: &G,
    source: &G::Node,
    destination: &G::Node,
    order: Option<&dyn Fn(&G::Node, &G::Node) -> Ordering>,
) -> Result<Option<Vec<G::Node>>, RetraceError>
where
    G: Graph,
{
    if source == destination {
        return Ok(Some(vec![source.clone()]));
    }

    let mut frontier = Queue::new();
    frontier.insert(source.clone());
    let mut visited = FxHashSet::default();
    visited.insert(source.clone());
    let mut previous = PredecessorMap::default();

    while let Ok(node) = frontier.remove_next() {
        let mut neighbors: Vec<&G::Node> =
            graph.neighbors(&node).map(|(neighbor, _)| neighbor).collect();
        if let Some(order) = order {
            neighbors.sort_by(|&a, &b| order(a, b));
        }
        for neighbor in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            previous.insert(neighbor.clone(), node.clone());
            if neighbor == destination {
                // First discovery in level order is already minimal
                let path = retrace(&previous, source, destination)?;
                debug!("shortest path {:?} -> {:?}: {} nodes", source, destination, path.len());
                return Ok(Some(path));
            }
            frontier.insert(neighbor.clone());
        }
    }

    debug!("no path {:?} -> {:?}", source, destination);
    Ok(None)
}

/// Walk a predecessor map back from `destination` to `source` and return
/// the path in source-to-destination order.
///
/// The map is trusted to be an exploration's output; on arbitrary maps the
/// walk can fail with [`RetraceError`] instead of looping or panicking.
pub fn retrace<N>(
    previous: &PredecessorMap<N>,
    source: &N,
    destination: &N,
) -> Result<Vec<N>, RetraceError>
where
    N: Eq + Hash + Clone,
{
    let mut path = Vec::new();
    let mut current = destination;

    while current != source {
        // A chain longer than the map has revisited some node
        if path.len() > previous.len() {
            return Err(RetraceError::CyclicChain);
        }
        path.push(current.clone());
        current = previous
            .get(current)
            .ok_or(RetraceError::MissingPredecessor)?;
    }

    path.push(source.clone());
    path.reverse();
    Ok(path)
}

/// Whether any path exists between the two nodes
pub fn connected<G>(graph: &G, source: &G::Node, destination: &G::Node) -> bool
where
    G: Graph,
{
    matches!(shortest_path(graph, source, destination), Ok(Some(_)))
}
