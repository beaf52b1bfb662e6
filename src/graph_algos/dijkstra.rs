use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Zero;
use rustc_hash::FxHashSet;

use super::shortest_path::retrace;
use super::PredecessorMap;
use crate::distance::Distance;
use crate::errors::RetraceError;
use crate::frontier::PriorityQueue;
use crate::graph::Graph;


/// Minimum-weight path using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// `weight_fn` projects each edge's weights payload to a cost, so one graph
/// can be routed by distance, travel time, or any other numeric attribute.
/// Costs must be non-negative; that is not checked, and negative costs
/// silently produce wrong paths.
///
/// Every node is seeded at `Infinite` and the source at zero; the cheapest
/// unsettled node is settled in each round and its unsettled neighbors are
/// relaxed through the frontier's decrease-key update. The run stops as
/// soon as the destination settles. `Ok(None)` when the destination is
/// unreachable or absent from the graph.
pub fn dijkstra_shortest_path<G, C, W>(
    graph: &G,
    source: &G::Node,
    destination: &G::Node,
    weight_fn: W,
) -> Result<Option<Vec<G::Node>>, RetraceError>
where
    G: Graph,
    C: Zero + Ord + Copy + Debug,
    W: Fn(&G::Weights) -> C,
{
    let mut unvisited: PriorityQueue<G::Node, C> =
        PriorityQueue::with_capacity(graph.node_count());
    for node in graph.nodes() {
        unvisited.set_priority(node.clone(), Distance::Infinite);
    }
    unvisited.set_priority(source.clone(), Distance::zero());

    let mut visited = FxHashSet::default();
    let mut previous = PredecessorMap::default();

    while let Ok(node) = unvisited.remove_next() {
        // Priorities survive removal, so this is the settled distance
        let distance = unvisited.get_priority(&node);
        visited.insert(node.clone());
        trace!("settled {:?} at {:?}", node, distance);

        if node == *destination {
            break;
        }

        for (neighbor, weights) in graph.neighbors(&node) {
            if visited.contains(neighbor) {
                continue;
            }
            let candidate = distance + weight_fn(weights);
            if candidate < unvisited.get_priority(neighbor) {
                unvisited.set_priority(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), node.clone());
            }
        }
    }

    match unvisited.get_priority(destination) {
        Distance::Finite(weight) => {
            let path = retrace(&previous, source, destination)?;
            debug!(
                "dijkstra {:?} -> {:?}: {} nodes, total weight {:?}",
                source,
                destination,
                path.len(),
                weight
            );
            Ok(Some(path))
        }
        Distance::Infinite => {
            debug!("dijkstra {:?} -> {:?}: unreachable", source, destination);
            Ok(None)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rustc_hash::FxHashMap;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // Diamond: a-b-d is heavier than a-c-d
    fn diamond() -> AdjacencyGraph<&'static str, u32> {
        AdjacencyGraph::from_edges([
            ("a", "b", 1),
            ("a", "c", 3),
            ("b", "d", 5),
            ("c", "d", 1),
        ])
    }

    #[test]
    fn picks_the_cheaper_side_of_a_diamond() {
        init_logs();
        let graph = diamond();
        let path = dijkstra_shortest_path(&graph, &"a", &"d", |w| *w)
            .unwrap()
            .unwrap();
        assert_eq!(path, vec!["a", "c", "d"]);
    }

    #[test]
    fn fewest_edges_is_not_always_lightest() {
        // Direct edge weighs 10, the detour 2+3
        let graph = AdjacencyGraph::from_edges([
            ("a", "d", 10),
            ("a", "m", 2),
            ("m", "d", 3),
        ]);
        let path = dijkstra_shortest_path(&graph, &"a", &"d", |w| *w)
            .unwrap()
            .unwrap();
        assert_eq!(path, vec!["a", "m", "d"]);
    }

    #[test]
    fn unit_weights_agree_with_edge_count() {
        let graph = AdjacencyGraph::from_edges([
            ("a", "b", 1),
            ("b", "c", 1),
            ("c", "d", 1),
            ("d", "a", 1),
        ]);
        let path = dijkstra_shortest_path(&graph, &"a", &"c", |w| *w)
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn routes_by_any_weight_attribute() {
        #[derive(Debug, Clone)]
        struct Road {
            distance: u32,
            minutes: u32,
        }

        // Short but slow versus long but fast
        let graph = AdjacencyGraph::from_edges([
            ("home", "office", Road { distance: 5, minutes: 30 }),
            ("home", "ring", Road { distance: 4, minutes: 5 }),
            ("ring", "office", Road { distance: 4, minutes: 5 }),
        ]);

        let by_distance = dijkstra_shortest_path(&graph, &"home", &"office", |r| r.distance)
            .unwrap()
            .unwrap();
        assert_eq!(by_distance, vec!["home", "office"]);

        let by_time = dijkstra_shortest_path(&graph, &"home", &"office", |r| r.minutes)
            .unwrap()
            .unwrap();
        assert_eq!(by_time, vec!["home", "ring", "office"]);
    }

    #[test]
    fn parallel_edges_use_the_lighter_one() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("a", "b", 9);
        graph.add_edge("a", "b", 2);
        graph.add_edge("b", "c", 1);

        let path = dijkstra_shortest_path(&graph, &"a", &"c", |w| *w)
            .unwrap()
            .unwrap();
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn source_equals_destination() {
        let graph = diamond();
        let path = dijkstra_shortest_path(&graph, &"a", &"a", |w| *w).unwrap();
        assert_eq!(path, Some(vec!["a"]));
    }

    #[test]
    fn unreachable_and_unknown_destinations_are_absent() {
        init_logs();
        let graph = AdjacencyGraph::from_edges([("a", "b", 1), ("c", "d", 1)]);

        assert_eq!(dijkstra_shortest_path(&graph, &"a", &"d", |w| *w), Ok(None));
        assert_eq!(
            dijkstra_shortest_path(&graph, &"a", &"ghost", |w| *w),
            Ok(None)
        );
    }

    #[test]
    fn equal_cost_paths_resolve_deterministically() {
        // Two weight-2 routes around a cycle; the first-settled side wins
        let graph = AdjacencyGraph::from_edges([
            ("a", "b", 1),
            ("b", "c", 1),
            ("c", "d", 1),
            ("d", "a", 1),
        ]);

        let first = dijkstra_shortest_path(&graph, &"a", &"c", |w| *w).unwrap();
        let second = dijkstra_shortest_path(&graph, &"a", &"c", |w| *w).unwrap();
        assert_eq!(first, Some(vec!["a", "b", "c"]));
        assert_eq!(first, second);
    }

    /// Reference distances by Bellman-Ford relaxation sweeps
    fn bellman_ford(
        graph: &AdjacencyGraph<u32, u32>,
        source: u32,
    ) -> FxHashMap<u32, u64> {
        let mut distances: FxHashMap<u32, u64> = FxHashMap::default();
        distances.insert(source, 0);
        for _ in 0..graph.node_count() {
            let mut changed = false;
            let nodes: Vec<u32> = graph.nodes().copied().collect();
            for node in nodes {
                let Some(&from) = distances.get(&node) else {
                    continue;
                };
                for (&neighbor, &weight) in graph.neighbors(&node) {
                    let candidate = from + u64::from(weight);
                    if distances.get(&neighbor).is_none_or(|&d| candidate < d) {
                        distances.insert(neighbor, candidate);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        distances
    }

    fn path_weight(graph: &AdjacencyGraph<u32, u32>, path: &[u32]) -> u64 {
        path.windows(2)
            .map(|pair| {
                graph
                    .neighbors(&pair[0])
                    .filter(|(n, _)| **n == pair[1])
                    .map(|(_, &w)| u64::from(w))
                    .min()
                    .expect("path uses a missing edge")
            })
            .sum()
    }

    proptest! {
        #[test]
        fn total_weight_matches_bellman_ford(
            edges in proptest::collection::vec((0..9u32, 0..9u32, 1..50u32), 0..20),
            destination in 0..9u32,
        ) {
            let mut graph = AdjacencyGraph::new();
            graph.add_node(0);
            graph.add_node(destination);
            for (a, b, w) in edges {
                graph.add_edge(a, b, w);
            }

            let reference = bellman_ford(&graph, 0);
            let path = dijkstra_shortest_path(&graph, &0, &destination, |w| *w).unwrap();

            match reference.get(&destination) {
                Some(&best) => {
                    let path = path.expect("reachable destination must produce a path");
                    prop_assert_eq!(*path.first().unwrap(), 0);
                    prop_assert_eq!(*path.last().unwrap(), destination);
                    prop_assert_eq!(path_weight(&graph, &path), best);
                }
                None => prop_assert!(path.is_none()),
            }
        }
    }

    #[test]
    fn agrees_with_bellman_ford_on_a_larger_graph() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut graph: AdjacencyGraph<u32, u32> = AdjacencyGraph::new();
        for node in 0..200 {
            graph.add_node(node);
        }
        for _ in 0..600 {
            let a = rng.random_range(0..200);
            let b = rng.random_range(0..200);
            let w = rng.random_range(1..100);
            graph.add_edge(a, b, w);
        }

        let reference = bellman_ford(&graph, 0);
        for destination in [1, 57, 133, 199] {
            let path = dijkstra_shortest_path(&graph, &0, &destination, |w| *w).unwrap();
            match reference.get(&destination) {
                Some(&best) => {
                    let path = path.expect("reachable destination must produce a path");
                    assert_eq!(path_weight(&graph, &path), best);
                }
                None => assert!(path.is_none()),
            }
        }
    }
}
