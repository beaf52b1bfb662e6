//! Graph traversal and shortest path modules.
//!
//! Three frontier containers with different removal orders drive every
//! algorithm here: a FIFO [`Queue`] for breadth-first work, a LIFO
//! [`Stack`] for depth-first work, and a decrease-key [`PriorityQueue`]
//! for Dijkstra. On top of them sit lazy traversal iterators, predicate
//! search, fewest-edges shortest paths, and weighted shortest paths, all
//! generic over the read-only [`Graph`] trait.
//!
//! ```
//! use roam::{AdjacencyGraph, shortest_path};
//!
//! let graph = AdjacencyGraph::from_edges([
//!     ("aberdeen", "dundee", 108),
//!     ("dundee", "edinburgh", 96),
//!     ("edinburgh", "glasgow", 75),
//! ]);
//!
//! let path = shortest_path(&graph, &"aberdeen", &"glasgow").unwrap();
//! assert_eq!(path, Some(vec!["aberdeen", "dundee", "edinburgh", "glasgow"]));
//! ```

mod collections;

pub mod distance;
pub mod errors;
pub mod frontier;
pub mod graph;
pub mod graph_algos;

pub use distance::Distance;
pub use errors::{EmptyError, RetraceError};
pub use frontier::{Frontier, PriorityQueue, Queue, Stack};
pub use graph::{AdjacencyGraph, Graph};
pub use graph_algos::{
    breadth_first_search, breadth_first_search_by, breadth_first_traverse,
    breadth_first_traverse_by, connected, depth_first_search, depth_first_search_by,
    depth_first_traverse, depth_first_traverse_by, dijkstra_shortest_path,
    recursive_depth_first_traverse, recursive_depth_first_traverse_by, retrace, search,
    shortest_path, shortest_path_by, BreadthFirst, DepthFirst, PredecessorMap, Traverse,
};
