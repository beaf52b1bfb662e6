pub mod dijkstra;
pub mod search;
mod shortest_path;
pub mod traverse;

pub use dijkstra::dijkstra_shortest_path;
pub use search::{
    breadth_first_search, breadth_first_search_by, depth_first_search, depth_first_search_by,
    search,
};
pub use shortest_path::{connected, retrace, shortest_path, shortest_path_by};
pub use traverse::{
    breadth_first_traverse, breadth_first_traverse_by, depth_first_traverse,
    depth_first_traverse_by, recursive_depth_first_traverse, recursive_depth_first_traverse_by,
    BreadthFirst, DepthFirst, Traverse,
};

use rustc_hash::FxHashMap;

/// Node to the node it was first reached from
/// - filled in while a shortest-path run explores the graph
/// - walked backward by [`retrace`] to rebuild the path
pub type PredecessorMap<N> = FxHashMap<N, N>;
