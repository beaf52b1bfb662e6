//! Frontier containers for graph traversal.
//!
//! A frontier holds the nodes that have been discovered but not yet
//! processed. Which container backs it decides the traversal order:
//! [`Queue`] removes in insertion order (breadth-first), [`Stack`] removes
//! newest-first (depth-first), [`PriorityQueue`] removes cheapest-first
//! (Dijkstra). All three drain destructively through `IntoIterator`.

mod priority;
mod queue;
mod stack;

pub use priority::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;

use crate::errors::EmptyError;


/// Capability shared by the frontier containers.
///
/// Removal order is the implementor's choice; `insert` followed by
/// `remove_next` until [`EmptyError`] visits every inserted node exactly
/// once per insertion.
pub trait Frontier<N> {
    /// Add a node to the frontier.
    fn insert(&mut self, node: N);

    /// Remove the next node under this container's discipline.
    fn remove_next(&mut self) -> Result<N, EmptyError>;

    /// Number of nodes currently queued.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
