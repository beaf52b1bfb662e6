use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::errors::EmptyError;
use crate::frontier::Frontier;


/// First-in first-out frontier
#[derive(Debug, Clone)]
pub struct Queue<N> {
    elements: VecDeque<N>,
}

impl<N> Queue<N> {
    pub fn new() -> Self {
        Queue { elements: VecDeque::new() }
    }

    /// Append a node at the back
    pub fn insert(&mut self, node: N) {
        self.elements.push_back(node);
    }

    /// Remove the node that has waited longest
    pub fn remove_next(&mut self) -> Result<N, EmptyError> {
        self.elements.pop_front().ok_or(EmptyError)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<N> Default for Queue<N> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<N> Frontier<N> for Queue<N> {
    fn insert(&mut self, node: N) {
        Queue::insert(self, node);
    }

    fn remove_next(&mut self) -> Result<N, EmptyError> {
        Queue::remove_next(self)
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }
}

/// Draining consumes the queue, so a partially drained queue is never
/// observable afterwards
impl<N> IntoIterator for Queue<N> {
    type Item = N;
    type IntoIter = vec_deque::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
