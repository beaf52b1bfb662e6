use std::iter::Rev;

use crate::errors::EmptyError;
use crate::frontier::Frontier;


/// Last-in first-out frontier
#[derive(Debug, Clone)]
pub struct Stack<N> {
    elements: Vec<N>,
}

impl<N> Stack<N> {
    pub fn new() -> Self {
        Stack { elements: Vec::new() }
    }

    /// Push a node on top
    pub fn insert(&mut self, node: N) {
        self.elements.push(node);
    }

    /// Remove the most recently inserted node
    pub fn remove_next(&mut self) -> Result<N, EmptyError> {
        self.elements.pop().ok_or(EmptyError)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<N> Default for Stack<N> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<N> Frontier<N> for Stack<N> {
    fn insert(&mut self, node: N) {
        Stack::insert(self, node);
    }

    fn remove_next(&mut self) -> Result<N, EmptyError> {
        Stack::remove_next(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }
}

/// Drains newest-first, matching `remove_next`
impl<N> IntoIterator for Stack<N> {
    type Item = N;
    type IntoIter = Rev<std::vec::IntoIter<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter().rev()
    }
}
