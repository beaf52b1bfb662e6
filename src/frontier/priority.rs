use std::hash::Hash;

use indexmap::map::Entry::{Occupied, Vacant};

use crate::collections::FxIndexMap;
use crate::distance::Distance;
use crate::errors::EmptyError;
use crate::frontier::Frontier;


/// A slot's position when its node is not currently queued
const NOT_QUEUED: usize = usize::MAX;

/// Min-priority frontier with in-place priority updates.
///
/// Nodes are interned once and keep their priority even after removal, so
/// `get_priority` on a settled node still answers and a removed node can be
/// re-queued later. Internally a binary heap of entry indices plus a
/// node-to-position side table, which makes `set_priority` O(log n) instead
/// of a rescan or rebuild.
///
/// Equal priorities leave the queue in first-insertion order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<N, C> {
    // Interned nodes; the entry index doubles as the tie-break rank
    entries: FxIndexMap<N, Slot<C>>,
    // Binary heap of entry indices, cheapest at the root
    heap: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Slot<C> {
    priority: Distance<C>,
    position: usize,
}

impl<N, C> PriorityQueue<N, C>
where
    N: Eq + Hash + Clone,
    C: Ord + Copy,
{
    pub fn new() -> Self {
        PriorityQueue {
            entries: FxIndexMap::default(),
            heap: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            entries: FxIndexMap::with_capacity_and_hasher(capacity, Default::default()),
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Queue a node, or update its priority in place.
    ///
    /// A node that was removed earlier re-enters the heap; its previous
    /// priority is overwritten. Accepts a bare cost (`Finite`) or a
    /// [`Distance`].
    pub fn set_priority(&mut self, node: N, priority: impl Into<Distance<C>>) {
        let priority = priority.into();
        let (index, queued_at) = match self.entries.entry(node) {
            Occupied(mut occupied) => {
                let index = occupied.index();
                let slot = occupied.get_mut();
                let queued_at = (slot.position != NOT_QUEUED).then_some(slot.priority);
                slot.priority = priority;
                (index, queued_at)
            }
            Vacant(vacant) => {
                let index = vacant.index();
                vacant.insert(Slot { priority, position: NOT_QUEUED });
                (index, None)
            }
        };

        match queued_at {
            None => {
                let position = self.heap.len();
                self.heap.push(index);
                self.slot_mut(index).position = position;
                self.sift_up(position);
            }
            Some(previous) => {
                let position = self.slot(index).position;
                if priority < previous {
                    self.sift_up(position);
                } else if previous < priority {
                    self.sift_down(position);
                }
            }
        }
    }

    /// The node's current priority, `Infinite` if it was never set.
    ///
    /// Removal does not reset this, so the last set priority of a settled
    /// node remains readable.
    pub fn get_priority(&self, node: &N) -> Distance<C> {
        self.entries
            .get(node)
            .map_or(Distance::Infinite, |slot| slot.priority)
    }

    /// True while the node is queued; false before insertion and after
    /// removal.
    pub fn contains(&self, node: &N) -> bool {
        self.entries
            .get(node)
            .is_some_and(|slot| slot.position != NOT_QUEUED)
    }

    /// Remove and return the cheapest node.
    pub fn remove_next(&mut self) -> Result<N, EmptyError> {
        if self.heap.is_empty() {
            return Err(EmptyError);
        }
        let index = self.heap.swap_remove(0);
        self.slot_mut(index).position = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.reindex(0);
            self.sift_down(0);
        }
        // Heap indices always point at interned entries
        let (node, _) = self.entries.get_index(index).unwrap();
        Ok(node.clone())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn slot(&self, index: usize) -> &Slot<C> {
        self.entries.get_index(index).unwrap().1
    }

    fn slot_mut(&mut self, index: usize) -> &mut Slot<C> {
        self.entries.get_index_mut(index).unwrap().1
    }

    /// Heap order: priority first, entry index (first insertion) on ties
    fn ranks_before(&self, a: usize, b: usize) -> bool {
        (self.slot(a).priority, a) < (self.slot(b).priority, b)
    }

    /// Record where in the heap the entry at `position` now sits
    fn reindex(&mut self, position: usize) {
        let index = self.heap[position];
        self.slot_mut(index).position = position;
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.ranks_before(self.heap[position], self.heap[parent]) {
                break;
            }
            self.heap.swap(position, parent);
            self.reindex(position);
            self.reindex(parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;
            if left < self.heap.len() && self.ranks_before(self.heap[left], self.heap[smallest]) {
                smallest = left;
            }
            if right < self.heap.len() && self.ranks_before(self.heap[right], self.heap[smallest]) {
                smallest = right;
            }
            if smallest == position {
                break;
            }
            self.heap.swap(position, smallest);
            self.reindex(position);
            self.reindex(smallest);
            position = smallest;
        }
    }
}

impl<N, C> Default for PriorityQueue<N, C>
where
    N: Eq + Hash + Clone,
    C: Ord + Copy,
{
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<N, C> Frontier<N> for PriorityQueue<N, C>
where
    N: Eq + Hash + Clone,
    C: Ord + Copy,
{
    /// Queues the node at `Infinite`; a node already queued keeps its
    /// priority.
    fn insert(&mut self, node: N) {
        if !self.contains(&node) {
            self.set_priority(node, Distance::Infinite);
        }
    }

    fn remove_next(&mut self) -> Result<N, EmptyError> {
        PriorityQueue::remove_next(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
}

/// Drains in ascending priority order
impl<N, C> IntoIterator for PriorityQueue<N, C>
where
    N: Eq + Hash + Clone,
    C: Ord + Copy,
{
    type Item = N;
    type IntoIter = IntoIter<N, C>;

    fn into_iter(self) -> IntoIter<N, C> {
        IntoIter { queue: self }
    }
}

pub struct IntoIter<N, C> {
    queue: PriorityQueue<N, C>,
}

impl<N, C> Iterator for IntoIter<N, C>
where
    N: Eq + Hash + Clone,
    C: Ord + Copy,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.queue.remove_next().ok()
    }
}
