use std::cmp::Ordering;
use std::ops::Add;

use num_traits::Zero;


/// Tentative distance to a node
/// - the priority domain of the priority frontier and of Dijkstra
/// - `Infinite` stands in for "never reached", so no sentinel cost value
///   is carved out of the cost type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance<C> {
    Finite(C),
    Infinite,
}

impl<C> Distance<C> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite cost, if there is one
    pub fn finite(self) -> Option<C> {
        match self {
            Distance::Finite(cost) => Some(cost),
            Distance::Infinite => None,
        }
    }
}

impl<C: Zero> Distance<C> {
    /// Distance from a node to itself
    pub fn zero() -> Self {
        Distance::Finite(Zero::zero())
    }
}

impl<C: Ord> Ord for Distance<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Infinite) => Ordering::Less,
            (Distance::Infinite, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Infinite, Distance::Infinite) => Ordering::Equal,
        }
    }
}
impl<C: Ord> PartialOrd for Distance<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Add<Output = C>> Add for Distance<C> {
    type Output = Distance<C>;

    fn add(self, other: Distance<C>) -> Distance<C> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a + b),
            _ => Distance::Infinite,
        }
    }
}

/// Extending a known distance by one edge cost
impl<C: Add<Output = C>> Add<C> for Distance<C> {
    type Output = Distance<C>;

    fn add(self, cost: C) -> Distance<C> {
        match self {
            Distance::Finite(distance) => Distance::Finite(distance + cost),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl<C> From<C> for Distance<C> {
    fn from(cost: C) -> Self {
        Distance::Finite(cost)
    }
}
