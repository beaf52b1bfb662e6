use thiserror::Error;


/// Removal was attempted on a frontier with nothing left in it.
///
/// The traversal drivers treat this as end of iteration, so it only
/// surfaces when a frontier is driven by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot remove from an empty frontier")]
pub struct EmptyError;

/// A predecessor map could not be walked back from destination to source.
///
/// Distinct from an unreachable destination: retracing only runs once the
/// destination was reached, so either variant means the map itself is
/// inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RetraceError {
    // Chain stops before reaching the source
    #[error("predecessor chain is missing a link before the source")]
    MissingPredecessor,
    // Chain revisits a node and can never reach the source
    #[error("predecessor chain loops back on itself")]
    CyclicChain,
}
