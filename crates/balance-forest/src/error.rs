//! Typed errors for the recoverable and diagnosable failure modes.
//!
//! Duplicate inserts and absent erase targets are reported as `bool`
//! returns, never as errors. Precondition violations (rotating a missing
//! child, walking a corrupt count) panic: they indicate a defect, not a
//! runtime condition to recover from.

use thiserror::Error;

/// Rejected interval construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// The low endpoint exceeds the high endpoint.
    #[error("interval endpoints are inverted (lo > hi)")]
    Inverted,
}

/// Out-of-range order-statistics query.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    #[error("select rank {rank} out of range for tree of size {len}")]
    OutOfRange { rank: usize, len: usize },
}

/// A structural or strategy invariant breach detected by `validate()`.
///
/// `validate()` recomputes everything from scratch; a failure here means the
/// rebalancing logic has a bug, so these errors carry the offending node
/// index for debugging rather than suggesting recovery.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidateError {
    #[error("root node {0} has a parent link")]
    RootHasParent(u32),
    #[error("broken parent link on a child of node {0}")]
    BrokenParentLink(u32),
    #[error("keys out of order at node {0}")]
    OrderViolation(u32),
    #[error("duplicate key at node {0}")]
    DuplicateKey(u32),
    #[error("subtree count mismatch at node {node}: stored {stored}, actual {actual}")]
    CountMismatch {
        node: u32,
        stored: usize,
        actual: usize,
    },
    #[error("stored height mismatch at node {node}: stored {stored}, actual {actual}")]
    HeightMismatch { node: u32, stored: i32, actual: i32 },
    #[error("AVL balance violated at node {node}: balance factor {balance}")]
    Imbalance { node: u32, balance: i32 },
    #[error("root node {0} is red")]
    RedRoot(u32),
    #[error("red node {0} has a red child")]
    RedRedViolation(u32),
    #[error("black-height mismatch under node {0}")]
    BlackHeightMismatch(u32),
    #[error("heap order violated: node {node} has a larger-priority child {child}")]
    HeapOrderViolation { node: u32, child: u32 },
    #[error("subtree max mismatch at node {0}")]
    SubtreeMaxMismatch(u32),
}
