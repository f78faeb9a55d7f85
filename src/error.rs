//! Error types.
//!
//! Construction errors ([`InvalidTourError`], [`MatrixError`],
//! [`ReindexError`]) signal a defect in the caller's input and are never
//! retried. [`MoveError`] separates the normal "nothing left to move" signal
//! from aborted move attempts. [`AnnealError`] covers the only ways a search
//! run ends abnormally.

use thiserror::Error;

/// A sequence that does not describe a tour over `0..N`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTourError {
    #[error("a tour needs at least 2 nodes, got {len}")]
    TooShort { len: usize },

    #[error("node {node} is out of range for a tour of {len} nodes")]
    OutOfRange { node: usize, len: usize },

    #[error("node {node} appears more than once")]
    Duplicate { node: usize },

    #[error("node {node} is its own successor")]
    SelfLoop { node: usize },

    #[error("successors form {cycles} disjoint cycles instead of one")]
    Disconnected { cycles: usize },
}

/// Why the move generator did not produce a candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No eligible edge is left to re-wire. The optimizer treats this as a
    /// normal termination signal.
    #[error("neighborhood is empty")]
    EmptyNeighborhood,

    /// Candidate narrowing could not resolve all three edges for one pick.
    #[error("candidate propagation stalled after {rounds} rounds")]
    StalledPropagation { rounds: usize },

    #[error("gave up after {retries} consecutive aborted move attempts")]
    RetriesExhausted { retries: usize },

    /// The committed assignments broke the permutation invariant. This is a
    /// defect, not a condition to retry.
    #[error("move produced an invalid circuit: {0}")]
    InvalidCandidate(#[from] InvalidTourError),
}

/// An invalid distance matrix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cost {value} at ({from}, {to}) is negative or not finite")]
    InvalidCost { from: usize, to: usize, value: f64 },
}

/// A vehicle solution that does not fit a [`Reindexer`](crate::reindex::Reindexer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReindexError {
    #[error("solution uses {used} vehicles but only {available} are available")]
    TooManyVehicles { used: usize, available: usize },

    #[error("customer id {id} is not in 1..={max}")]
    UnknownCustomer { id: usize, max: usize },

    #[error("solution visits {visited} nodes, expected {expected}")]
    MissingCustomers { visited: usize, expected: usize },

    #[error("{count} coordinates given for {expected} customers (depot included)")]
    CoordinateCount { count: usize, expected: usize },

    #[error(transparent)]
    InvalidTour(#[from] InvalidTourError),
}

/// Abnormal termination of an annealing run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnealError {
    #[error("invalid annealing configuration: {0}")]
    InvalidConfig(String),

    #[error("initial circuit is not a single tour: {0}")]
    InvalidTour(#[from] InvalidTourError),

    #[error("objective returned {value} for the initial circuit")]
    NonFiniteCost { value: f64 },

    #[error(transparent)]
    Move(MoveError),
}
