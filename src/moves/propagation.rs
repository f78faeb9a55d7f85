//! Candidate narrowing for simultaneous edge changes.
//!
//! Each re-wired edge keeps a set of legal new targets. Narrowing is a
//! bounded fixed-point loop:
//!
//! 1. Fail if any set is empty.
//! 2. Succeed once every set is a singleton and the chosen targets differ.
//! 3. Remove every singleton's value from the other sets.
//! 4. If that removed nothing, commit a random candidate for the first
//!    unresolved edge.
//!
//! The loop runs at most `max_rounds` times and reports
//! [`MoveError::StalledPropagation`] when it cannot resolve in time.

use rand::Rng;

use crate::error::MoveError;

/// Legal new targets for the edge leaving `origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EdgeCandidates {
    pub origin: usize,
    pub targets: Vec<usize>,
}

impl EdgeCandidates {
    pub fn new(origin: usize, targets: Vec<usize>) -> Self {
        Self { origin, targets }
    }

    fn resolved(&self) -> Option<usize> {
        match self.targets.as_slice() {
            [target] => Some(*target),
            _ => None,
        }
    }
}

/// Narrows `edges` until each holds one target, returning the
/// `(origin, target)` assignments in input order.
pub(crate) fn propagate<R: Rng>(
    edges: &mut [EdgeCandidates],
    max_rounds: usize,
    rng: &mut R,
) -> Result<Vec<(usize, usize)>, MoveError> {
    let mut rounds = 0;

    loop {
        if edges.iter().any(|e| e.targets.is_empty()) {
            return Err(MoveError::StalledPropagation { rounds });
        }

        let resolved: Option<Vec<usize>> = edges.iter().map(EdgeCandidates::resolved).collect();
        if let Some(targets) = resolved {
            if crate::tour::all_different(&targets) {
                return Ok(edges.iter().map(|e| e.origin).zip(targets).collect());
            }
        }

        if rounds == max_rounds {
            return Err(MoveError::StalledPropagation { rounds });
        }
        rounds += 1;

        if !narrow(edges) {
            branch(edges, rng);
        }
    }
}

/// Removes each singleton's value from every other edge. Returns whether
/// anything was removed.
fn narrow(edges: &mut [EdgeCandidates]) -> bool {
    let mut progressed = false;
    for i in 0..edges.len() {
        let Some(taken) = edges[i].resolved() else {
            continue;
        };
        for (j, other) in edges.iter_mut().enumerate() {
            if j == i {
                continue;
            }
            let before = other.targets.len();
            other.targets.retain(|&t| t != taken);
            progressed |= other.targets.len() != before;
        }
    }
    progressed
}

/// Commits a random candidate for the first edge with more than one left.
fn branch<R: Rng>(edges: &mut [EdgeCandidates], rng: &mut R) {
    if let Some(edge) = edges.iter_mut().find(|e| e.targets.len() > 1) {
        let pick = edge.targets[rng.random_range(0..edge.targets.len())];
        edge.targets = vec![pick];
    }
}
