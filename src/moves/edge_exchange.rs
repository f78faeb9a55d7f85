//! Three-edge exchange move.
//!
//! # Algorithm
//!
//! 1. Pick a random eligible node `c` with successor `s`; the edge `(c, s)`
//!    is broken.
//! 2. The edge leaving `s`, `(s, s')`, and the edge entering `c`, `(p, c)`,
//!    are broken with it.
//! 3. Each of the three origins `c`, `s`, `p` receives a candidate set drawn
//!    from the freed targets `{s, s', c}`, excluding its own index (no
//!    self-loop) and its old target (the edge must change). Candidate
//!    narrowing resolves the sets to three distinct targets.
//! 4. The assignments are applied to a copy of the successors.
//!
//! Because the freed targets are exactly re-distributed, the result stays a
//! permutation. For the chosen edge triple the only assignment that changes
//! all three edges is `p → s → c → s'`, which swaps the visit order of `c`
//! and `s` and keeps the tour a single cycle.
//!
//! Attempts that stall, or whose result is not one cycle, are abandoned and
//! retried with a fresh pick up to [`MoveConfig::max_consecutive_retries`]
//! times in a row.

use rand::Rng;
use tracing::{debug, warn};

use super::config::MoveConfig;
use super::neighborhood::Neighborhood;
use super::propagation::{propagate, EdgeCandidates};
use crate::error::MoveError;
use crate::tour::Circuit;

/// Number of successor entries a successful move changes.
pub const MOVE_SIZE: usize = 3;

/// A candidate circuit produced by [`EdgeExchange::propose`].
#[derive(Debug, Clone)]
pub struct Proposal {
    pub circuit: Circuit,

    /// Attempts abandoned before this one succeeded.
    pub retries: usize,
}

/// Edge-exchange move generator.
#[derive(Debug, Clone, Default)]
pub struct EdgeExchange {
    config: MoveConfig,
}

impl EdgeExchange {
    pub fn new(config: MoveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MoveConfig {
        &self.config
    }

    /// Proposes a neighbour of `circuit` that differs in exactly
    /// [`MOVE_SIZE`] successor entries and leaves every ineligible node's
    /// successor untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::EmptyNeighborhood`] when no eligible edge can be
    ///   re-wired.
    /// - [`MoveError::RetriesExhausted`] after too many abandoned attempts.
    /// - [`MoveError::InvalidCandidate`] if `circuit` is not a single cycle.
    pub fn propose<R: Rng>(
        &self,
        circuit: &Circuit,
        neighborhood: &Neighborhood,
        rng: &mut R,
    ) -> Result<Proposal, MoveError> {
        circuit.ensure_single_cycle()?;

        let predecessors = circuit.predecessors();
        let movable = movable_nodes(circuit, neighborhood, &predecessors);
        if movable.is_empty() {
            return Err(MoveError::EmptyNeighborhood);
        }

        let (candidate, retries) = self.with_retries(&movable, rng, |c, rng| {
            self.attempt(circuit, neighborhood, &predecessors, c, rng)
        })?;
        Ok(Proposal {
            circuit: candidate,
            retries,
        })
    }

    /// Runs `attempt` on freshly drawn nodes of `movable` until one succeeds.
    /// Stalled attempts count as retries, up to `max_consecutive_retries`.
    ///
    /// With the freed-target candidate sets the assignment is forced to
    /// `p → s → c → s'`, so attempts from [`EdgeExchange::propose`] resolve on
    /// the first pick; the cap bounds any attempt that does stall.
    fn with_retries<T, R: Rng>(
        &self,
        movable: &[usize],
        rng: &mut R,
        mut attempt: impl FnMut(usize, &mut R) -> Result<T, MoveError>,
    ) -> Result<(T, usize), MoveError> {
        let mut retries = 0;
        loop {
            let c = movable[rng.random_range(0..movable.len())];
            match attempt(c, rng) {
                Ok(value) => return Ok((value, retries)),
                Err(MoveError::StalledPropagation { rounds }) => {
                    retries += 1;
                    debug!(node = c, rounds, retries, "edge exchange attempt abandoned");
                    if retries >= self.config.max_consecutive_retries {
                        warn!(retries, "edge exchange retries exhausted");
                        return Err(MoveError::RetriesExhausted { retries });
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One move attempt around the edge leaving `c`.
    fn attempt<R: Rng>(
        &self,
        circuit: &Circuit,
        neighborhood: &Neighborhood,
        predecessors: &[usize],
        c: usize,
        rng: &mut R,
    ) -> Result<Circuit, MoveError> {
        let s = circuit.successor(c);
        let s_next = circuit.successor(s);
        let p = predecessors[c];

        let freed = [s, s_next, c];
        let mut edges = [(c, s), (s, s_next), (p, c)].map(|(origin, old_target)| {
            let targets = if neighborhood.is_eligible(origin) {
                freed
                    .iter()
                    .copied()
                    .filter(|&t| t != origin && t != old_target)
                    .collect()
            } else {
                Vec::new()
            };
            EdgeCandidates::new(origin, targets)
        });

        let assignments = propagate(&mut edges, self.config.max_propagation_rounds, rng)?;

        let mut successors = circuit.successors().to_vec();
        for (origin, target) in assignments {
            successors[origin] = target;
        }
        let candidate = Circuit::new(successors)?;

        if !candidate.is_single_cycle() {
            return Err(MoveError::StalledPropagation {
                rounds: self.config.max_propagation_rounds,
            });
        }
        Ok(candidate)
    }
}

/// Eligible nodes `c` whose successor and predecessor are eligible too and
/// distinct from each other, so that all three edges of a move may change.
fn movable_nodes(circuit: &Circuit, neighborhood: &Neighborhood, predecessors: &[usize]) -> Vec<usize> {
    let n = circuit.num_nodes();
    if n < MOVE_SIZE {
        return Vec::new();
    }
    neighborhood
        .eligible_nodes()
        .filter(|&c| c < n)
        .filter(|&c| {
            let s = circuit.successor(c);
            let p = predecessors[c];
            p != s && neighborhood.is_eligible(s) && neighborhood.is_eligible(p)
        })
        .collect()
}
