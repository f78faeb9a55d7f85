//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use super::config::AnnealConfig;
use crate::cost::Objective;
use crate::error::{AnnealError, MoveError};
use crate::moves::{EdgeExchange, NeighborhoodSelector, Proposal};
use crate::tour::Circuit;

/// Why an annealing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The temperature reached the final temperature.
    Frozen,

    /// The move generator found no eligible edge to re-wire.
    EmptyNeighborhood,

    /// The `max_iterations` budget was spent.
    IterationLimit,

    /// The cancellation flag was raised.
    Cancelled,

    /// A reduction step left the temperature where it was, so the schedule
    /// would never reach the final temperature.
    TemperatureStalled,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// Best circuit observed over the whole run.
    pub best: Circuit,

    /// Objective value of `best`.
    pub best_cost: f64,

    /// Objective value of the initial circuit.
    pub initial_cost: f64,

    /// Candidate circuits evaluated.
    pub iterations: usize,

    /// Temperature levels completed.
    pub temperature_levels: usize,

    pub final_temperature: f64,

    /// Accepted candidates, improving or not.
    pub accepted_moves: usize,

    /// Candidates strictly better than the current circuit.
    pub improving_moves: usize,

    /// Move attempts abandoned by the generator and retried.
    pub move_retries: usize,

    pub termination: Termination,
}

/// Metropolis acceptance probability of a candidate.
///
/// `delta` is `cost(current) − cost(candidate)`: non-negative deltas are
/// always accepted, worse candidates with probability `exp(delta / T)`.
///
/// # Examples
///
/// ```
/// use u_circuit::anneal::acceptance_probability;
///
/// assert_eq!(acceptance_probability(0.0, 1.0), 1.0);
/// assert!(acceptance_probability(-1.0, 1e-6) < 1e-12);
/// ```
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta >= 0.0 {
        1.0
    } else {
        (delta / temperature).exp()
    }
}

/// One simulated-annealing run over circuits.
///
/// Owns the working and best circuits, the temperature and the random
/// source; the objective and neighbourhood selector are borrowed. A fixed
/// `seed` in the config reproduces a run exactly.
///
/// # Examples
///
/// ```
/// use u_circuit::anneal::{AnnealConfig, Annealer};
/// use u_circuit::cost::DistanceMatrix;
/// use u_circuit::moves::AllEligible;
/// use u_circuit::tour::Circuit;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0), (3.0, 0.0)]);
/// let initial = Circuit::new(vec![1, 2, 3, 0]).unwrap();
/// let config = AnnealConfig::default()
///     .with_initial_temperature(5.0)
///     .with_final_temperature(0.01)
///     .with_alpha(0.05)
///     .with_seed(7);
///
/// let result = Annealer::new(initial, &dm, &AllEligible, config)
///     .unwrap()
///     .run()
///     .unwrap();
/// assert!(result.best_cost <= result.initial_cost);
/// ```
pub struct Annealer<'a, O, N> {
    objective: &'a O,
    selector: &'a N,
    generator: EdgeExchange,
    config: AnnealConfig,
    rng: StdRng,

    current: Circuit,
    current_cost: f64,
    best: Circuit,
    best_cost: f64,
    initial_cost: f64,
    temperature: f64,

    iterations: usize,
    temperature_levels: usize,
    accepted_moves: usize,
    improving_moves: usize,
    move_retries: usize,
}

impl<'a, O, N> Annealer<'a, O, N>
where
    O: Objective,
    N: NeighborhoodSelector,
{
    /// Prepares a run starting from `initial`.
    ///
    /// # Errors
    ///
    /// - [`AnnealError::InvalidConfig`] if `config` does not validate.
    /// - [`AnnealError::InvalidTour`] if `initial` is not a single cycle.
    /// - [`AnnealError::NonFiniteCost`] if the objective of `initial` is not
    ///   finite.
    pub fn new(
        initial: Circuit,
        objective: &'a O,
        selector: &'a N,
        config: AnnealConfig,
    ) -> Result<Self, AnnealError> {
        config.validate().map_err(AnnealError::InvalidConfig)?;
        initial.ensure_single_cycle()?;

        let initial_cost = objective.evaluate(&initial);
        if !initial_cost.is_finite() {
            return Err(AnnealError::NonFiniteCost {
                value: initial_cost,
            });
        }

        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        Ok(Self {
            objective,
            selector,
            generator: EdgeExchange::new(config.moves),
            temperature: config.initial_temperature,
            config,
            rng,
            best: initial.clone(),
            current: initial,
            current_cost: initial_cost,
            best_cost: initial_cost,
            initial_cost,
            iterations: 0,
            temperature_levels: 0,
            accepted_moves: 0,
            improving_moves: 0,
            move_retries: 0,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current(&self) -> &Circuit {
        &self.current
    }

    pub fn best(&self) -> &Circuit {
        &self.best
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Runs to termination.
    pub fn run(self) -> Result<AnnealResult, AnnealError> {
        self.run_with_cancel(None)
    }

    /// Runs with an optional cancellation flag, checked before each
    /// temperature level. A level in progress always completes.
    pub fn run_with_cancel(
        mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, AnnealError> {
        debug!(
            nodes = self.current.num_nodes(),
            initial_cost = self.initial_cost,
            temperature = self.temperature,
            reduction = ?self.config.reduction,
            "annealing started"
        );

        let termination = self.anneal(cancel.as_deref())?;

        debug!(
            ?termination,
            best_cost = self.best_cost,
            iterations = self.iterations,
            levels = self.temperature_levels,
            accepted = self.accepted_moves,
            "annealing finished"
        );

        Ok(AnnealResult {
            best: self.best,
            best_cost: self.best_cost,
            initial_cost: self.initial_cost,
            iterations: self.iterations,
            temperature_levels: self.temperature_levels,
            final_temperature: self.temperature,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            move_retries: self.move_retries,
            termination,
        })
    }

    fn anneal(&mut self, cancel: Option<&AtomicBool>) -> Result<Termination, AnnealError> {
        while self.temperature > self.config.final_temperature {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return Ok(Termination::Cancelled);
            }

            for _ in 0..self.config.iterations_per_temperature {
                if self.config.max_iterations > 0 && self.iterations >= self.config.max_iterations
                {
                    return Ok(Termination::IterationLimit);
                }

                let neighborhood = self.selector.select(self.current.successors());
                let proposal =
                    match self
                        .generator
                        .propose(&self.current, &neighborhood, &mut self.rng)
                    {
                        Ok(proposal) => proposal,
                        Err(MoveError::EmptyNeighborhood) => {
                            return Ok(Termination::EmptyNeighborhood)
                        }
                        Err(e) => return Err(AnnealError::Move(e)),
                    };
                self.consider(proposal);
            }

            let next = self.config.reduction.reduce(
                self.temperature,
                self.config.alpha,
                self.config.beta,
            );
            self.temperature_levels += 1;
            if next.is_nan() || next >= self.temperature {
                warn!(
                    temperature = self.temperature,
                    reduction = ?self.config.reduction,
                    "temperature reduction made no progress"
                );
                return Ok(Termination::TemperatureStalled);
            }
            self.temperature = next;
            trace!(
                level = self.temperature_levels,
                temperature = self.temperature,
                current_cost = self.current_cost,
                best_cost = self.best_cost,
                "temperature reduced"
            );
        }

        Ok(Termination::Frozen)
    }

    /// Metropolis step on one candidate.
    fn consider(&mut self, proposal: Proposal) {
        self.iterations += 1;
        self.move_retries += proposal.retries;

        let candidate_cost = self.objective.evaluate(&proposal.circuit);
        let delta = self.current_cost - candidate_cost;

        let accept = if delta >= 0.0 {
            true
        } else {
            self.rng.random_range(0.0..1.0) < acceptance_probability(delta, self.temperature)
        };
        if delta > 0.0 {
            self.improving_moves += 1;
        }

        if accept {
            self.current = proposal.circuit;
            self.current_cost = candidate_cost;
            self.accepted_moves += 1;

            if self.current_cost < self.best_cost {
                self.best = self.current.clone();
                self.best_cost = self.current_cost;
            }
        }
    }
}
