//! Simulated annealing over circuits.
//!
//! A single-solution trajectory search: each iteration asks the edge-exchange
//! generator for a neighbour of the current circuit and accepts it with the
//! Metropolis criterion. The temperature is lowered once per level by a
//! [`ReductionStrategy`] until it reaches the final temperature or no move is
//! left. The best circuit seen is tracked separately from the current one.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::{AnnealConfig, ReductionStrategy};
pub use runner::{acceptance_probability, AnnealResult, Annealer, Termination};
