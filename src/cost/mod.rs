//! Cost evaluation.
//!
//! Costs are read from a caller-owned [`DistanceMatrix`] (or anything
//! implementing [`EdgeCost`]) and summed over the route view of a tour.

mod matrix;
mod objective;

pub use matrix::{DistanceMatrix, EdgeCost};
pub use objective::{circuit_cost, cost_objective, Objective};
