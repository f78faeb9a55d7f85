//! Neighbourhood moves over circuits.
//!
//! The optimizer asks a [`NeighborhoodSelector`] which nodes may have their
//! outgoing edge re-wired, then hands the resulting [`Neighborhood`] to the
//! [`EdgeExchange`] generator, which proposes a new circuit differing in
//! three edges.

mod config;
mod edge_exchange;
mod neighborhood;
mod propagation;

pub use config::MoveConfig;
pub use edge_exchange::{EdgeExchange, Proposal, MOVE_SIZE};
pub use neighborhood::{AllEligible, DepotMask, Neighborhood, NeighborhoodSelector};
