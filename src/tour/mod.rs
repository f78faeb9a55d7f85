//! Tour representations.
//!
//! A tour over the nodes `0..N` has two interchangeable views:
//!
//! - [`Circuit`]: successor array, `successors[i]` is the node after `i`.
//!   This is the form the move generator edits.
//! - [`Route`]: explicit visit order. This is the form costs are summed over.
//!
//! [`Route::to_circuit`] and [`Circuit::to_route`] are exact inverses for
//! single-cycle circuits, up to the convention that routes produced from a
//! circuit start at node 0.

mod circuit;
mod route;
mod validate;

pub use circuit::Circuit;
pub use route::Route;
pub use validate::{all_different, cycle_count, is_fixed_point_free, is_single_cycle};
