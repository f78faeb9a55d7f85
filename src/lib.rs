//! Successor-array tours and simulated annealing for vehicle routing.
//!
//! A multi-vehicle solution is reindexed into a single closed tour over
//! customers and virtual depots, stored as a successor array (a *circuit*),
//! and improved by simulated annealing with a three-edge exchange move.
//!
//! - [`tour`]: [`Circuit`](tour::Circuit) and [`Route`](tour::Route) views of
//!   a tour, the permutation predicates guarding them, and conversions.
//! - [`moves`]: eligibility masks and the edge-exchange move generator with
//!   bounded candidate propagation.
//! - [`cost`]: distance matrix and open-route cost objective.
//! - [`anneal`]: the annealing optimizer and its reduction schedules.
//! - [`reindex`]: mapping between per-vehicle stop lists and one circuit.
//!
//! # Example
//!
//! ```
//! use u_circuit::anneal::{AnnealConfig, Annealer, ReductionStrategy};
//! use u_circuit::reindex::Reindexer;
//!
//! // Depot at the origin, six customers, two vehicles.
//! let coords = [
//!     (0.0, 0.0),
//!     (1.0, 0.0),
//!     (2.0, 0.0),
//!     (3.0, 0.0),
//!     (0.0, 1.0),
//!     (0.0, 2.0),
//!     (0.0, 3.0),
//! ];
//! let reindexer = Reindexer::new(2, 6);
//! let matrix = reindexer.distance_matrix(&coords).unwrap();
//! let initial = reindexer
//!     .to_circuit(&[vec![3, 1, 2], vec![6, 4, 5]])
//!     .unwrap();
//!
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(10.0)
//!     .with_final_temperature(0.01)
//!     .with_reduction(ReductionStrategy::Geometric)
//!     .with_alpha(1.1)
//!     .with_iterations_per_temperature(50)
//!     .with_seed(42);
//!
//! let mask = reindexer.depot_mask();
//! let result = Annealer::new(initial, &matrix, &mask, config)
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! assert!(result.best_cost <= result.initial_cost);
//! let routes = reindexer.vehicle_routes(&result.best.to_route());
//! assert_eq!(routes.len(), 2);
//! ```

pub mod anneal;
pub mod cost;
pub mod error;
pub mod moves;
pub mod reindex;
pub mod tour;
