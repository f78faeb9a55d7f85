//! Virtual-depot reindexing of multi-vehicle solutions.
//!
//! A solution with `V` vehicles over `C` customers becomes one tour over
//! `2V + C` nodes:
//!
//! - nodes `0..2V` are virtual depots: `2i` starts vehicle `i` and `2i + 1`
//!   ends it;
//! - nodes `2V..2V + C` are the customers, node `2V - 1 + id` for customer
//!   `id` in `1..=C`.
//!
//! Each vehicle's stops are laid out as `2i, stops..., 2i + 1`, vehicles in
//! order, followed by empty start/end pairs for unused vehicles. Depots map
//! back to customer id 0 (the physical depot), so depot-to-depot edges cost
//! nothing and the whole solution can be annealed as one circuit with the
//! depots locked by [`Reindexer::depot_mask`].

use std::ops::Range;

use crate::cost::DistanceMatrix;
use crate::error::ReindexError;
use crate::moves::DepotMask;
use crate::tour::{Circuit, Route};

/// Maps between customer ids and reindexed node indices.
///
/// # Examples
///
/// ```
/// use u_circuit::reindex::Reindexer;
///
/// let reindexer = Reindexer::new(2, 3);
/// let route = reindexer.to_route(&[vec![2, 1], vec![3]]).unwrap();
/// assert_eq!(route.nodes(), &[0, 5, 4, 1, 2, 6, 3]);
/// assert_eq!(reindexer.vehicle_routes(&route), vec![vec![2, 1], vec![3]]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reindexer {
    vehicles: usize,
    customers: usize,
}

impl Reindexer {
    /// `customers` excludes the physical depot (customer id 0).
    pub fn new(vehicles: usize, customers: usize) -> Self {
        Self {
            vehicles,
            customers,
        }
    }

    pub fn num_vehicles(&self) -> usize {
        self.vehicles
    }

    pub fn num_customers(&self) -> usize {
        self.customers
    }

    /// Total nodes in the reindexed circuit.
    pub fn num_nodes(&self) -> usize {
        2 * self.vehicles + self.customers
    }

    pub fn depot_indexes(&self) -> Range<usize> {
        0..2 * self.vehicles
    }

    pub fn visit_indexes(&self) -> Range<usize> {
        2 * self.vehicles..self.num_nodes()
    }

    pub fn is_depot(&self, index: usize) -> bool {
        index < 2 * self.vehicles
    }

    /// Customer id of a reindexed node; every depot maps to 0.
    pub fn customer_id(&self, index: usize) -> usize {
        if self.is_depot(index) {
            0
        } else {
            index + 1 - 2 * self.vehicles
        }
    }

    /// Node index of customer `id`, or `None` for the depot and unknown ids.
    pub fn customer_index(&self, id: usize) -> Option<usize> {
        (1..=self.customers)
            .contains(&id)
            .then(|| 2 * self.vehicles + id - 1)
    }

    /// Selector locking every virtual depot's outgoing edge.
    pub fn depot_mask(&self) -> DepotMask {
        DepotMask::new(self.depot_indexes())
    }

    /// Lays out a solution (customer ids per vehicle, depot excluded) as a
    /// route over the reindexed nodes.
    pub fn to_route(&self, solution: &[Vec<usize>]) -> Result<Route, ReindexError> {
        if solution.len() > self.vehicles {
            return Err(ReindexError::TooManyVehicles {
                used: solution.len(),
                available: self.vehicles,
            });
        }

        let mut nodes = Vec::with_capacity(self.num_nodes());
        for (vehicle, stops) in solution.iter().enumerate() {
            nodes.push(2 * vehicle);
            for &id in stops {
                let index = self
                    .customer_index(id)
                    .ok_or(ReindexError::UnknownCustomer {
                        id,
                        max: self.customers,
                    })?;
                nodes.push(index);
            }
            nodes.push(2 * vehicle + 1);
        }
        for vehicle in solution.len()..self.vehicles {
            nodes.push(2 * vehicle);
            nodes.push(2 * vehicle + 1);
        }

        if nodes.len() != self.num_nodes() {
            return Err(ReindexError::MissingCustomers {
                visited: nodes.len(),
                expected: self.num_nodes(),
            });
        }
        Ok(Route::new(nodes)?)
    }

    /// [`Reindexer::to_route`] closed into a circuit.
    pub fn to_circuit(&self, solution: &[Vec<usize>]) -> Result<Circuit, ReindexError> {
        Ok(self.to_route(solution)?.to_circuit()?)
    }

    /// Splits a reindexed route back into customer ids per vehicle.
    ///
    /// The route is read from node 0. Customers are attributed to the most
    /// recently started vehicle; vehicles without customers yield empty
    /// lists, so the result always has one entry per vehicle.
    pub fn vehicle_routes(&self, route: &Route) -> Vec<Vec<usize>> {
        let mut routes = vec![Vec::new(); self.vehicles];
        let mut vehicle = None;
        for &index in route.normalized().nodes() {
            if self.is_depot(index) {
                if index % 2 == 0 {
                    vehicle = Some(index / 2);
                }
            } else if let Some(v) = vehicle {
                routes[v].push(self.customer_id(index));
            }
        }
        routes
    }

    /// Euclidean distance matrix over the reindexed nodes.
    ///
    /// `coordinates[id]` is the position of customer `id`; entry 0 is the
    /// physical depot, shared by every virtual depot.
    pub fn distance_matrix(
        &self,
        coordinates: &[(f64, f64)],
    ) -> Result<DistanceMatrix, ReindexError> {
        if coordinates.len() != self.customers + 1 {
            return Err(ReindexError::CoordinateCount {
                count: coordinates.len(),
                expected: self.customers + 1,
            });
        }
        let points: Vec<(f64, f64)> = (0..self.num_nodes())
            .map(|index| coordinates[self.customer_id(index)])
            .collect();
        Ok(DistanceMatrix::from_points(&points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{circuit_cost, EdgeCost};
    use crate::error::InvalidTourError;
    use crate::moves::NeighborhoodSelector;

    #[test]
    fn test_index_mapping() {
        let r = Reindexer::new(2, 3);
        assert_eq!(r.num_nodes(), 7);
        assert_eq!(r.depot_indexes(), 0..4);
        assert_eq!(r.visit_indexes(), 4..7);
        for depot in 0..4 {
            assert_eq!(r.customer_id(depot), 0);
        }
        assert_eq!(r.customer_id(4), 1);
        assert_eq!(r.customer_id(6), 3);
        assert_eq!(r.customer_index(1), Some(4));
        assert_eq!(r.customer_index(3), Some(6));
        assert_eq!(r.customer_index(0), None);
        assert_eq!(r.customer_index(4), None);
    }

    #[test]
    fn test_unused_vehicles_get_empty_pairs() {
        let r = Reindexer::new(3, 2);
        let route = r.to_route(&[vec![1, 2]]).unwrap();
        assert_eq!(route.nodes(), &[0, 6, 7, 1, 2, 3, 4, 5]);
        assert_eq!(r.vehicle_routes(&route), vec![vec![1, 2], vec![], vec![]]);
    }

    #[test]
    fn test_circuit_round_trip_through_vehicles() {
        let r = Reindexer::new(2, 4);
        let solution = vec![vec![3, 1], vec![4, 2]];
        let circuit = r.to_circuit(&solution).unwrap();
        assert!(circuit.is_single_cycle());
        assert_eq!(r.vehicle_routes(&circuit.to_route()), solution);
    }

    #[test]
    fn test_to_route_errors() {
        let r = Reindexer::new(1, 2);
        assert_eq!(
            r.to_route(&[vec![1], vec![2]]),
            Err(ReindexError::TooManyVehicles {
                used: 2,
                available: 1
            })
        );
        assert_eq!(
            r.to_route(&[vec![1, 5]]),
            Err(ReindexError::UnknownCustomer { id: 5, max: 2 })
        );
        assert_eq!(
            r.to_route(&[vec![1]]),
            Err(ReindexError::MissingCustomers {
                visited: 3,
                expected: 4
            })
        );
        assert_eq!(
            r.to_route(&[vec![1, 1, 2]]),
            Err(ReindexError::MissingCustomers {
                visited: 5,
                expected: 4
            })
        );
    }

    #[test]
    fn test_duplicate_customer_with_matching_count() {
        // Customer 1 twice, customer 2 missing: right length, invalid tour.
        let r = Reindexer::new(1, 2);
        assert_eq!(
            r.to_route(&[vec![1, 1]]),
            Err(ReindexError::InvalidTour(InvalidTourError::Duplicate {
                node: 2
            }))
        );
    }

    #[test]
    fn test_depot_mask() {
        let r = Reindexer::new(2, 2);
        let circuit = r.to_circuit(&[vec![1], vec![2]]).unwrap();
        let hood = r.depot_mask().select(circuit.successors());
        assert_eq!(hood.eligible_nodes().collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn test_distance_matrix() {
        let r = Reindexer::new(2, 2);
        let coords = [(0.0, 0.0), (3.0, 4.0), (0.0, 1.0)];
        let dm = r.distance_matrix(&coords).unwrap();
        assert_eq!(dm.size(), 6);
        // Depot to depot is free, depot to customer 1 is 5.
        assert_eq!(dm.cost(0, 3), 0.0);
        assert!((dm.cost(1, 4) - 5.0).abs() < 1e-12);

        // Vehicle tours: 0 -> 1 -> 0 and 0 -> 2 -> 0.
        let circuit = r.to_circuit(&[vec![1], vec![2]]).unwrap();
        assert!((circuit_cost(&circuit, &dm) - 12.0).abs() < 1e-12);

        assert_eq!(
            r.distance_matrix(&coords[..2]),
            Err(ReindexError::CoordinateCount {
                count: 2,
                expected: 3
            })
        );
    }
}
