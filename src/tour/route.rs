//! Visit-order view of a tour.

use super::circuit::Circuit;
use super::validate::check_permutation;
use crate::error::InvalidTourError;

/// A tour stored as the ordered list of visited nodes.
///
/// [`Route::new`] guarantees every node of `0..N` appears exactly once
/// (N ≥ 2). A route returned by [`Circuit::to_route`] on a circuit with
/// several sub-cycles is the exception: it repeats nodes, and
/// [`Route::to_circuit`] rejects it. The route is implicitly closed: the last
/// node is followed by the first.
///
/// # Examples
///
/// ```
/// use u_circuit::tour::Route;
///
/// let route = Route::new(vec![0, 2, 1]).unwrap();
/// assert_eq!(route.to_circuit().unwrap().successors(), &[2, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Route {
    nodes: Vec<usize>,
}

impl Route {
    /// Creates a route, validating that it visits each node exactly once.
    pub fn new(nodes: Vec<usize>) -> Result<Self, InvalidTourError> {
        check_permutation(&nodes)?;
        Ok(Self { nodes })
    }

    /// Wraps the result of walking a circuit, which repeats nodes when the
    /// circuit has several sub-cycles. See [`Circuit::to_route`].
    pub(crate) fn from_walk(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Closes the route and converts it to its successor array.
    ///
    /// The result is always a single cycle. Fails when the route does not
    /// visit each node once, which only happens for the walk of a
    /// disconnected circuit.
    pub fn to_circuit(&self) -> Result<Circuit, InvalidTourError> {
        check_permutation(&self.nodes)?;
        let n = self.nodes.len();
        let mut successors = vec![0; n];
        for (k, &node) in self.nodes.iter().enumerate() {
            successors[node] = self.nodes[(k + 1) % n];
        }
        Ok(Circuit::from_valid(successors))
    }

    /// Rotates the route so that it starts at node 0, the starting point used
    /// by [`Circuit::to_route`].
    pub fn normalized(&self) -> Route {
        let start = self.nodes.iter().position(|&node| node == 0).unwrap_or(0);
        let mut nodes = self.nodes.clone();
        nodes.rotate_left(start);
        Route { nodes }
    }

    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }
}

impl TryFrom<Vec<usize>> for Route {
    type Error = InvalidTourError;

    fn try_from(nodes: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(nodes)
    }
}

impl From<Route> for Vec<usize> {
    fn from(route: Route) -> Self {
        route.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid() {
        assert_eq!(
            Route::new(vec![0, 1, 1]),
            Err(InvalidTourError::Duplicate { node: 1 })
        );
        assert_eq!(
            Route::new(vec![0, 4]),
            Err(InvalidTourError::OutOfRange { node: 4, len: 2 })
        );
        assert_eq!(
            Route::new(vec![0]),
            Err(InvalidTourError::TooShort { len: 1 })
        );
    }

    #[test]
    fn test_to_circuit() {
        let route = Route::new(vec![0, 1, 2]).unwrap();
        assert_eq!(route.to_circuit().unwrap().successors(), &[1, 2, 0]);

        let route = Route::new(vec![0, 1]).unwrap();
        assert_eq!(route.to_circuit().unwrap().successors(), &[1, 0]);
    }

    #[test]
    fn test_round_trip_example() {
        let route = Route::new(vec![0, 1, 2]).unwrap();
        assert_eq!(route.to_circuit().unwrap().to_route(), route);
    }

    #[test]
    fn test_round_trip_rotated_start() {
        let route = Route::new(vec![2, 0, 3, 1]).unwrap();
        let back = route.to_circuit().unwrap().to_route();
        assert_eq!(back.nodes(), &[0, 3, 1, 2]);
        assert_eq!(back, route.normalized());
    }

    #[test]
    fn test_walk_of_subcycles_does_not_convert() {
        let walk = Circuit::new(vec![1, 0, 3, 2]).unwrap().to_route();
        assert_eq!(walk.nodes(), &[0, 1, 0, 1]);
        assert_eq!(
            walk.to_circuit(),
            Err(InvalidTourError::Duplicate { node: 0 })
        );
    }

    #[test]
    fn test_normalized_already_at_zero() {
        let route = Route::new(vec![0, 2, 1]).unwrap();
        assert_eq!(route.normalized(), route);
    }
}
