//! Tour cost evaluation.

use super::matrix::{DistanceMatrix, EdgeCost};
use crate::tour::Circuit;

/// Objective minimized by the optimizer. Lower is better.
///
/// Implemented by [`DistanceMatrix`] (route length via [`circuit_cost`]) and
/// by any `Fn(&Circuit) -> f64`, so callers can plug in other objectives.
pub trait Objective {
    fn evaluate(&self, circuit: &Circuit) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&Circuit) -> f64,
{
    fn evaluate(&self, circuit: &Circuit) -> f64 {
        self(circuit)
    }
}

impl Objective for DistanceMatrix {
    fn evaluate(&self, circuit: &Circuit) -> f64 {
        circuit_cost(circuit, self)
    }
}

/// Sums the costs of consecutive pairs of `route`.
///
/// The sum is open: the edge from the last node back to the first is not
/// counted. With the depot reindexing the route starts at a depot, so the
/// omitted edge is a depot-to-depot transfer.
///
/// # Examples
///
/// ```
/// use u_circuit::cost::cost_objective;
///
/// let m = vec![
///     vec![0.0, 1.0, 5.0],
///     vec![1.0, 0.0, 2.0],
///     vec![5.0, 2.0, 0.0],
/// ];
/// assert_eq!(cost_objective(&[0, 1, 2], &m), 3.0);
/// ```
pub fn cost_objective<M: EdgeCost + ?Sized>(route: &[usize], costs: &M) -> f64 {
    route.windows(2).map(|w| costs.cost(w[0], w[1])).sum()
}

/// Cost of a circuit: [`cost_objective`] over [`Circuit::to_route`].
pub fn circuit_cost<M: EdgeCost + ?Sized>(circuit: &Circuit, costs: &M) -> f64 {
    cost_objective(circuit.to_route().nodes(), costs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec<f64>> {
        // Unit square corners 0-1-2-3.
        let d = 2f64.sqrt();
        vec![
            vec![0.0, 1.0, d, 1.0],
            vec![1.0, 0.0, 1.0, d],
            vec![d, 1.0, 0.0, 1.0],
            vec![1.0, d, 1.0, 0.0],
        ]
    }

    #[test]
    fn test_cost_objective_is_open() {
        let m = square();
        assert!((cost_objective(&[0, 1, 2, 3], &m) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_short_routes() {
        let m = square();
        assert_eq!(cost_objective(&[], &m), 0.0);
        assert_eq!(cost_objective(&[2], &m), 0.0);
    }

    #[test]
    fn test_circuit_cost_follows_route_from_zero() {
        let m = square();
        let circuit = Circuit::new(vec![2, 3, 1, 0]).unwrap();
        // 0 -> 2 -> 1 -> 3
        let expected = 2f64.sqrt() + 1.0 + 2f64.sqrt();
        assert!((circuit_cost(&circuit, &m) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_objective_impls_agree() {
        let m = square();
        let dm = DistanceMatrix::from_rows(m.clone()).unwrap();
        let circuit = Circuit::new(vec![1, 2, 3, 0]).unwrap();
        let closure = |c: &Circuit| circuit_cost(c, &m);
        assert_eq!(dm.evaluate(&circuit), closure.evaluate(&circuit));
    }
}
