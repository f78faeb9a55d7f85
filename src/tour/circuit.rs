//! Successor-array view of a tour.

use super::route::Route;
use super::validate::{check_successors, cycle_count, is_single_cycle};
use crate::error::InvalidTourError;

/// A tour stored as a successor array: `successors[i]` is the node visited
/// right after `i`.
///
/// Construction guarantees that the array is a permutation of `0..N`
/// (N ≥ 2) with no node being its own successor. Those two conditions still
/// allow several disjoint sub-cycles; use [`Circuit::new_tour`] or
/// [`Circuit::is_single_cycle`] when a single closed tour is required.
///
/// # Examples
///
/// ```
/// use u_circuit::tour::Circuit;
///
/// let circuit = Circuit::new(vec![1, 2, 0]).unwrap();
/// assert_eq!(circuit.to_route().nodes(), &[0, 1, 2]);
/// assert!(Circuit::new(vec![0, 1, 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Circuit {
    successors: Vec<usize>,
}

impl Circuit {
    /// Creates a circuit, validating the permutation and no-self-loop
    /// conditions.
    pub fn new(successors: Vec<usize>) -> Result<Self, InvalidTourError> {
        check_successors(&successors)?;
        Ok(Self { successors })
    }

    /// Creates a circuit that must also form one closed tour over all nodes.
    pub fn new_tour(successors: Vec<usize>) -> Result<Self, InvalidTourError> {
        let circuit = Self::new(successors)?;
        circuit.ensure_single_cycle()?;
        Ok(circuit)
    }

    /// Wraps a successor array known to be valid.
    pub(crate) fn from_valid(successors: Vec<usize>) -> Self {
        debug_assert!(check_successors(&successors).is_ok());
        Self { successors }
    }

    /// Number of nodes in the tour.
    pub fn num_nodes(&self) -> usize {
        self.successors.len()
    }

    pub fn successors(&self) -> &[usize] {
        &self.successors
    }

    /// Successor of `node`.
    ///
    /// # Panics
    /// Panics if `node >= self.num_nodes()`.
    pub fn successor(&self, node: usize) -> usize {
        self.successors[node]
    }

    /// Derives the predecessor array: `predecessors[successors[i]] == i`.
    pub fn predecessors(&self) -> Vec<usize> {
        let mut predecessors = vec![0; self.successors.len()];
        for (node, &next) in self.successors.iter().enumerate() {
            predecessors[next] = node;
        }
        predecessors
    }

    pub fn is_single_cycle(&self) -> bool {
        is_single_cycle(&self.successors)
    }

    pub fn cycle_count(&self) -> usize {
        cycle_count(&self.successors)
    }

    pub(crate) fn ensure_single_cycle(&self) -> Result<(), InvalidTourError> {
        if self.is_single_cycle() {
            Ok(())
        } else {
            Err(InvalidTourError::Disconnected {
                cycles: self.cycle_count(),
            })
        }
    }

    /// Number of nodes whose successor differs from `other`'s.
    ///
    /// # Panics
    /// Panics if the circuits have different sizes.
    pub fn changed_edges(&self, other: &Circuit) -> usize {
        assert_eq!(
            self.num_nodes(),
            other.num_nodes(),
            "circuits must have equal size"
        );
        self.successors
            .iter()
            .zip(&other.successors)
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Walks exactly N successors starting at node 0 and returns the visit
    /// order.
    ///
    /// For a single-cycle circuit this is the exact inverse of
    /// [`Route::to_circuit`]. For a circuit made of several sub-cycles the
    /// walk keeps going around the cycle through node 0: nodes of the other
    /// cycles are omitted and nodes of the first one repeat, so the returned
    /// route does not hold each node once and [`Route::to_circuit`] refuses
    /// it. Use [`Circuit::try_to_route`] to reject such circuits up front.
    pub fn to_route(&self) -> Route {
        let n = self.successors.len();
        let mut nodes = Vec::with_capacity(n);
        let mut current = 0;
        for _ in 0..n {
            nodes.push(current);
            current = self.successors[current];
        }
        Route::from_walk(nodes)
    }

    /// Like [`Circuit::to_route`], but fails with
    /// [`InvalidTourError::Disconnected`] unless the circuit is one cycle.
    pub fn try_to_route(&self) -> Result<Route, InvalidTourError> {
        self.ensure_single_cycle()?;
        Ok(self.to_route())
    }

    pub fn into_successors(self) -> Vec<usize> {
        self.successors
    }
}

impl TryFrom<Vec<usize>> for Circuit {
    type Error = InvalidTourError;

    fn try_from(successors: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(successors)
    }
}

impl From<Circuit> for Vec<usize> {
    fn from(circuit: Circuit) -> Self {
        circuit.successors
    }
}
