//! Eligibility masks over a circuit's successors.

use std::collections::HashSet;

/// Successor array with the nodes whose outgoing edge must not change
/// masked out.
///
/// `successor(i) == None` marks `i` as ineligible: no move may re-wire the
/// edge leaving `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    successors: Vec<Option<usize>>,
}

impl Neighborhood {
    pub fn new(successors: Vec<Option<usize>>) -> Self {
        Self { successors }
    }

    /// Every node eligible.
    pub fn all(successors: &[usize]) -> Self {
        Self::masked(successors, |_| true)
    }

    /// Keeps the successors of nodes for which `is_eligible` holds.
    pub fn masked<F>(successors: &[usize], is_eligible: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        Self {
            successors: successors
                .iter()
                .enumerate()
                .map(|(node, &next)| is_eligible(node).then_some(next))
                .collect(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.successors.len()
    }

    pub fn successor(&self, node: usize) -> Option<usize> {
        self.successors.get(node).copied().flatten()
    }

    pub fn is_eligible(&self, node: usize) -> bool {
        self.successor(node).is_some()
    }

    /// Nodes whose outgoing edge may be re-wired.
    pub fn eligible_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.successors
            .iter()
            .enumerate()
            .filter_map(|(node, next)| next.map(|_| node))
    }

    /// `true` when no node is eligible.
    pub fn is_exhausted(&self) -> bool {
        self.successors.iter().all(Option::is_none)
    }
}

/// Produces the eligibility mask for the current successors.
///
/// Called once per iteration by the optimizer. Implemented by
/// [`AllEligible`], [`DepotMask`] and any `Fn(&[usize]) -> Neighborhood`.
pub trait NeighborhoodSelector {
    fn select(&self, successors: &[usize]) -> Neighborhood;
}

impl<F> NeighborhoodSelector for F
where
    F: Fn(&[usize]) -> Neighborhood,
{
    fn select(&self, successors: &[usize]) -> Neighborhood {
        self(successors)
    }
}

/// No node is locked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllEligible;

impl NeighborhoodSelector for AllEligible {
    fn select(&self, successors: &[usize]) -> Neighborhood {
        Neighborhood::all(successors)
    }
}

/// Locks the outgoing edge of every depot node.
///
/// Depots anchor the vehicle tours in the reindexed circuit (see
/// [`Reindexer`](crate::reindex::Reindexer)), so their successors never
/// change.
#[derive(Debug, Clone, Default)]
pub struct DepotMask {
    depots: HashSet<usize>,
}

impl DepotMask {
    pub fn new<I>(depots: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            depots: depots.into_iter().collect(),
        }
    }

    pub fn is_depot(&self, node: usize) -> bool {
        self.depots.contains(&node)
    }
}

impl NeighborhoodSelector for DepotMask {
    fn select(&self, successors: &[usize]) -> Neighborhood {
        Neighborhood::masked(successors, |node| !self.is_depot(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_eligible() {
        let hood = AllEligible.select(&[1, 2, 0]);
        assert_eq!(hood.eligible_nodes().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(hood.successor(1), Some(2));
        assert!(!hood.is_exhausted());
    }

    #[test]
    fn test_depot_mask_locks_outgoing_edges() {
        let mask = DepotMask::new([0, 1]);
        let hood = mask.select(&[2, 0, 3, 1]);
        assert_eq!(hood.successor(0), None);
        assert_eq!(hood.successor(1), None);
        assert_eq!(hood.successor(2), Some(3));
        assert_eq!(hood.eligible_nodes().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_exhausted() {
        let mask = DepotMask::new(0..3);
        assert!(mask.select(&[1, 2, 0]).is_exhausted());
        assert!(!mask.select(&[1, 2, 0]).is_eligible(5));
    }

    #[test]
    fn test_closure_selector() {
        let odd_only = |succ: &[usize]| Neighborhood::masked(succ, |node| node % 2 == 1);
        let hood = odd_only.select(&[1, 2, 3, 0]);
        assert_eq!(hood.eligible_nodes().collect::<Vec<_>>(), vec![1, 3]);
    }
}
