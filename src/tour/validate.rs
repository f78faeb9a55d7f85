//! Permutation predicates.
//!
//! The circuit constraint is classically stated as two predicates,
//! [`all_different`] and [`is_fixed_point_free`]. They are necessary but not
//! sufficient for a successor array to describe one closed tour: together they
//! admit any fixed-point-free permutation, including several disjoint cycles.
//! [`is_single_cycle`] and [`cycle_count`] close that gap.

use std::collections::HashSet;

use crate::error::InvalidTourError;

/// Returns `true` iff every value in `seq` is unique.
///
/// # Examples
///
/// ```
/// use u_circuit::tour::all_different;
///
/// assert!(all_different(&[0, 1, 2]));
/// assert!(!all_different(&[0, 1, 1]));
/// ```
pub fn all_different(seq: &[usize]) -> bool {
    let distinct: HashSet<&usize> = seq.iter().collect();
    distinct.len() == seq.len()
}

/// Returns `true` iff no index maps to itself (`seq[i] != i` for all `i`).
///
/// # Examples
///
/// ```
/// use u_circuit::tour::is_fixed_point_free;
///
/// assert!(is_fixed_point_free(&[1, 2, 0]));
/// assert!(!is_fixed_point_free(&[0, 1, 2]));
/// ```
pub fn is_fixed_point_free(seq: &[usize]) -> bool {
    seq.iter().enumerate().all(|(i, &next)| i != next)
}

/// Returns `true` iff following `successors` from node 0 visits every node
/// exactly once before coming back to 0.
///
/// Works on any input: a walk that leaves `0..N` or gets trapped in a cycle
/// not containing 0 simply never returns, and the result is `false`.
pub fn is_single_cycle(successors: &[usize]) -> bool {
    let n = successors.len();
    if n == 0 {
        return false;
    }
    let mut current = 0;
    for step in 1..=n {
        current = match successors.get(current) {
            Some(&next) => next,
            None => return false,
        };
        if current == 0 {
            return step == n;
        }
    }
    false
}

/// Counts the disjoint cycles of a permutation.
///
/// Meaningful for permutations of `0..N` only; out-of-range entries end the
/// walk they appear in.
pub fn cycle_count(successors: &[usize]) -> usize {
    let n = successors.len();
    let mut visited = vec![false; n];
    let mut cycles = 0;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut current = start;
        while current < n && !visited[current] {
            visited[current] = true;
            current = successors[current];
        }
    }

    cycles
}

/// Checks that `seq` holds each of `0..seq.len()` exactly once.
pub(crate) fn check_permutation(seq: &[usize]) -> Result<(), InvalidTourError> {
    let len = seq.len();
    if len < 2 {
        return Err(InvalidTourError::TooShort { len });
    }
    if let Some(&node) = seq.iter().find(|&&node| node >= len) {
        return Err(InvalidTourError::OutOfRange { node, len });
    }
    if !all_different(seq) {
        let mut seen = vec![false; len];
        for &node in seq {
            if std::mem::replace(&mut seen[node], true) {
                return Err(InvalidTourError::Duplicate { node });
            }
        }
    }
    Ok(())
}

/// Checks the successor-array conditions: a permutation with no self-loop.
pub(crate) fn check_successors(successors: &[usize]) -> Result<(), InvalidTourError> {
    check_permutation(successors)?;
    if !is_fixed_point_free(successors) {
        let node = successors
            .iter()
            .enumerate()
            .position(|(i, &next)| i == next)
            .unwrap_or_default();
        return Err(InvalidTourError::SelfLoop { node });
    }
    Ok(())
}
