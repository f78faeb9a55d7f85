//! Dense distance matrix.

use crate::error::MatrixError;

/// Pairwise edge costs looked up by node index.
pub trait EdgeCost {
    /// Cost of travelling from `from` to `to`.
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// Square table of non-negative, finite edge costs, stored row-major.
///
/// # Examples
///
/// ```
/// use u_circuit::cost::{DistanceMatrix, EdgeCost};
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0)]);
/// assert_eq!(dm.size(), 2);
/// assert!((dm.cost(0, 1) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            if let Some((to, &value)) = values
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite() || **v < 0.0)
            {
                return Err(MatrixError::InvalidCost {
                    from: row,
                    to,
                    value,
                });
            }
            data.extend(values);
        }
        Ok(Self { size, data })
    }

    /// Builds the Euclidean distance matrix of planar points.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let size = points.len();
        let mut data = Vec::with_capacity(size * size);
        for &(x1, y1) in points {
            for &(x2, y2) in points {
                data.push((x1 - x2).hypot(y1 - y2));
            }
        }
        Self { size, data }
    }

    /// Number of nodes (rows).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row of costs leaving `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }
}

impl EdgeCost for DistanceMatrix {
    #[inline]
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }
}

impl EdgeCost for [Vec<f64>] {
    #[inline]
    fn cost(&self, from: usize, to: usize) -> f64 {
        self[from][to]
    }
}

impl EdgeCost for Vec<Vec<f64>> {
    #[inline]
    fn cost(&self, from: usize, to: usize) -> f64 {
        self[from][to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();
        assert_eq!(dm.size(), 2);
        assert_eq!(dm.cost(0, 1), 1.0);
        assert_eq!(dm.cost(1, 0), 2.0);
        assert_eq!(dm.row(1), &[2.0, 0.0]);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_negative_and_nan() {
        assert!(matches!(
            DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]),
            Err(MatrixError::InvalidCost { from: 0, to: 1, .. })
        ));
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![f64::NAN, 0.0]]).is_err());
    }

    #[test]
    fn test_from_points_symmetric_zero_diagonal() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        for i in 0..3 {
            assert_eq!(dm.cost(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(dm.cost(i, j), dm.cost(j, i));
            }
        }
        assert!((dm.cost(0, 2) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_nested_vec_edge_cost() {
        let m = vec![vec![0.0, 7.0], vec![3.0, 0.0]];
        assert_eq!(m.cost(0, 1), 7.0);
        assert_eq!(m.as_slice().cost(1, 0), 3.0);
    }
}
