//! Validated square cost matrix.

use crate::error::MatrixError;

/// A square matrix of finite travel costs, stored row-major.
///
/// `cost(i, j)` is the cost of travelling from node `i` to node `j`; the
/// matrix need not be symmetric.
///
/// # Examples
///
/// ```
/// use u_tsp::tsp::CostMatrix;
///
/// let m = CostMatrix::from_rows(&[vec![0.0, 1.0], vec![3.0, 0.0]]).unwrap();
/// assert_eq!(m.node_count(), 2);
/// assert_eq!(m.cost(1, 0), 3.0);
/// assert_eq!(m.path_cost(&[0, 1, 0]), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    n: usize,
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from rows, rejecting empty, ragged, or non-finite input.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n = rows.len();
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        let mut costs = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            if let Some(col) = values.iter().position(|c| !c.is_finite()) {
                return Err(MatrixError::NonFinite { row, col });
            }
            costs.extend_from_slice(values);
        }
        Ok(Self { n, costs })
    }

    /// Builds an `n x n` matrix from a cost function.
    pub fn from_fn<F>(n: usize, mut cost: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        let mut costs = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let c = cost(row, col);
                if !c.is_finite() {
                    return Err(MatrixError::NonFinite { row, col });
                }
                costs.push(c);
            }
        }
        Ok(Self { n, costs })
    }

    /// Number of nodes (rows).
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Cost of the edge `from -> to`.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from * self.n + to]
    }

    /// Outgoing costs of `from`.
    #[inline]
    pub fn row(&self, from: usize) -> &[f64] {
        &self.costs[from * self.n..(from + 1) * self.n]
    }

    /// Sum of edge costs along consecutive positions of `path`.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.cost(w[0], w[1])).sum()
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        assert_eq!(CostMatrix::from_rows(&rows), Err(MatrixError::Empty));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![0.0, 1.0], vec![1.0]];
        assert_eq!(
            CostMatrix::from_rows(&rows),
            Err(MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0]];
        assert!(matches!(
            CostMatrix::from_rows(&rows),
            Err(MatrixError::NotSquare { row: 0, .. })
        ));
    }

    #[test]
    fn test_from_rows_rejects_non_finite() {
        let rows = vec![vec![0.0, f64::NAN], vec![1.0, 0.0]];
        assert_eq!(
            CostMatrix::from_rows(&rows),
            Err(MatrixError::NonFinite { row: 0, col: 1 })
        );
        let rows = vec![vec![0.0, 1.0], vec![f64::INFINITY, 0.0]];
        assert_eq!(
            CostMatrix::from_rows(&rows),
            Err(MatrixError::NonFinite { row: 1, col: 0 })
        );
    }

    #[test]
    fn test_asymmetric_lookup() {
        let m = CostMatrix::try_from(vec![
            vec![0.0, 1.0, 2.0],
            vec![5.0, 0.0, 1.0],
            vec![7.0, 9.0, 0.0],
        ])
        .unwrap();
        assert_eq!(m.cost(0, 1), 1.0);
        assert_eq!(m.cost(1, 0), 5.0);
        assert_eq!(m.row(2), &[7.0, 9.0, 0.0]);
    }

    #[test]
    fn test_path_cost_is_order_sensitive() {
        let m = CostMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0],
            vec![5.0, 0.0, 1.0],
            vec![7.0, 9.0, 0.0],
        ])
        .unwrap();
        assert_eq!(m.path_cost(&[0, 1, 2, 0]), 1.0 + 1.0 + 7.0);
        assert_eq!(m.path_cost(&[0, 2, 1, 0]), 2.0 + 9.0 + 5.0);
        assert_eq!(m.path_cost(&[0]), 0.0);
    }

    #[test]
    fn test_from_fn() {
        let m = CostMatrix::from_fn(4, |i, j| (i as f64 - j as f64).abs()).unwrap();
        assert_eq!(m.cost(0, 3), 3.0);
        assert_eq!(m.cost(3, 1), 2.0);
        assert_eq!(CostMatrix::from_fn(0, |_, _| 0.0), Err(MatrixError::Empty));
        assert_eq!(
            CostMatrix::from_fn(2, |i, _| if i == 1 { f64::NAN } else { 0.0 }),
            Err(MatrixError::NonFinite { row: 1, col: 0 })
        );
    }
}
