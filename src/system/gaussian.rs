use crate::error::{LinAlgError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;
use ndarray::Array1;

/// A square linear system `A x = b`, solved by Gaussian elimination with
/// partial pivoting.
///
/// Borrows the matrix and right-hand side for its whole lifetime; both must
/// outlive the system, and mutations made through other means between
/// construction and [`solve`](Self::solve) are visible to the solver.
///
/// There is no explicit zero-pivot check: a singular system produces
/// non-finite entries in the returned vector rather than an error.
pub struct LinearSystem<'a> {
    a: &'a Matrix,
    b: &'a Vector,
    size: usize,
}

impl<'a> LinearSystem<'a> {
    /// Wraps a square matrix and a compatible right-hand side.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleSystem` if the matrix is not square or its row
    /// count differs from the vector length.
    pub fn new(a: &'a Matrix, b: &'a Vector) -> Result<Self> {
        if a.n_rows() != a.n_cols() {
            return Err(LinAlgError::IncompatibleSystem(format!(
                "matrix must be square, got {}x{}",
                a.n_rows(),
                a.n_cols()
            )));
        }
        if a.n_rows() != b.len() {
            return Err(LinAlgError::IncompatibleSystem(format!(
                "matrix has {} rows but right-hand side has length {}",
                a.n_rows(),
                b.len()
            )));
        }
        Ok(Self {
            a,
            b,
            size: a.n_rows(),
        })
    }

    /// Returns the system size (number of unknowns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Solves the system and returns a freshly computed solution vector.
    ///
    /// Works on private copies of `A` and `b`; the borrowed originals are
    /// left untouched. At each elimination step the row with the largest
    /// absolute value in the pivot column is selected, first occurrence
    /// winning ties, so results are deterministic.
    pub fn solve(&self) -> Vector {
        let mut a = self.a.data.clone();
        let mut b = self.b.data.clone();
        let n = self.size;

        for i in 0..n {
            // Partial pivoting.
            let mut max_row = i;
            for k in (i + 1)..n {
                if a[[k, i]].abs() > a[[max_row, i]].abs() {
                    max_row = k;
                }
            }

            if max_row != i {
                for j in 0..n {
                    a.swap([i, j], [max_row, j]);
                }
                b.swap(i, max_row);
            }

            // Eliminate column i below the pivot. Columns before i are
            // already zero and are skipped.
            for k in (i + 1)..n {
                let factor = a[[k, i]] / a[[i, i]];
                for j in i..n {
                    a[[k, j]] -= factor * a[[i, j]];
                }
                b[k] -= factor * b[i];
            }
        }

        // Back-substitution.
        let mut x = Array1::zeros(n);
        for i in (0..n).rev() {
            let mut sum = b[i];
            for j in (i + 1)..n {
                sum -= a[[i, j]] * x[j];
            }
            x[i] = sum / a[[i, i]];
        }

        Vector::from(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_solve_three_by_three() {
        let a = Matrix::from(array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]);
        let b = Vector::from_vec(vec![8.0, -11.0, -3.0]);

        let x = LinearSystem::new(&a, &b).unwrap().solve();
        let expected = [2.0, 3.0, -1.0];
        for (computed, want) in x.iter().zip(expected.iter()) {
            assert!((computed - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_pivoting_handles_zero_leading_entry() {
        // Without the row swap the first pivot would be zero.
        let a = Matrix::from(array![[0.0, 1.0], [1.0, 0.0]]);
        let b = Vector::from_vec(vec![2.0, 3.0]);

        let x = LinearSystem::new(&a, &b).unwrap().solve();
        assert!((x.get(0).unwrap() - 3.0).abs() < 1e-12);
        assert!((x.get(1).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let a = Matrix::from(array![[4.0, 1.0], [2.0, 3.0]]);
        let b = Vector::from_vec(vec![1.0, 2.0]);
        let a_before = a.clone();
        let b_before = b.clone();

        let system = LinearSystem::new(&a, &b).unwrap();
        let first = system.solve();
        let second = system.solve();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_rectangular_matrix() {
        let a = Matrix::new(2, 3);
        let b = Vector::new(2);
        assert!(matches!(
            LinearSystem::new(&a, &b),
            Err(LinAlgError::IncompatibleSystem(_))
        ));
    }

    #[test]
    fn test_rejects_mismatched_rhs() {
        let a = Matrix::identity(3);
        let b = Vector::new(2);
        assert!(matches!(
            LinearSystem::new(&a, &b),
            Err(LinAlgError::IncompatibleSystem(_))
        ));
    }

    #[test]
    fn test_singular_system_yields_non_finite() {
        let a = Matrix::from(array![[1.0, 1.0], [1.0, 1.0]]);
        let b = Vector::from_vec(vec![1.0, 2.0]);

        let x = LinearSystem::new(&a, &b).unwrap().solve();
        assert!(x.iter().any(|v| !v.is_finite()));
    }
}
