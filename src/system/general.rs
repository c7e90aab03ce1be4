use crate::error::{LinAlgError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// A possibly rectangular or singular linear system `A x = b`, solved
/// through the Moore-Penrose pseudo-inverse.
///
/// For an overdetermined system the result is the least-squares solution;
/// for an underdetermined one it is the minimum-norm solution. Tolerance
/// handling lives entirely in
/// [`Matrix::pseudo_inverse`](crate::Matrix::pseudo_inverse).
pub struct GeneralLinSystem<'a> {
    a: &'a Matrix,
    b: &'a Vector,
}

impl<'a> GeneralLinSystem<'a> {
    /// Wraps an `m x n` matrix and a right-hand side of length `m`.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleSystem` if the row count differs from the
    /// vector length. Squareness is not required.
    pub fn new(a: &'a Matrix, b: &'a Vector) -> Result<Self> {
        if a.n_rows() != b.len() {
            return Err(LinAlgError::IncompatibleSystem(format!(
                "matrix has {} rows but right-hand side has length {}",
                a.n_rows(),
                b.len()
            )));
        }
        Ok(Self { a, b })
    }

    /// Computes `A+ b`.
    pub fn solve_moore_penrose(&self) -> Vector {
        let pinv = self.a.pseudo_inverse();
        Vector::from(pinv.data.dot(&self.b.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::LinearSystem;
    use ndarray::array;

    #[test]
    fn test_matches_gaussian_elimination_on_square_system() {
        let a = Matrix::from(array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]);
        let b = Vector::from_vec(vec![8.0, -11.0, -3.0]);

        let pinv_solution = GeneralLinSystem::new(&a, &b).unwrap().solve_moore_penrose();
        let direct = LinearSystem::new(&a, &b).unwrap().solve();

        for (x, y) in pinv_solution.iter().zip(direct.iter()) {
            assert!((x - y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_overdetermined_consistent_system() {
        // b lies in the column space, so the least-squares fit is exact.
        let a = Matrix::from(array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
        let b = Vector::from_vec(vec![1.0, 2.0, 3.0]);

        let x = GeneralLinSystem::new(&a, &b).unwrap().solve_moore_penrose();
        assert!((x.get(0).unwrap() - 1.0).abs() < 1e-8);
        assert!((x.get(1).unwrap() - 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_underdetermined_minimum_norm_solution() {
        let a = Matrix::from(array![[1.0, 1.0]]);
        let b = Vector::from_vec(vec![2.0]);

        let x = GeneralLinSystem::new(&a, &b).unwrap().solve_moore_penrose();
        assert!((x.get(0).unwrap() - 1.0).abs() < 1e-8);
        assert!((x.get(1).unwrap() - 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_rejects_mismatched_rhs() {
        let a = Matrix::new(3, 2);
        let b = Vector::new(2);
        assert!(matches!(
            GeneralLinSystem::new(&a, &b),
            Err(LinAlgError::IncompatibleSystem(_))
        ));
    }
}
