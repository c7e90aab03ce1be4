use crate::error::{LinAlgError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;
use log::warn;
use ndarray::Array1;

/// Residual norm below which the iteration stops.
const TOLERANCE: f64 = 1e-10;

/// A symmetric (assumed positive-definite) linear system `A x = b`, solved
/// by the conjugate gradient method.
///
/// Symmetry is verified element-wise at construction with exact equality.
/// Positive-definiteness is not checked; on an indefinite matrix the
/// iteration may fail to converge, in which case the last iterate is
/// returned as-is.
pub struct PosSymLinSystem<'a> {
    a: &'a Matrix,
    b: &'a Vector,
    size: usize,
}

impl<'a> PosSymLinSystem<'a> {
    /// Wraps a symmetric matrix and a compatible right-hand side.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleSystem` for a rectangular matrix or mismatched
    /// right-hand side, and `NotSymmetric` if any `A[i][j] != A[j][i]`.
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
        if !is_symmetric(a) {
            return Err(LinAlgError::NotSymmetric);
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

    /// Runs conjugate gradient from `x0 = 0` for at most `2 * size`
    /// iterations.
    ///
    /// Convergence is declared when the residual norm drops below `1e-10`,
    /// checked right after the solution update. Hitting the iteration cap
    /// is not an error: the last iterate is returned and a warning is
    /// logged.
    pub fn solve(&self) -> Vector {
        let a = &self.a.data;
        let n = self.size;

        let mut x = Array1::<f64>::zeros(n);
        let mut r = self.b.data.clone(); // r0 = b - A*0 = b
        let mut p = r.clone();
        let mut rs_old = r.dot(&r);

        let max_iter = 2 * n;
        let mut converged = false;

        for _ in 0..max_iter {
            let ap = a.dot(&p);
            let alpha = rs_old / p.dot(&ap);

            x = &x + &(&p * alpha);
            r = &r - &(&ap * alpha);

            let rs_new = r.dot(&r);
            if rs_new.sqrt() < TOLERANCE {
                converged = true;
                break;
            }

            let beta = rs_new / rs_old;
            p = &r + &(&p * beta);
            rs_old = rs_new;
        }

        if !converged && n > 0 {
            warn!(
                "conjugate gradient stopped after {max_iter} iterations with residual norm above {TOLERANCE:e}"
            );
        }

        Vector::from(x)
    }
}

fn is_symmetric(a: &Matrix) -> bool {
    let n = a.n_rows();
    for i in 0..n {
        for j in 0..n {
            if a.data[[i, j]] != a.data[[j, i]] {
                return false;
            }
        }
    }
    true
}
