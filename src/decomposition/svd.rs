use crate::matrix::Matrix;
use crate::vector::Vector;
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Thin singular value decomposition `A = U S V^T` of an `m x n` matrix,
/// with `k = min(m, n)`.
///
/// `u` is `m x k`, `vt` is `k x n`, and `singular_values` holds the `k`
/// non-negative singular values. Entry `i` of `singular_values` corresponds
/// to column `i` of `U` and row `i` of `V^T`; callers that rescale one must
/// keep that correspondence.
#[derive(Debug, Clone)]
pub struct Svd {
    pub u: Matrix,
    pub singular_values: Vector,
    pub vt: Matrix,
}

impl Svd {
    /// Computes the thin SVD of `a`.
    ///
    /// The numerical work happens in nalgebra; this function only moves
    /// data across the boundary.
    pub fn decompose(a: &Matrix) -> Self {
        let (rows, cols) = a.shape();
        let input = DMatrix::from_row_iterator(rows, cols, a.data.iter().copied());

        let svd = nalgebra::SVD::new(input, true, true);
        let u = svd.u.expect("U requested from SVD");
        let vt = svd.v_t.expect("V^T requested from SVD");

        Self {
            u: Matrix::from(to_array2(&u)),
            singular_values: Vector::from(
                svd.singular_values
                    .iter()
                    .copied()
                    .collect::<Array1<f64>>(),
            ),
            vt: Matrix::from(to_array2(&vt)),
        }
    }
}

fn to_array2(m: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}
