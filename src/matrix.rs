use crate::decomposition::Svd;
use crate::error::{LinAlgError, Result};
use crate::vector::Vector;
use ndarray::{Array2, ArrayView1, ArrayViewMut1};
use std::fmt;
use std::ops::{Mul, Neg};

/// Singular values at or below this threshold are treated as zero when
/// forming the pseudo-inverse. Matches the tolerance used for rank
/// decisions throughout the crate.
const PSEUDO_INVERSE_TOLERANCE: f64 = 1e-10;

/// An owned `rows x cols` matrix of `f64` entries, stored row-major.
///
/// Dimensions are fixed at construction; `Clone` produces an independent
/// deep copy. Entry access is checked and available zero-based
/// (`get`/`set`) and one-based (`at`/`set_at`); whole rows can be borrowed
/// as ndarray views with `row`/`row_mut` and their one-based aliases.
///
/// # Examples
///
/// ```rust
/// use linsys::Matrix;
///
/// let a = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
/// assert_eq!(a.det().unwrap(), 10.0);
///
/// let inv = a.inverse().unwrap();
/// let product = a.matmul(&inv).unwrap();
/// assert!((product.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) data: Array2<f64>,
}

impl Matrix {
    /// Creates a zero matrix with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(LinAlgError::SizeMismatch(format!(
                "data length {} does not fill a {rows}x{cols} matrix",
                data.len()
            )));
        }
        let data = Array2::from_shape_vec((rows, cols), data).expect("length checked above");
        Ok(Self { data })
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Returns the number of columns.
    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    /// Returns the shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    fn is_square(&self) -> bool {
        self.n_rows() == self.n_cols()
    }

    /// Reads the entry at zero-based `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_indices(row, col)?;
        Ok(self.data[[row, col]])
    }

    /// Returns a mutable reference to the entry at zero-based `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        self.check_indices(row, col)?;
        Ok(&mut self.data[[row, col]])
    }

    /// Writes the entry at zero-based `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Reads the entry at one-based `(row, col)` (valid range `[1, n]`).
    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        self.check_indices_one_based(row, col)?;
        Ok(self.data[[row - 1, col - 1]])
    }

    /// Returns a mutable reference to the entry at one-based `(row, col)`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        self.check_indices_one_based(row, col)?;
        Ok(&mut self.data[[row - 1, col - 1]])
    }

    /// Writes the entry at one-based `(row, col)`.
    pub fn set_at(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    /// Borrows an entire row (zero-based) as a read-only view.
    pub fn row(&self, row: usize) -> Result<ArrayView1<'_, f64>> {
        self.check_row(row)?;
        Ok(self.data.row(row))
    }

    /// Borrows an entire row (zero-based) as a mutable view.
    pub fn row_mut(&mut self, row: usize) -> Result<ArrayViewMut1<'_, f64>> {
        self.check_row(row)?;
        Ok(self.data.row_mut(row))
    }

    /// Borrows an entire row (one-based) as a read-only view.
    pub fn row_at(&self, row: usize) -> Result<ArrayView1<'_, f64>> {
        self.check_row_one_based(row)?;
        Ok(self.data.row(row - 1))
    }

    /// Borrows an entire row (one-based) as a mutable view.
    pub fn row_at_mut(&mut self, row: usize) -> Result<ArrayViewMut1<'_, f64>> {
        self.check_row_one_based(row)?;
        Ok(self.data.row_mut(row - 1))
    }

    /// Exchanges two rows in place. Used by pivoting.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is invalid.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<()> {
        self.check_row(r1)?;
        self.check_row(r2)?;
        for j in 0..self.n_cols() {
            self.data.swap([r1, j], [r2, j]);
        }
        Ok(())
    }

    /// Element-wise sum. Both row and column counts must agree.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self::from(&self.data + &other.data))
    }

    /// Element-wise difference. Both row and column counts must agree.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self::from(&self.data - &other.data))
    }

    /// Matrix-matrix product; the result is `self.rows x other.cols`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `self.cols == other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.n_cols() != other.n_rows() {
            return Err(LinAlgError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.n_rows(),
                self.n_cols(),
                other.n_rows(),
                other.n_cols()
            )));
        }
        Ok(Self::from(self.data.dot(&other.data)))
    }

    /// Matrix-vector product; the result has `self.rows` entries.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `self.cols == vector.len()`.
    pub fn matvec(&self, vector: &Vector) -> Result<Vector> {
        if self.n_cols() != vector.len() {
            return Err(LinAlgError::DimensionMismatch(format!(
                "cannot multiply {}x{} by vector of length {}",
                self.n_rows(),
                self.n_cols(),
                vector.len()
            )));
        }
        Ok(Vector::from(self.data.dot(&vector.data)))
    }

    /// Returns a new matrix with every entry scaled by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::from(&self.data * scalar)
    }

    /// Returns the `cols x rows` transpose.
    pub fn transpose(&self) -> Self {
        Self::from(self.data.t().to_owned())
    }

    /// Returns the submatrix obtained by removing one row and one column.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is invalid.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        self.check_indices(row, col)?;
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let (rows, cols) = self.shape();
        let data = Array2::from_shape_fn((rows - 1, cols - 1), |(i, j)| {
            let src_row = if i < row { i } else { i + 1 };
            let src_col = if j < col { j } else { j + 1 };
            self.data[[src_row, src_col]]
        });
        Self { data }
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Direct formulas for 1x1 and 2x2; the general case recurses over
    /// minors and is exponential in the matrix size, which is acceptable
    /// for the small systems this crate targets.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a rectangular matrix.
    pub fn det(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(LinAlgError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> f64 {
        let n = self.n_rows();
        if n == 1 {
            return self.data[[0, 0]];
        }
        if n == 2 {
            return self.data[[0, 0]] * self.data[[1, 1]] - self.data[[0, 1]] * self.data[[1, 0]];
        }

        let mut det = 0.0;
        for j in 0..n {
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            det += sign * self.data[[0, j]] * self.minor_unchecked(0, j).det_unchecked();
        }
        det
    }

    /// Inverse via the adjugate: transpose of the cofactor matrix scaled by
    /// `1 / det`.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a rectangular matrix and `Singular` when the
    /// determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(LinAlgError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }

        let det = self.det_unchecked();
        if det == 0.0 {
            return Err(LinAlgError::Singular);
        }

        let n = self.n_rows();
        if n == 1 {
            return Ok(Self::from_vec(1, 1, vec![1.0 / det]).expect("1x1 data"));
        }

        let mut cofactors = Self::new(n, n);
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                cofactors.data[[i, j]] = sign * self.minor_unchecked(i, j).det_unchecked();
            }
        }
        Ok(cofactors.transpose().scale(1.0 / det))
    }

    /// Moore-Penrose pseudo-inverse via singular value decomposition.
    ///
    /// Decomposes `A = U S V^T`, inverts every singular value above
    /// `1e-10`, zeroes out the rest, and forms `A+ = V S+ U^T`. Defined for
    /// any shape, including rank-deficient input.
    pub fn pseudo_inverse(&self) -> Self {
        let svd = Svd::decompose(self);
        let sigma_inv = svd.singular_values.data.mapv(|s| {
            if s > PSEUDO_INVERSE_TOLERANCE {
                1.0 / s
            } else {
                0.0
            }
        });
        let pinv = svd
            .vt
            .data
            .t()
            .dot(&Array2::from_diag(&sigma_inv))
            .dot(&svd.u.data.t());
        Self { data: pinv }
    }

    /// Writes a human-readable dump to stdout. Diagnostic only; the format
    /// is not a stable serialization.
    pub fn print(&self) {
        println!("{self}");
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.n_rows() {
            return Err(LinAlgError::IndexOutOfRange {
                index: row,
                len: self.n_rows(),
            });
        }
        Ok(())
    }

    fn check_row_one_based(&self, row: usize) -> Result<()> {
        if row < 1 || row > self.n_rows() {
            return Err(LinAlgError::IndexOutOfRange {
                index: row,
                len: self.n_rows(),
            });
        }
        Ok(())
    }

    fn check_indices(&self, row: usize, col: usize) -> Result<()> {
        self.check_row(row)?;
        if col >= self.n_cols() {
            return Err(LinAlgError::IndexOutOfRange {
                index: col,
                len: self.n_cols(),
            });
        }
        Ok(())
    }

    fn check_indices_one_based(&self, row: usize, col: usize) -> Result<()> {
        self.check_row_one_based(row)?;
        if col < 1 || col > self.n_cols() {
            return Err(LinAlgError::IndexOutOfRange {
                index: col,
                len: self.n_cols(),
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinAlgError::SizeMismatch(format!(
                "matrix shapes {}x{} and {}x{}",
                self.n_rows(),
                self.n_cols(),
                other.n_rows(),
                other.n_cols()
            )));
        }
        Ok(())
    }
}

impl From<Array2<f64>> for Matrix {
    fn from(data: Array2<f64>) -> Self {
        Self { data }
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        Matrix::from(self.data.mapv(|v| -v))
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        Matrix::from(-self.data)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        Matrix::from(self.data * scalar)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}
