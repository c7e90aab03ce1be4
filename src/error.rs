//! Error types shared by the vector, matrix, and solver APIs.
//!
//! Every failure is detected at the violating call or construction and
//! returned immediately; there is no retry or recovery inside the crate.

use thiserror::Error;

/// Typed failures for vector/matrix arithmetic and system construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinAlgError {
    /// Element-wise operands have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Matrix-matrix or matrix-vector product shapes are incompatible.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A square-only operation (determinant, inverse) was requested on a
    /// rectangular matrix.
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// Indexed access outside the valid range, zero- or one-based.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The matrix has zero determinant and cannot be inverted.
    #[error("matrix is singular")]
    Singular,

    /// A linear system was constructed from a matrix and right-hand side
    /// that do not describe a solvable shape.
    #[error("incompatible system: {0}")]
    IncompatibleSystem(String),

    /// A symmetric solver was constructed with a non-symmetric matrix.
    #[error("matrix is not symmetric")]
    NotSymmetric,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinAlgError>;
