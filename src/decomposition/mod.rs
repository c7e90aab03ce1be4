//! Matrix decompositions.
//!
//! Currently this is the singular value decomposition bridge used by
//! [`Matrix::pseudo_inverse`](crate::Matrix::pseudo_inverse) and, through
//! it, by [`GeneralLinSystem`](crate::GeneralLinSystem). The factorization
//! itself is delegated to nalgebra; this module only converts between the
//! crate's types and the solver library's.
//!
//! # Examples
//!
//! ```rust
//! use linsys::{Matrix, Svd};
//!
//! let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! let svd = Svd::decompose(&a);
//!
//! assert_eq!(svd.u.shape(), (2, 2));
//! assert_eq!(svd.singular_values.len(), 2);
//! assert_eq!(svd.vt.shape(), (2, 3));
//! ```

mod svd;

pub use svd::Svd;
