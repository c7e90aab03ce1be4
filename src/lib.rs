//! Dense linear algebra for small systems.
//!
//! This crate provides owned [`Vector`] and [`Matrix`] types with checked
//! arithmetic and dual (zero- and one-based) indexing, plus three solver
//! types over borrowed data:
//! - [`LinearSystem`]: Gaussian elimination with partial pivoting for
//!   square systems
//! - [`PosSymLinSystem`]: conjugate gradient for symmetric
//!   positive-definite systems
//! - [`GeneralLinSystem`]: Moore-Penrose pseudo-inverse (via SVD) for
//!   rectangular or singular systems
//!
//! The [`dataset`] and [`metrics`] modules are thin collaborators for the
//! regression demos: CSV ingestion, train/test splitting, and error
//! metrics.
//!
//! # Examples
//!
//! ```rust
//! use linsys::{LinearSystem, Matrix, Vector};
//!
//! let a = Matrix::from_vec(3, 3, vec![
//!     2.0, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]).unwrap();
//! let b = Vector::from_vec(vec![8.0, -11.0, -3.0]);
//!
//! let x = LinearSystem::new(&a, &b).unwrap().solve();
//! assert!((x.get(0).unwrap() - 2.0).abs() < 1e-9);
//! assert!((x.get(1).unwrap() - 3.0).abs() < 1e-9);
//! assert!((x.get(2).unwrap() + 1.0).abs() < 1e-9);
//! ```

pub mod dataset;
pub mod decomposition;
pub mod error;
pub mod matrix;
pub mod metrics;
pub mod system;
pub mod vector;

pub use dataset::{DataError, Dataset};
pub use decomposition::Svd;
pub use error::{LinAlgError, Result};
pub use matrix::Matrix;
pub use system::{GeneralLinSystem, LinearSystem, PosSymLinSystem};
pub use vector::Vector;
