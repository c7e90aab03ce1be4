//! Linear-system solvers.
//!
//! Three system types cover the three solution strategies:
//! - [`LinearSystem`]: square systems, Gaussian elimination with partial
//!   pivoting.
//! - [`PosSymLinSystem`]: symmetric positive-definite systems, conjugate
//!   gradient.
//! - [`GeneralLinSystem`]: rectangular or singular systems, Moore-Penrose
//!   pseudo-inverse.
//!
//! Each type borrows a caller-owned [`Matrix`](crate::Matrix) and
//! [`Vector`](crate::Vector), validates compatibility at construction, and
//! solves on private working copies, so the originals are never mutated and
//! several systems over the same data may coexist. The solver choice is
//! made by picking the type; there is no runtime dispatch.
//!
//! # Examples
//!
//! ```rust
//! use linsys::{LinearSystem, Matrix, Vector};
//!
//! let a = Matrix::from_vec(2, 2, vec![3.0, 1.0, 1.0, 2.0]).unwrap();
//! let b = Vector::from_vec(vec![9.0, 8.0]);
//!
//! let system = LinearSystem::new(&a, &b).unwrap();
//! let x = system.solve();
//! assert!((x.get(0).unwrap() - 2.0).abs() < 1e-12);
//! assert!((x.get(1).unwrap() - 3.0).abs() < 1e-12);
//! ```

mod conjugate_gradient;
mod gaussian;
mod general;

pub use conjugate_gradient::PosSymLinSystem;
pub use gaussian::LinearSystem;
pub use general::GeneralLinSystem;
