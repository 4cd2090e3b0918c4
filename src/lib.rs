//! # cachemat
//!
//! **Memoized dense-matrix inversion.**
//!
//! cachemat wraps a dense matrix and its inverse in a single-slot cache:
//! as long as the underlying matrix has not changed, asking for the inverse
//! is a pure read. Replacing the matrix with an equal one is a no-op; any
//! real change invalidates the cached inverse so the next lookup recomputes.
//!
//! ## What it provides
//!
//! - **`Matrix`**: an owned row-major `f64` matrix; entries may be missing
//!   (`NAN`)
//! - **`MatrixCache`**: one matrix plus its memoized inverse, kept in sync
//! - **`resolve_inverse`**: cache hit, or compute-and-store through a solver
//! - **`InverseSolver` / `LuSolver`**: the inversion primitive behind a
//!   trait, so callers can swap in their own solver
//!
//! ## Quick Start
//!
//! ```rust
//! use cachemat::prelude::*;
//!
//! let m = Matrix::from_slice(&[2.0, 0.0, 0.0, 2.0], 2, 2)?;
//! let mut cache = MatrixCache::new(m);
//! let solver = LuSolver::new();
//!
//! // First call factorizes; the second is a pure cache read.
//! let inv = resolve_inverse(&mut cache, &solver)?.expect("invertible");
//! assert_eq!(inv.get(0, 0), 0.5);
//! let again = resolve_inverse(&mut cache, &solver)?.expect("invertible");
//! assert_eq!(again.get(1, 1), 0.5);
//! # Ok::<(), cachemat::Error>(())
//! ```
//!
//! ## Scope
//!
//! Exactly one cache slot per `MatrixCache`, whole-value replacement, no
//! locking (exclusive access comes from `&mut` borrows), no persistence.
//! Inversion itself is delegated to the [`InverseSolver`] seam; singular or
//! non-square input surfaces as a typed [`Error`] from the solver.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod error;
pub mod matrix;
pub mod solver;

pub use cache::{MatrixCache, resolve_inverse, should_replace};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use solver::{InverseSolver, LuSolver};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cache::{MatrixCache, resolve_inverse, should_replace};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::solver::{InverseSolver, LuSolver};
}
