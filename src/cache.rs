//! Single-slot memoization of a matrix inverse
//!
//! [`MatrixCache`] holds one matrix and, once computed, its inverse.
//! Replacing the matrix through [`MatrixCache::set_matrix`] runs the
//! [`should_replace`] decision: an equal matrix leaves the cache untouched,
//! a real change swaps the matrix in and drops the stale inverse in the
//! same call. [`resolve_inverse`] then answers inverse lookups from the
//! cache, computing through an [`InverseSolver`] only when it has to.

use tracing::warn;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::solver::InverseSolver;

/// Decide whether `candidate` should replace `cached`.
///
/// Rules, first match wins:
/// 1. shape differs → replace
/// 2. `cached` has a missing entry → replace (an invalid cache cannot serve
///    future lookups, so any candidate wins)
/// 3. any element differs (`f64` `!=`, so a NAN present only in the
///    candidate counts as a difference) → replace
/// 4. otherwise → keep the cached matrix
///
/// Pure: neither input is mutated.
pub fn should_replace(cached: &Matrix, candidate: &Matrix) -> bool {
    if cached.rows() != candidate.rows() || cached.cols() != candidate.cols() {
        return true;
    }
    if cached.has_missing() {
        return true;
    }
    cached
        .data()
        .iter()
        .zip(candidate.data())
        .any(|(a, b)| a != b)
}

/// One matrix and its memoized inverse.
///
/// Invariant: the stored inverse, when present, is the inverse of the stored
/// matrix. `set_matrix` maintains it by clearing the inverse in the same
/// call that swaps the matrix. Instances own their state independently;
/// two caches never share storage.
///
/// # Example
/// ```
/// use cachemat::{Matrix, MatrixCache};
///
/// let mut cache = MatrixCache::new(Matrix::identity(2));
/// assert!(cache.inverse().is_none());
///
/// cache.set_inverse(Matrix::identity(2));
/// // Setting an equal matrix keeps the memoized inverse...
/// cache.set_matrix(Matrix::identity(2));
/// assert!(cache.inverse().is_some());
/// // ...while a real change drops it.
/// cache.set_matrix(Matrix::zeros(2, 2));
/// assert!(cache.inverse().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatrixCache {
    matrix: Matrix,
    inverse: Option<Matrix>,
}

impl MatrixCache {
    /// Create a cache holding `matrix`, with no inverse yet
    pub fn new(matrix: Matrix) -> Self {
        Self {
            matrix,
            inverse: None,
        }
    }

    /// Currently cached matrix
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Replace the cached matrix if [`should_replace`] says the change is
    /// real; clears the cached inverse on replacement. A no-op otherwise.
    pub fn set_matrix(&mut self, new: Matrix) {
        if should_replace(&self.matrix, &new) {
            self.matrix = new;
            self.inverse = None;
        }
    }

    /// Unconditionally store `inverse` as the memoized inverse
    pub fn set_inverse(&mut self, inverse: Matrix) {
        self.inverse = Some(inverse);
    }

    /// Memoized inverse, `None` until computed or after invalidation
    #[inline]
    pub fn inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }
}

/// Return the inverse of the cache's matrix, memoized.
///
/// - Matrix has missing entries: logs a warning and returns `Ok(None)` —
///   no inverse is available and the solver is never invoked.
/// - No inverse cached yet: computes `solver.inverse(..)`, stores the
///   result in the cache, and returns it. Solver failures
///   ([`crate::Error::Singular`], [`crate::Error::NotSquare`]) propagate
///   to the caller and nothing is stored.
/// - Inverse already cached: pure read, no solver call.
///
/// The only side effect is the single `set_inverse` on the compute path.
///
/// # Example
/// ```
/// use cachemat::prelude::*;
///
/// let mut cache = MatrixCache::new(Matrix::from_slice(&[2.0, 0.0, 0.0, 2.0], 2, 2)?);
/// let inv = resolve_inverse(&mut cache, &LuSolver::new())?.expect("invertible");
/// assert_eq!(inv.get(0, 0), 0.5);
/// # Ok::<(), cachemat::Error>(())
/// ```
pub fn resolve_inverse<'a, S: InverseSolver>(
    cache: &'a mut MatrixCache,
    solver: &S,
) -> Result<Option<&'a Matrix>> {
    if cache.matrix().has_missing() {
        warn!(
            rows = cache.matrix().rows(),
            cols = cache.matrix().cols(),
            "matrix contains missing entries; no inverse available"
        );
        return Ok(None);
    }
    if cache.inverse().is_none() {
        let inverse = solver.inverse(cache.matrix())?;
        cache.set_inverse(inverse);
    }
    Ok(cache.inverse())
}
