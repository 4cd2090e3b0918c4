//! Dense inversion behind a trait seam
//!
//! Inversion is the one external collaborator of the cache layer. It sits
//! behind [`InverseSolver`] so callers can substitute a different backend
//! (or a counting double in tests) without touching the cache logic.
//! [`LuSolver`] is the bundled implementation.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Pivot threshold below which a matrix is reported as singular
pub const DEFAULT_PIVOT_EPS: f64 = 1e-12;

/// Contract for the dense-inversion primitive
///
/// Implementations expect a square, numerically invertible matrix and
/// return its multiplicative inverse. Violations of that precondition are
/// the solver's to report ([`Error::NotSquare`], [`Error::Singular`]);
/// screening for missing entries is not — that happens in
/// [`crate::cache::resolve_inverse`] before a solver is ever invoked.
pub trait InverseSolver {
    /// Compute the multiplicative inverse of `m`
    fn inverse(&self, m: &Matrix) -> Result<Matrix>;
}

/// Matrix inversion via LU decomposition with partial pivoting
///
/// Factorizes PA = LU in place, then solves for each column of the inverse
/// by forward and back substitution. A pivot with absolute value below the
/// configured epsilon stops the factorization with [`Error::Singular`].
///
/// The 0×0 matrix is square and inverts to the 0×0 matrix.
#[derive(Clone, Debug)]
pub struct LuSolver {
    eps: f64,
}

impl LuSolver {
    /// Create a solver with [`DEFAULT_PIVOT_EPS`]
    pub fn new() -> Self {
        Self {
            eps: DEFAULT_PIVOT_EPS,
        }
    }

    /// Create a solver with an explicit singularity threshold
    pub fn with_eps(eps: f64) -> Self {
        Self { eps }
    }
}

impl Default for LuSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl InverseSolver for LuSolver {
    fn inverse(&self, m: &Matrix) -> Result<Matrix> {
        if !m.is_square() {
            return Err(Error::not_square(m.rows(), m.cols()));
        }
        let n = m.rows();
        let mut lu = m.data().to_vec();
        let mut perm: Vec<usize> = (0..n).collect();

        // LU factorization with partial pivoting
        for k in 0..n {
            let mut max_val = lu[k * n + k].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val.is_nan() || max_val < self.eps {
                return Err(Error::singular(n));
            }

            if max_row != k {
                perm.swap(k, max_row);
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
            }

            let pivot = lu[k * n + k];
            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    lu[i * n + j] -= factor * lu[k * n + j];
                }
            }
        }

        // Solve LUx = Pe_col for each column of the inverse
        let mut inv = vec![0.0; n * n];
        for col in 0..n {
            let mut b = vec![0.0; n];
            b[perm[col]] = 1.0;

            // Forward substitution (Ly = Pb)
            let mut y = vec![0.0; n];
            for i in 0..n {
                let mut sum = b[i];
                for j in 0..i {
                    sum -= lu[i * n + j] * y[j];
                }
                y[i] = sum;
            }

            // Back substitution (Ux = y)
            let mut x = vec![0.0; n];
            for i in (0..n).rev() {
                let mut sum = y[i];
                for j in (i + 1)..n {
                    sum -= lu[i * n + j] * x[j];
                }
                x[i] = sum / lu[i * n + i];
            }

            for i in 0..n {
                inv[i * n + col] = x[i];
            }
        }

        Matrix::from_slice(&inv, n, n)
    }
}
