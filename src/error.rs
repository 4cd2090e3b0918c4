//! Error types for cachemat

use thiserror::Error;

/// Result type alias using cachemat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cachemat operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Data length does not match the requested shape
    #[error("Size mismatch: shape {rows}x{cols} needs {expected} elements, got {got}")]
    SizeMismatch {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Elements the shape requires
        expected: usize,
        /// Elements actually supplied
        got: usize,
    },

    /// Inversion was requested for a non-square matrix
    #[error("Cannot invert non-square matrix: {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// The matrix is singular (or numerically indistinguishable from singular)
    #[error("Singular matrix: no inverse exists for {dim}x{dim} input")]
    Singular {
        /// Dimension of the square input
        dim: usize,
    },
}

impl Error {
    /// Create a size mismatch error for a shape/data-length disagreement
    pub fn size_mismatch(rows: usize, cols: usize, got: usize) -> Self {
        Self::SizeMismatch {
            rows,
            cols,
            expected: rows * cols,
            got,
        }
    }

    /// Create a non-square error
    pub fn not_square(rows: usize, cols: usize) -> Self {
        Self::NotSquare { rows, cols }
    }

    /// Create a singular matrix error
    pub fn singular(dim: usize) -> Self {
        Self::Singular { dim }
    }
}
