//! Integration tests for resolve_inverse: memoization, invalid input, errors

mod common;

use cachemat::prelude::*;
use common::{assert_allclose_f64, CountingSolver};

// ============================================================================
// Memoization Tests
// ============================================================================

#[test]
fn test_second_resolve_is_a_cache_hit() {
    let m = Matrix::from_slice(&[4.0, 7.0, 2.0, 6.0], 2, 2).unwrap();
    let mut cache = MatrixCache::new(m);
    let solver = CountingSolver::new();

    let first = resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .expect("matrix is invertible")
        .clone();
    let second = resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .expect("matrix is invertible")
        .clone();

    assert_eq!(first, second);
    assert_eq!(solver.calls(), 1, "second resolve must not recompute");
}

#[test]
fn test_matrix_change_triggers_recompute() {
    let mut cache = MatrixCache::new(Matrix::from_slice(&[2.0, 0.0, 0.0, 2.0], 2, 2).unwrap());
    let solver = CountingSolver::new();

    resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .expect("matrix is invertible");
    assert_eq!(solver.calls(), 1);

    // One differing element invalidates the memo
    cache.set_matrix(Matrix::from_slice(&[2.0, 0.0, 0.0, 4.0], 2, 2).unwrap());
    assert!(cache.inverse().is_none());

    let inv = resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .expect("matrix is invertible");
    assert_allclose_f64(inv.data(), &[0.5, 0.0, 0.0, 0.25], 1e-12, 1e-12, "recomputed inverse");
    assert_eq!(solver.calls(), 2);
}

#[test]
fn test_dimension_change_triggers_recompute() {
    let mut cache = MatrixCache::new(Matrix::identity(2));
    let solver = CountingSolver::new();

    resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .expect("matrix is invertible");

    cache.set_matrix(Matrix::identity(3));
    resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .expect("matrix is invertible");

    assert_eq!(solver.calls(), 2);
}

#[test]
fn test_identical_replacement_stays_memoized() {
    let values = [3.0, 1.0, 1.0, 2.0];
    let mut cache = MatrixCache::new(Matrix::from_slice(&values, 2, 2).unwrap());
    let solver = CountingSolver::new();

    resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .expect("matrix is invertible");

    cache.set_matrix(Matrix::from_slice(&values, 2, 2).unwrap());
    resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .expect("matrix is invertible");

    assert_eq!(solver.calls(), 1, "equal replacement must not invalidate");
}

// ============================================================================
// Missing-Value Short-Circuit Tests
// ============================================================================

#[test]
fn test_missing_entries_resolve_to_none_without_solver_call() {
    let m = Matrix::from_slice(&[1.0, f64::NAN, 0.0, 1.0], 2, 2).unwrap();
    let mut cache = MatrixCache::new(m);
    let solver = CountingSolver::new();

    let result = resolve_inverse(&mut cache, &solver).expect("resolve should succeed");
    assert!(result.is_none(), "missing entries yield no inverse");
    assert_eq!(solver.calls(), 0, "solver must never see an invalid matrix");

    // Still no inverse cached afterwards
    assert!(cache.inverse().is_none());
}

#[test]
fn test_recovery_after_missing_entries_are_replaced() {
    let mut cache = MatrixCache::new(Matrix::from_slice(&[1.0, f64::NAN], 1, 2).unwrap());
    let solver = CountingSolver::new();

    assert!(resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .is_none());

    cache.set_matrix(Matrix::identity(2));
    let inv = resolve_inverse(&mut cache, &solver)
        .expect("resolve should succeed")
        .expect("matrix is invertible");
    assert_allclose_f64(inv.data(), &[1.0, 0.0, 0.0, 1.0], 1e-12, 1e-12, "inverse of I");
    assert_eq!(solver.calls(), 1);
}

// ============================================================================
// Round-Trip and Edge Cases
// ============================================================================

#[test]
fn test_round_trip_known_inverse() {
    let m = Matrix::from_slice(&[2.0, 0.0, 0.0, 2.0], 2, 2).unwrap();
    let mut cache = MatrixCache::new(m);

    let inv = resolve_inverse(&mut cache, &LuSolver::new())
        .expect("resolve should succeed")
        .expect("matrix is invertible");

    assert_allclose_f64(inv.data(), &[0.5, 0.0, 0.0, 0.5], 1e-12, 1e-12, "inverse of 2I");
}

#[test]
fn test_empty_matrix_resolves_to_empty_inverse() {
    let mut cache = MatrixCache::default();
    let inv = resolve_inverse(&mut cache, &LuSolver::new())
        .expect("resolve should succeed")
        .expect("0x0 is its own inverse");
    assert!(inv.is_empty());
}

// ============================================================================
// Solver Error Propagation Tests
// ============================================================================

#[test]
fn test_singular_matrix_surfaces_typed_error() {
    let mut cache = MatrixCache::new(Matrix::from_slice(&[1.0, 2.0, 2.0, 4.0], 2, 2).unwrap());

    let err = resolve_inverse(&mut cache, &LuSolver::new()).unwrap_err();
    assert_eq!(err, Error::Singular { dim: 2 });
    assert!(cache.inverse().is_none(), "failed compute must store nothing");
}

#[test]
fn test_non_square_matrix_surfaces_typed_error() {
    let m = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    let mut cache = MatrixCache::new(m);

    let err = resolve_inverse(&mut cache, &LuSolver::new()).unwrap_err();
    assert_eq!(err, Error::NotSquare { rows: 2, cols: 3 });
}
