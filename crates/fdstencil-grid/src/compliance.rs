//! Grid-shape compliance test helpers.
//!
//! These functions verify that a [`GridShape`] satisfies the invariants
//! the stencil engine relies on. Reused across shape test cases of
//! different dimensionality.

use crate::boundary::BoundaryMode;
use crate::shape::GridShape;
use indexmap::IndexSet;

/// Assert that `canonical_ordering` yields exactly `cell_count` unique points.
pub fn assert_canonical_ordering_complete(shape: &GridShape) {
    let ordering: Vec<_> = shape.canonical_ordering().collect();
    assert_eq!(
        ordering.len() as i64,
        shape.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        shape.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        ordering.len(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that the n-th point of the canonical ordering folds to `n`.
pub fn assert_canonical_ordering_matches_fold(shape: &GridShape) {
    for (n, index) in shape.canonical_ordering().enumerate() {
        assert_eq!(
            shape.fold(&index),
            n as i64,
            "canonical point {index:?} folds to {} instead of {n}",
            shape.fold(&index)
        );
    }
}

/// Assert that `unfold(fold(i)) == i` for every point.
pub fn assert_fold_unfold_bijective(shape: &GridShape) {
    for index in shape.canonical_ordering() {
        let linear = shape.fold(&index);
        let back = shape
            .unfold(linear)
            .expect("unfold of a folded in-range index should succeed");
        assert_eq!(back, index, "unfold(fold({index:?})) = {back:?}");
    }
}

/// Assert that a periodic `+1` step followed by a `-1` step is the identity
/// on every axis of every point, and never leaves the grid.
pub fn assert_periodic_steps_invertible(shape: &GridShape) {
    for index in shape.canonical_ordering() {
        for axis in 0..shape.ndim() {
            let fwd = shape.shifted(&index, axis, 1, BoundaryMode::Periodic);
            assert!(shape.contains(&fwd), "{fwd:?} left the grid");
            let back = shape.shifted(&fwd, axis, -1, BoundaryMode::Periodic);
            assert_eq!(back, index, "periodic step on axis {axis} not invertible");
        }
    }
}

/// Run all compliance checks on a shape.
pub fn run_full_compliance(shape: &GridShape) {
    assert_canonical_ordering_complete(shape);
    assert_canonical_ordering_matches_fold(shape);
    assert_fold_unfold_bijective(shape);
    assert_periodic_steps_invertible(shape);
}
