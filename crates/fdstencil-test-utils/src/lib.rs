//! Test utilities for fdstencil development.
//!
//! Provides canonical equation systems and grids in [`fixtures`], plus
//! row assertions that compare a [`StencilRow`] against an expected
//! column list with a float tolerance.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use fdstencil_core::{ColumnId, Scalar};
use fdstencil_ops::StencilRow;

/// Absolute tolerance used by [`assert_row`].
pub const ROW_TOLERANCE: f64 = 1e-12;

/// Assert that `row` holds exactly the columns in `expected`, each
/// within [`ROW_TOLERANCE`] of its expected coefficient.
///
/// Order of `expected` does not matter.
#[track_caller]
pub fn assert_row<T: Scalar>(row: &StencilRow<T>, expected: &[(ColumnId, f64)]) {
    assert_row_within(row, expected, ROW_TOLERANCE);
}

/// [`assert_row`] with an explicit tolerance.
#[track_caller]
pub fn assert_row_within<T: Scalar>(row: &StencilRow<T>, expected: &[(ColumnId, f64)], tol: f64) {
    let got = sorted_f64(row);
    let mut want = expected.to_vec();
    want.sort_unstable_by_key(|&(c, _)| c);

    let got_cols: Vec<_> = got.iter().map(|&(c, _)| c).collect();
    let want_cols: Vec<_> = want.iter().map(|&(c, _)| c).collect();
    assert_eq!(got_cols, want_cols, "column sets differ: got {got:?}, want {want:?}");

    for (&(col, g), &(_, w)) in got.iter().zip(&want) {
        assert!(
            (g - w).abs() <= tol,
            "column {col}: got {g}, want {w} (tolerance {tol})"
        );
    }
}

/// Assert two rows are equal entry by entry within `tol`.
#[track_caller]
pub fn assert_rows_close<T: Scalar>(a: &StencilRow<T>, b: &StencilRow<T>, tol: f64) {
    assert_row_within(a, &sorted_f64(b), tol);
}

/// The row's entries as `f64`, sorted by column.
pub fn sorted_f64<T: Scalar>(row: &StencilRow<T>) -> Vec<(ColumnId, f64)> {
    row.clone()
        .into_sorted_vec()
        .into_iter()
        .map(|(c, v)| (c, v.to_f64().unwrap_or(f64::NAN)))
        .collect()
}
