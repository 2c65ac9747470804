//! Points that sit on a non-periodic edge of one axis while the other
//! axis is periodic.

use fdstencil_core::{GridIndex, Scheme, StencilError};
use fdstencil_ops::{Expr, StencilOperator, StencilRow};
use fdstencil_test_utils::assert_row;
use fdstencil_test_utils::fixtures::{grid_16x16, sys_np, sys_pn, u};

fn one_sided(axis: usize, inner: Expr<f64>) -> Expr<f64> {
    Expr::derivative(axis, inner, Scheme::CentralOneSidedAtBoundary).unwrap()
}

#[test]
fn periodic_axis_wraps_at_corner() {
    let cfg = sys_pn();
    let dx = Expr::d(0, u(&cfg)).unwrap();
    assert_row(
        &dx.row(&[0, 0], &grid_16x16(1.0)).unwrap(),
        &[(1, 0.5), (15, -0.5)],
    );
}

#[test]
fn one_sided_on_periodic_axis_stays_central_at_corner() {
    let cfg = sys_pn();
    let dx = one_sided(0, u(&cfg));
    assert_row(
        &dx.row(&[0, 0], &grid_16x16(1.0)).unwrap(),
        &[(1, 0.5), (15, -0.5)],
    );
}

#[test]
fn one_sided_on_non_periodic_axis_at_corner() {
    let cfg = sys_pn();
    let dy = one_sided(1, u(&cfg));
    assert_row(
        &dy.row(&[0, 0], &grid_16x16(1.0)).unwrap(),
        &[(0, -1.5), (16, 2.0), (32, -0.5)],
    );
}

#[test]
fn central_on_non_periodic_axis_at_corner_fails() {
    let cfg = sys_pn();
    let dy = Expr::d(1, u(&cfg)).unwrap();
    assert!(matches!(
        dy.row(&[0, 0], &grid_16x16(1.0)),
        Err(StencilError::OutOfRangeIndex { axis: 1, .. })
    ));
}

#[test]
fn wrapped_outer_over_one_sided_inner() {
    let cfg = sys_pn();
    let dxy = Expr::d(0, one_sided(1, u(&cfg))).unwrap();
    let row = dxy.row(&[0, 0], &grid_16x16(1.0)).unwrap();
    assert_row(
        &row,
        &[
            (1, -0.75),
            (17, 1.0),
            (33, -0.25),
            (15, 0.75),
            (31, -1.0),
            (47, 0.25),
        ],
    );
}

#[test]
fn one_sided_outer_over_wrapped_inner_at_upper_edge() {
    let cfg = sys_pn();
    let dyx = one_sided(1, Expr::d(0, u(&cfg)).unwrap());
    let row = dyx.row(&[0, 15], &grid_16x16(1.0)).unwrap();
    assert_row(
        &row,
        &[
            (241, 0.75),
            (255, -0.75),
            (225, -1.0),
            (239, 1.0),
            (209, 0.25),
            (223, -0.25),
        ],
    );
}

#[test]
fn transposed_mix_at_opposite_corner() {
    let cfg = sys_np();
    let g = grid_16x16(1.0);
    let dx = one_sided(0, u(&cfg));
    let dy = Expr::d(1, u(&cfg)).unwrap();
    assert_row(
        &dx.row(&[15, 0], &g).unwrap(),
        &[(15, 1.5), (14, -2.0), (13, 0.5)],
    );
    assert_row(&dy.row(&[15, 0], &g).unwrap(), &[(31, 0.5), (255, -0.5)]);
}

#[test]
fn every_corner_evaluates_with_one_sided_on_both_axes() {
    for cfg in [sys_pn(), sys_np()] {
        let g = grid_16x16(1.0);
        let grad = Expr::sum(vec![one_sided(0, u(&cfg)), one_sided(1, u(&cfg))]).unwrap();
        for at in [[0, 0], [15, 0], [0, 15], [15, 15]] {
            let row = grad.row(&at, &g).unwrap();
            let total: f64 = row.iter().map(|(_, v)| v).sum();
            assert!(total.abs() < 1e-12, "{at:?}: weights sum to {total}");
        }
    }
}

#[test]
fn laplacian_fails_on_non_periodic_edge_and_restores_index() {
    let cfg = sys_pn();
    let lap = Expr::laplacian(u(&cfg));
    let g = grid_16x16(1.0);
    let mut index: GridIndex = GridIndex::from_slice(&[0, 0]);
    let mut row = StencilRow::new();
    let err = lap.evaluate(&mut index, &g, &mut row, 1.0).unwrap_err();
    assert!(matches!(err, StencilError::OutOfRangeIndex { axis: 1, .. }));
    assert_eq!(index.as_slice(), &[0, 0]);

    // The x-part wrapped fine before y failed.
    assert!(lap.row(&[0, 1], &g).is_ok());
}
