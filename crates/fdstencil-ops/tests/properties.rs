//! Property tests over a fixed zoo of expression trees.

use fdstencil_core::{GridIndex, Scheme};
use fdstencil_ops::{EquationConfig, Expr, StencilOperator, StencilRow};
use fdstencil_test_utils::fixtures::{grid_16x16, sys_nn, sys_pp, u};
use fdstencil_test_utils::{assert_rows_close, sorted_f64};
use proptest::prelude::*;
use std::sync::Arc;

/// Trees valid at every point of a periodic grid.
fn periodic_zoo(cfg: &Arc<EquationConfig>) -> Vec<Expr<f64>> {
    let d = |axis, inner| Expr::d(axis, inner).unwrap();
    vec![
        u(cfg),
        d(0, u(cfg)),
        d(1, u(cfg)),
        d(0, d(1, u(cfg))),
        d(1, d(1, u(cfg))),
        Expr::laplacian(u(cfg)),
        Expr::laplacian_with(u(cfg), Scheme::CentralSymmetric),
        Expr::laplacian(d(0, u(cfg))),
        Expr::upwind(0, u(cfg), -1.0).unwrap(),
        Expr::sum(vec![
            Expr::scaled(0.3, Expr::laplacian(u(cfg))),
            Expr::neg(d(1, u(cfg))),
            u(cfg),
        ])
        .unwrap(),
    ]
}

/// Trees valid at every point of a non-periodic grid.
fn bounded_zoo(cfg: &Arc<EquationConfig>) -> Vec<Expr<f64>> {
    let os = |axis, inner| {
        Expr::derivative(axis, inner, Scheme::CentralOneSidedAtBoundary).unwrap()
    };
    vec![
        os(0, u(cfg)),
        os(1, u(cfg)),
        os(0, os(1, u(cfg))),
        os(1, os(1, u(cfg))),
        Expr::sum(vec![os(0, u(cfg)), Expr::scaled(2.0, os(1, u(cfg)))]).unwrap(),
    ]
}

fn eval(e: &Expr<f64>, at: &[i32], coeff: f64) -> StencilRow<f64> {
    let mut row = StencilRow::new();
    e.row_with(at, &grid_16x16(1.0), coeff, &mut row).unwrap();
    row
}

proptest! {
    #[test]
    fn evaluation_is_linear_in_coefficient(
        pick in 0usize..10,
        x in 0i32..16,
        y in 0i32..16,
        c in -8.0f64..8.0,
    ) {
        prop_assume!(c != 0.0);
        let zoo = periodic_zoo(&sys_pp());
        let tree = &zoo[pick];
        let mut unit = eval(tree, &[x, y], 1.0);
        unit.scale(c);
        let scaled = eval(tree, &[x, y], c);
        assert_rows_close(&scaled, &unit, 1e-9);
    }

    #[test]
    fn one_sided_trees_are_linear_and_total_everywhere(
        pick in 0usize..5,
        x in 0i32..16,
        y in 0i32..16,
        c in -8.0f64..8.0,
    ) {
        prop_assume!(c != 0.0);
        let zoo = bounded_zoo(&sys_nn());
        let tree = &zoo[pick];
        let mut unit = eval(tree, &[x, y], 1.0);
        unit.scale(c);
        let scaled = eval(tree, &[x, y], c);
        assert_rows_close(&scaled, &unit, 1e-9);
    }

    #[test]
    fn constant_annihilating_trees_sum_to_zero(
        pick in 1usize..10,
        x in 0i32..16,
        y in 0i32..16,
    ) {
        // Every tree but the bare field and the sum annihilates constants.
        prop_assume!(pick != 9);
        let zoo = periodic_zoo(&sys_pp());
        let row = eval(&zoo[pick], &[x, y], 1.0);
        let total: f64 = sorted_f64(&row).iter().map(|&(_, v)| v).sum();
        prop_assert!(total.abs() < 1e-12, "weights sum to {}", total);
    }

    #[test]
    fn evaluation_restores_index_even_on_error(
        axis in 0usize..2,
        x in 0i32..16,
        y in 0i32..16,
    ) {
        // Central on a non-periodic grid fails on the edges.
        let cfg = sys_nn();
        let tree = Expr::d(axis, Expr::laplacian(u(&cfg))).unwrap();
        let mut index: GridIndex = GridIndex::from_slice(&[x, y]);
        let mut row = StencilRow::new();
        let (along, across) = if axis == 0 { (x, y) } else { (y, x) };
        let on_edge = !(2..=13).contains(&along) || !(1..=14).contains(&across);
        let result = tree.evaluate(&mut index, &grid_16x16(1.0), &mut row, 1.0);
        prop_assert_eq!(index.as_slice(), &[x, y][..]);
        prop_assert_eq!(result.is_err(), on_edge);
    }

    #[test]
    fn periodic_rows_are_translation_invariant(
        pick in 0usize..10,
        x in 0i32..16,
        y in 0i32..16,
    ) {
        // Shifting the target shifts every column by the same wrapped offset.
        let zoo = periodic_zoo(&sys_pp());
        let tree = &zoo[pick];
        let origin = sorted_f64(&eval(tree, &[0, 0], 1.0));
        let moved = eval(tree, &[x, y], 1.0);
        prop_assert_eq!(origin.len(), moved.len());
        for (col, v) in origin {
            let (cx, cy) = (col % 16, col / 16);
            let target = (cx + i64::from(x)).rem_euclid(16) + 16 * (cy + i64::from(y)).rem_euclid(16);
            let got = moved.get(target);
            prop_assert!(
                got.is_some_and(|g| (g - v).abs() < 1e-12),
                "column {} -> {}: {:?} vs {}", col, target, got, v
            );
        }
    }
}
