//! Canonical equation systems and grids.
//!
//! The 16×16 systems match the ones the stencil numbers in the
//! integration tests are quoted against:
//!
//! - [`sys_nn`]: 2-D, one field, non-periodic on both axes.
//! - [`sys_pp`]: 2-D, one field, periodic on both axes.
//! - [`sys_pn`]: periodic in x, non-periodic in y.
//! - [`syss_nn`] / [`syss_pp`]: staggered two-field variants.

use fdstencil_core::{FieldId, Scalar};
use fdstencil_grid::{BoundaryMode, GridGeometry, GridShape, Spacing};
use fdstencil_ops::{EquationConfig, Expr, GridPlacement};
use std::sync::Arc;

/// Side length of the canonical square grid.
pub const N: u32 = 16;

pub fn sys_nn() -> Arc<EquationConfig> {
    Arc::new(EquationConfig::equations_2d1())
}

pub fn sys_pp() -> Arc<EquationConfig> {
    Arc::new(EquationConfig::equations_2d1p())
}

/// Periodic along axis 0, non-periodic along axis 1.
pub fn sys_pn() -> Arc<EquationConfig> {
    mixed_2d(BoundaryMode::Periodic, BoundaryMode::NonPeriodic)
}

/// Non-periodic along axis 0, periodic along axis 1.
pub fn sys_np() -> Arc<EquationConfig> {
    mixed_2d(BoundaryMode::NonPeriodic, BoundaryMode::Periodic)
}

pub fn syss_nn() -> Arc<EquationConfig> {
    Arc::new(EquationConfig::equations_2d2().with_placement(GridPlacement::Staggered))
}

pub fn syss_pp() -> Arc<EquationConfig> {
    Arc::new(EquationConfig::equations_2d2p().with_placement(GridPlacement::Staggered))
}

fn mixed_2d(x: BoundaryMode, y: BoundaryMode) -> Arc<EquationConfig> {
    let cfg = EquationConfig::builder()
        .dims(2)
        .fields(1)
        .boundary(&[x, y])
        .build()
        .expect("two boundary modes for a 2-D system are valid");
    Arc::new(cfg)
}

/// 16×16 grid with step `h` on both axes.
pub fn grid_16x16<T: Scalar>(h: T) -> GridGeometry<T> {
    grid(&[N, N], h)
}

/// Grid of `extents` with the same step `h` on every axis.
pub fn grid<T: Scalar>(extents: &[u32], h: T) -> GridGeometry<T> {
    let shape = GridShape::new(extents).expect("fixture extents are valid");
    let spacing = Spacing::uniform(extents.len(), h).expect("fixture spacing is valid");
    GridGeometry::new(shape, spacing).expect("shape and spacing agree")
}

/// Field 0 of `cfg`.
pub fn u<T: Scalar>(cfg: &Arc<EquationConfig>) -> Expr<T> {
    Expr::field(cfg, FieldId(0)).expect("every fixture system has field 0")
}
