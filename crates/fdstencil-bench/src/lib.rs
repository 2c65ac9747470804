//! Benchmark profiles for the fdstencil engine.
//!
//! Provides pre-built expression trees and grids for benchmarking:
//!
//! - [`laplacian_3d_profile`]: 7-point Laplacian on a 32³ periodic grid
//! - [`mixed_derivative_profile`]: nested one-sided mixed partial on a
//!   64² non-periodic grid
//! - [`sum_profile`]: advection-diffusion sum of terms on a 64² grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fdstencil_core::{FieldId, GridIndex, Scheme, StencilError};
use fdstencil_grid::{GridError, GridGeometry, GridShape, Spacing};
use fdstencil_ops::{EquationConfig, Expr, StencilRow};
use std::sync::Arc;

/// An expression tree together with the grid it is evaluated on.
pub struct Profile {
    pub expr: Expr<f64>,
    pub grid: GridGeometry<f64>,
}

impl Profile {
    /// Evaluate the tree at every grid point, reusing one row buffer.
    ///
    /// Returns the total number of entries produced.
    pub fn sweep(&self) -> Result<usize, StencilError> {
        let mut row = StencilRow::with_capacity(16);
        let mut entries = 0;
        for index in self.grid.shape().canonical_ordering() {
            row.clear();
            self.expr.row_with(&index, &self.grid, 1.0, &mut row)?;
            entries += row.len();
        }
        Ok(entries)
    }

    /// All grid points in linear order.
    pub fn points(&self) -> Vec<GridIndex> {
        self.grid.shape().canonical_ordering().collect()
    }
}

fn geometry(extents: &[u32], h: f64) -> Result<GridGeometry<f64>, GridError> {
    GridGeometry::new(
        GridShape::new(extents)?,
        Spacing::uniform(extents.len(), h)?,
    )
}

/// 7-point Laplacian of a single field on a 32³ periodic grid.
pub fn laplacian_3d_profile() -> Result<Profile, Box<dyn std::error::Error>> {
    let cfg = Arc::new(EquationConfig::builder().dims(3).fields(1).periodic_all().build()?);
    let u = Expr::field(&cfg, FieldId(0))?;
    Ok(Profile {
        expr: Expr::laplacian(u),
        grid: geometry(&[32, 32, 32], 1.0 / 32.0)?,
    })
}

/// `∂²u/∂x∂y` with one-sided stencils on a 64² non-periodic grid.
pub fn mixed_derivative_profile() -> Result<Profile, Box<dyn std::error::Error>> {
    let cfg = Arc::new(EquationConfig::equations_2d1());
    let u = Expr::field(&cfg, FieldId(0))?;
    let dy = Expr::derivative(1, u, Scheme::CentralOneSidedAtBoundary)?;
    let dxy = Expr::derivative(0, dy, Scheme::CentralOneSidedAtBoundary)?;
    Ok(Profile {
        expr: dxy,
        grid: geometry(&[64, 64], 1.0 / 64.0)?,
    })
}

/// `ν Δu - a ∂u/∂x - b ∂u/∂y + u` on a 64² periodic two-field grid.
pub fn sum_profile() -> Result<Profile, Box<dyn std::error::Error>> {
    let cfg = Arc::new(EquationConfig::equations_2d2p());
    let u = || Expr::field(&cfg, FieldId(0));
    let expr = Expr::sum(vec![
        Expr::scaled(0.01, Expr::laplacian(u()?)),
        Expr::neg(Expr::upwind(0, u()?, 1.0)?),
        Expr::neg(Expr::upwind(1, u()?, -0.5)?),
        u()?,
    ])?;
    Ok(Profile {
        expr,
        grid: geometry(&[64, 64], 1.0 / 64.0)?,
    })
}
