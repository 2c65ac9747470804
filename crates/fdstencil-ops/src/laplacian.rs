//! The Laplacian: sum of central second differences over every axis.

use crate::config::EquationConfig;
use crate::expr::Expr;
use crate::operator::StencilOperator;
use crate::position::StaggeredBasis;
use crate::row::StencilRow;
use crate::walk::with_shift;
use fdstencil_core::{GridIndex, Scalar, Scheme, StencilError};
use fdstencil_grid::{GridGeometry, GridShape};
use std::sync::Arc;

/// `Δ E` of an inner expression.
///
/// Only [`Scheme::Central`] and [`Scheme::CentralSymmetric`] have a
/// stencil. Any other tag is accepted at construction and rejected with
/// [`StencilError::UnsupportedScheme`] when evaluated.
///
/// ```text
/// CENTRAL            per axis: E(i+1) + E(i-1) - 2 E(i),  / h²
/// CENTRAL_SYMMETRIC  per axis: E(i+2) + E(i-2) - 2 E(i),  / 4h²
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Laplacian<T: Scalar> {
    scheme: Scheme,
    inner: Box<Expr<T>>,
}

impl<T: Scalar> Laplacian<T> {
    /// Laplacian of `inner` under `scheme`.
    pub fn new(inner: Expr<T>, scheme: Scheme) -> Self {
        Self {
            scheme,
            inner: Box::new(inner),
        }
    }

    /// Implementation tag.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The expression the Laplacian is applied to.
    pub fn inner(&self) -> &Expr<T> {
        &self.inner
    }

    /// `(step, extra divisor)` for the supported tags.
    fn stencil(&self) -> Result<(i32, f64), StencilError> {
        match self.scheme {
            Scheme::Central => Ok((1, 1.0)),
            Scheme::CentralSymmetric => Ok((2, 4.0)),
            other => {
                log::warn!("Laplacian evaluated with unsupported scheme {other}");
                Err(StencilError::UnsupportedScheme {
                    operator: "Laplacian",
                    scheme: other,
                })
            }
        }
    }
}

impl<T: Scalar> StencilOperator<T> for Laplacian<T> {
    fn config(&self) -> &Arc<EquationConfig> {
        self.inner.config()
    }

    fn evaluate(
        &self,
        index: &mut GridIndex,
        geom: &GridGeometry<T>,
        row: &mut StencilRow<T>,
        coeff: T,
    ) -> Result<(), StencilError> {
        let (step, divisor) = self.stencil()?;
        let cfg = self.config();
        cfg.check_arity(geom.ndim(), index)?;
        let shape = geom.shape();
        let two = T::of(2.0);

        for axis in 0..cfg.dims() {
            let h = geom.spacing().get(axis);
            let w = coeff / (h * h * T::of(divisor));
            let mode = cfg.boundary(axis);
            with_shift(index, axis, step, shape, mode, |i| {
                self.inner.evaluate(i, geom, row, w)
            })?;
            with_shift(index, axis, -step, shape, mode, |i| {
                self.inner.evaluate(i, geom, row, w)
            })?;
            self.inner.evaluate(index, geom, row, -two * w)?;
        }
        Ok(())
    }

    fn position(
        &self,
        index: &[i32],
        shape: &GridShape,
        component: usize,
        basis: &StaggeredBasis,
    ) -> Result<Option<GridIndex>, StencilError> {
        self.stencil()?;
        self.inner.position(index, shape, component, basis)
    }
}
