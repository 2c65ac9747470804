//! Constant multiple of a subtree.

use crate::config::EquationConfig;
use crate::expr::Expr;
use crate::operator::StencilOperator;
use crate::position::StaggeredBasis;
use crate::row::StencilRow;
use fdstencil_core::{GridIndex, Scalar, StencilError};
use fdstencil_grid::{GridGeometry, GridShape};
use std::sync::Arc;

/// `factor · E`, for terms such as `ν Δu` or `-∂p/∂x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Scaled<T: Scalar> {
    factor: T,
    inner: Box<Expr<T>>,
}

impl<T: Scalar> Scaled<T> {
    /// Multiply `inner` by `factor`.
    pub fn new(factor: T, inner: Expr<T>) -> Self {
        Self {
            factor,
            inner: Box::new(inner),
        }
    }

    /// The constant multiplier.
    pub fn factor(&self) -> T {
        self.factor
    }

    /// The scaled expression.
    pub fn inner(&self) -> &Expr<T> {
        &self.inner
    }
}

impl<T: Scalar> StencilOperator<T> for Scaled<T> {
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
        self.inner.evaluate(index, geom, row, coeff * self.factor)
    }

    fn position(
        &self,
        index: &[i32],
        shape: &GridShape,
        component: usize,
        basis: &StaggeredBasis,
    ) -> Result<Option<GridIndex>, StencilError> {
        self.inner.position(index, shape, component, basis)
    }
}
