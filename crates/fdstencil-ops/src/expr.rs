//! Operator expression trees and the row-evaluation entry point.

use crate::config::EquationConfig;
use crate::derivative::Derivative;
use crate::field::FieldRef;
use crate::laplacian::Laplacian;
use crate::operator::StencilOperator;
use crate::position::StaggeredBasis;
use crate::row::StencilRow;
use crate::scaled::Scaled;
use crate::sum::Sum;
use fdstencil_core::{FieldId, GridIndex, Scalar, Scheme, StencilError};
use fdstencil_grid::{GridGeometry, GridShape};
use smallvec::SmallVec;
use std::sync::Arc;

/// A node of an operator expression tree.
///
/// Trees own their children and are acyclic by construction. Build one
/// per equation, then call [`row`](Self::row) once per grid point.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fdstencil_core::{FieldId, Scheme};
/// use fdstencil_grid::GridGeometry;
/// use fdstencil_ops::{EquationConfig, Expr};
///
/// let cfg = Arc::new(EquationConfig::equations_2d1p());
/// let u = Expr::field(&cfg, FieldId(0)).unwrap();
/// let lap = Expr::laplacian(u);
///
/// let grid = GridGeometry::<f64>::unit(&[16, 16]).unwrap();
/// let row = lap.row(&[1, 1], &grid).unwrap();
/// assert_eq!(row.get(17), Some(-4.0));
/// assert_eq!(row.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr<T: Scalar> {
    /// An unknown field at the current point.
    Field(FieldRef),
    /// First derivative along one axis.
    Derivative(Derivative<T>),
    /// Sum of second differences over every axis.
    Laplacian(Laplacian<T>),
    /// Linear combination of terms.
    Sum(Sum<T>),
    /// Constant multiple of a subtree.
    Scaled(Scaled<T>),
}

impl<T: Scalar> Expr<T> {
    /// Unknown field `id` of the system described by `config`.
    pub fn field(config: &Arc<EquationConfig>, id: impl Into<FieldId>) -> Result<Self, StencilError> {
        FieldRef::new(config, id.into()).map(Self::Field)
    }

    /// `∂inner/∂x_axis` under `scheme`.
    pub fn derivative(axis: usize, inner: Self, scheme: Scheme) -> Result<Self, StencilError> {
        Derivative::new(axis, inner, scheme).map(Self::Derivative)
    }

    /// Central-difference `∂inner/∂x_axis`.
    pub fn d(axis: usize, inner: Self) -> Result<Self, StencilError> {
        Self::derivative(axis, inner, Scheme::Central)
    }

    /// Upwind first derivative for a transport velocity of the given sign:
    /// backward for positive, forward for negative, central for zero.
    pub fn upwind(axis: usize, inner: Self, velocity: T) -> Result<Self, StencilError> {
        let scheme = if velocity > T::zero() {
            Scheme::Backward
        } else if velocity < T::zero() {
            Scheme::Forward
        } else {
            Scheme::Central
        };
        Self::derivative(axis, inner, scheme)
    }

    /// Central Laplacian of `inner`.
    pub fn laplacian(inner: Self) -> Self {
        Self::laplacian_with(inner, Scheme::Central)
    }

    /// Laplacian of `inner` under `scheme`.
    ///
    /// Tags without a Laplacian stencil are accepted here and reported
    /// when the expression is evaluated.
    pub fn laplacian_with(inner: Self, scheme: Scheme) -> Self {
        Self::Laplacian(Laplacian::new(inner, scheme))
    }

    /// Sum of `terms`; see [`Sum::new`].
    pub fn sum(terms: Vec<Self>) -> Result<Self, StencilError> {
        Sum::new(terms).map(Self::Sum)
    }

    /// `factor · inner`.
    pub fn scaled(factor: T, inner: Self) -> Self {
        Self::Scaled(Scaled::new(factor, inner))
    }

    /// `-inner`.
    pub fn neg(inner: Self) -> Self {
        Self::scaled(-T::one(), inner)
    }

    /// Evaluate at `index` with coefficient 1 into a fresh row.
    ///
    /// # Errors
    ///
    /// - [`StencilError::ConfigMismatch`] if the grid or index dimension
    ///   differs from the configuration's, or `T` is not the configured
    ///   scalar type.
    /// - [`StencilError::OutOfRangeIndex`] if `index` is not on the grid,
    ///   or a stencil walk leaves a non-periodic axis.
    /// - [`StencilError::UnsupportedScheme`] if a Laplacian in the tree
    ///   carries a tag it has no stencil for.
    pub fn row(&self, index: &[i32], grid: &GridGeometry<T>) -> Result<StencilRow<T>, StencilError> {
        let mut row = StencilRow::new();
        self.row_with(index, grid, T::one(), &mut row)?;
        Ok(row)
    }

    /// Evaluate at `index` with coefficient `coeff`, accumulating into `row`.
    ///
    /// On error `row` may hold a partial stencil and should be discarded.
    pub fn row_with(
        &self,
        index: &[i32],
        grid: &GridGeometry<T>,
        coeff: T,
        row: &mut StencilRow<T>,
    ) -> Result<(), StencilError> {
        let cfg = self.config();
        if T::KIND != cfg.scalar() {
            return Err(StencilError::ConfigMismatch {
                reason: format!(
                    "evaluating in {} but the system is declared {}",
                    T::KIND,
                    cfg.scalar()
                ),
            });
        }
        cfg.check_arity(grid.ndim(), index)?;
        let shape = grid.shape();
        if let Some(axis) = shape.out_of_range_axis(index) {
            return Err(StencilError::OutOfRangeIndex {
                index: SmallVec::from_slice(index),
                axis,
                extent: shape.extent(axis),
            });
        }

        let before = row.len();
        let mut working: GridIndex = SmallVec::from_slice(index);
        self.evaluate(&mut working, grid, row, coeff)?;
        debug_assert_eq!(working.as_slice(), index);
        log::trace!(
            "row at {:?}: {} new entries, {} total",
            index,
            row.len() - before,
            row.len()
        );
        Ok(())
    }

    fn node(&self) -> &dyn StencilOperator<T> {
        match self {
            Self::Field(n) => n,
            Self::Derivative(n) => n,
            Self::Laplacian(n) => n,
            Self::Sum(n) => n,
            Self::Scaled(n) => n,
        }
    }
}

impl<T: Scalar> StencilOperator<T> for Expr<T> {
    fn config(&self) -> &Arc<EquationConfig> {
        self.node().config()
    }

    fn evaluate(
        &self,
        index: &mut GridIndex,
        geom: &GridGeometry<T>,
        row: &mut StencilRow<T>,
        coeff: T,
    ) -> Result<(), StencilError> {
        self.node().evaluate(index, geom, row, coeff)
    }

    fn position(
        &self,
        index: &[i32],
        shape: &GridShape,
        component: usize,
        basis: &StaggeredBasis,
    ) -> Result<Option<GridIndex>, StencilError> {
        self.node().position(index, shape, component, basis)
    }
}
