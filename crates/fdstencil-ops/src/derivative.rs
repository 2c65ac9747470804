//! First-derivative operator and its per-scheme kernels.
//!
//! Each [`Scheme`] maps to one [`DerivativeKernel`], a table of
//! `(step, weight)` taps selected by where the index sits on the axis.
//! Weights are dimensionless and get divided by the axis spacing at
//! evaluation time.
//!
//! ```text
//! CENTRAL                 (+1, +1/2) (-1, -1/2)
//! ONE_SIDED, lower edge   ( 0, -3/2) (+1, +2)   (+2, -1/2)
//! ONE_SIDED, upper edge   ( 0, +3/2) (-1, -2)   (-2, +1/2)
//! FORWARD                 (+1, +1)   ( 0, -1)
//! BACKWARD                ( 0, +1)   (-1, -1)
//! ```

use crate::config::{EquationConfig, GridPlacement};
use crate::expr::Expr;
use crate::operator::StencilOperator;
use crate::position::StaggeredBasis;
use crate::row::StencilRow;
use crate::walk::with_shift;
use fdstencil_core::{GridIndex, Scalar, Scheme, StencilError};
use fdstencil_grid::{BoundaryPosition, GridGeometry, GridShape};
use std::sync::Arc;

/// `(step along the axis, weight before division by h)`.
pub type Tap = (i32, f64);

const CENTRAL: &[Tap] = &[(1, 0.5), (-1, -0.5)];
const ONE_SIDED_LOWER: &[Tap] = &[(0, -1.5), (1, 2.0), (2, -0.5)];
const ONE_SIDED_UPPER: &[Tap] = &[(0, 1.5), (-1, -2.0), (-2, 0.5)];
const FORWARD: &[Tap] = &[(1, 1.0), (0, -1.0)];
const BACKWARD: &[Tap] = &[(0, 1.0), (-1, -1.0)];

/// Stencil of one derivative scheme.
pub trait DerivativeKernel: Sync {
    /// Taps to apply when the index sits at `at` on the axis.
    fn taps(&self, at: BoundaryPosition) -> &'static [Tap];

    /// Step from the target index to where the stencil is centred,
    /// used to locate staggered samples.
    fn sample_offset(&self, _at: BoundaryPosition) -> i32 {
        0
    }
}

/// `CENTRAL`: symmetric `±1` difference everywhere.
pub struct CentralKernel;

impl DerivativeKernel for CentralKernel {
    fn taps(&self, _at: BoundaryPosition) -> &'static [Tap] {
        CENTRAL
    }
}

/// `CENTRAL_ONE_SIDED_AT_BOUNDARY`: central inside, second-order
/// one-sided on the first and last point of a non-periodic axis.
pub struct OneSidedKernel;

impl DerivativeKernel for OneSidedKernel {
    fn taps(&self, at: BoundaryPosition) -> &'static [Tap] {
        match at {
            BoundaryPosition::Lower => ONE_SIDED_LOWER,
            BoundaryPosition::Interior => CENTRAL,
            BoundaryPosition::Upper => ONE_SIDED_UPPER,
        }
    }

    fn sample_offset(&self, at: BoundaryPosition) -> i32 {
        match at {
            BoundaryPosition::Lower => 1,
            BoundaryPosition::Interior => 0,
            BoundaryPosition::Upper => -1,
        }
    }
}

/// `FORWARD`: first-order, biased towards `+1`.
pub struct ForwardKernel;

impl DerivativeKernel for ForwardKernel {
    fn taps(&self, _at: BoundaryPosition) -> &'static [Tap] {
        FORWARD
    }
}

/// `BACKWARD`: first-order, biased towards `-1`.
pub struct BackwardKernel;

impl DerivativeKernel for BackwardKernel {
    fn taps(&self, _at: BoundaryPosition) -> &'static [Tap] {
        BACKWARD
    }
}

/// `CENTRAL_SYMMETRIC`: the central stencil, ignoring boundaries.
pub struct SymmetricKernel;

impl DerivativeKernel for SymmetricKernel {
    fn taps(&self, _at: BoundaryPosition) -> &'static [Tap] {
        CENTRAL
    }
}

/// The kernel implementing `scheme`.
pub fn kernel(scheme: Scheme) -> &'static dyn DerivativeKernel {
    match scheme {
        Scheme::Central => &CentralKernel,
        Scheme::CentralOneSidedAtBoundary => &OneSidedKernel,
        Scheme::Forward => &ForwardKernel,
        Scheme::Backward => &BackwardKernel,
        Scheme::CentralSymmetric => &SymmetricKernel,
    }
}

/// `∂/∂x_axis` of an inner expression under a chosen scheme.
///
/// Nesting derivatives gives second and mixed partials: each level
/// shifts the current index, delegates, and restores.
#[derive(Clone, Debug, PartialEq)]
pub struct Derivative<T: Scalar> {
    axis: usize,
    scheme: Scheme,
    inner: Box<Expr<T>>,
}

impl<T: Scalar> Derivative<T> {
    /// Differentiate `inner` along `axis`, which must be below the
    /// configuration's dimension count.
    pub fn new(axis: usize, inner: Expr<T>, scheme: Scheme) -> Result<Self, StencilError> {
        let dims = inner.config().dims();
        if axis >= dims {
            return Err(StencilError::ConfigMismatch {
                reason: format!("derivative along axis {axis}, system has {dims} axes"),
            });
        }
        Ok(Self {
            axis,
            scheme,
            inner: Box::new(inner),
        })
    }

    /// Axis of differentiation.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Evaluation scheme.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The differentiated expression.
    pub fn inner(&self) -> &Expr<T> {
        &self.inner
    }
}

impl<T: Scalar> StencilOperator<T> for Derivative<T> {
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
        self.config().check_arity(geom.ndim(), index)?;
        let shape = geom.shape();
        let mode = self.config().boundary(self.axis);
        let at = shape.boundary_position(index[self.axis], self.axis, mode);
        let k = kernel(self.scheme);
        if self.scheme == Scheme::CentralOneSidedAtBoundary && at != BoundaryPosition::Interior {
            log::debug!(
                "one-sided stencil on axis {} at {:?} ({:?} edge)",
                self.axis,
                index,
                at
            );
        }

        let h = geom.spacing().get(self.axis);
        for &(step, w) in k.taps(at) {
            let weight = coeff * T::of(w) / h;
            with_shift(index, self.axis, step, shape, mode, |i| {
                self.inner.evaluate(i, geom, row, weight)
            })?;
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
        self.config().check_arity(shape.ndim(), index)?;
        if self.config().placement() == GridPlacement::Collocated
            || self.scheme == Scheme::CentralSymmetric
        {
            return self.inner.position(index, shape, component, basis);
        }
        if !basis.spans(component, self.axis)? {
            return Ok(None);
        }
        let mode = self.config().boundary(self.axis);
        let at = shape.boundary_position(index[self.axis], self.axis, mode);
        let offset = kernel(self.scheme).sample_offset(at);
        let sampled = shape.shifted(index, self.axis, offset, mode);
        self.inner.position(&sampled, shape, component, basis)
    }
}
