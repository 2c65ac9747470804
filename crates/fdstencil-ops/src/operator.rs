//! The capability every expression node implements.

use crate::config::EquationConfig;
use crate::position::StaggeredBasis;
use crate::row::StencilRow;
use fdstencil_core::{GridIndex, Scalar, StencilError};
use fdstencil_grid::{GridGeometry, GridShape};
use std::sync::Arc;

/// A node of an operator expression tree.
///
/// # Contract
///
/// - [`evaluate`](Self::evaluate) adds `coeff` times the node's stencil
///   at `index` into `row`. It may step `index` while walking, but must
///   hand it back unchanged, including when it returns `Err`.
/// - Evaluation is linear in `coeff`.
/// - Neither method panics on an index or grid with the wrong number of
///   axes; `evaluate` returns [`StencilError::ConfigMismatch`] for it.
/// - [`position`](Self::position) reports where the node samples
///   `component` of a staggered unknown, or `None` if it does not
///   sample that component at all.
pub trait StencilOperator<T: Scalar> {
    /// The configuration this node was built against.
    fn config(&self) -> &Arc<EquationConfig>;

    /// Accumulate `coeff` times this node's stencil at `index` into `row`.
    fn evaluate(
        &self,
        index: &mut GridIndex,
        geom: &GridGeometry<T>,
        row: &mut StencilRow<T>,
        coeff: T,
    ) -> Result<(), StencilError>;

    /// Grid index at which `component` is sampled for a target `index`.
    fn position(
        &self,
        index: &[i32],
        shape: &GridShape,
        component: usize,
        basis: &StaggeredBasis,
    ) -> Result<Option<GridIndex>, StencilError>;
}
