//! Linear combination of terms sharing one configuration.

use crate::config::EquationConfig;
use crate::expr::Expr;
use crate::operator::StencilOperator;
use crate::position::StaggeredBasis;
use crate::row::StencilRow;
use fdstencil_core::{GridIndex, Scalar, StencilError};
use fdstencil_grid::{GridGeometry, GridShape};
use std::sync::Arc;

/// `E1 + E2 + ... + En`.
///
/// Every term is evaluated with the same coefficient and the row's
/// additive merge combines them. The last term is the reference term:
/// it carries the shared configuration and answers position queries.
#[derive(Clone, Debug, PartialEq)]
pub struct Sum<T: Scalar> {
    terms: Vec<Expr<T>>,
}

impl<T: Scalar> Sum<T> {
    /// Combine `terms`, which must be non-empty and agree on configuration.
    pub fn new(terms: Vec<Expr<T>>) -> Result<Self, StencilError> {
        let Some(reference) = terms.last() else {
            return Err(StencilError::ConfigMismatch {
                reason: "sum of zero terms has no configuration".to_string(),
            });
        };
        let cfg = reference.config();
        for (n, term) in terms.iter().enumerate() {
            let other = term.config();
            if !Arc::ptr_eq(cfg, other) && **cfg != **other {
                return Err(StencilError::ConfigMismatch {
                    reason: format!("sum term {n} was built against a different equation system"),
                });
            }
        }
        Ok(Self { terms })
    }

    /// The terms, in evaluation order.
    pub fn terms(&self) -> &[Expr<T>] {
        &self.terms
    }

    fn reference(&self) -> &Expr<T> {
        // Non-empty by construction.
        &self.terms[self.terms.len() - 1]
    }
}

impl<T: Scalar> StencilOperator<T> for Sum<T> {
    fn config(&self) -> &Arc<EquationConfig> {
        self.reference().config()
    }

    fn evaluate(
        &self,
        index: &mut GridIndex,
        geom: &GridGeometry<T>,
        row: &mut StencilRow<T>,
        coeff: T,
    ) -> Result<(), StencilError> {
        for term in &self.terms {
            term.evaluate(index, geom, row, coeff)?;
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
        self.reference().position(index, shape, component, basis)
    }
}
