//! Error types for stencil evaluation and equation-system configuration.
//!
//! Stencil evaluation is pure computation: there are no retries. Any
//! error terminates the current row and is surfaced to the assembler,
//! which decides whether to abort or skip the row.

use crate::id::GridIndex;
use crate::scheme::Scheme;
use thiserror::Error;

/// Errors raised while building or evaluating an operator expression.
///
/// A row that was being populated when one of these was returned is
/// not guaranteed to be consistent and must be discarded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StencilError {
    /// The operator has no stencil for the requested scheme tag.
    ///
    /// Reported at evaluation time, never at construction.
    #[error("{operator}: scheme {scheme} is not defined, only CENTRAL, FORWARD, BACKWARD derivative are defined")]
    UnsupportedScheme {
        /// Name of the operator that rejected the tag.
        operator: &'static str,
        /// The rejected tag.
        scheme: Scheme,
    },
    /// A stencil walk stepped off a non-periodic axis.
    ///
    /// Selecting a boundary-aware scheme near non-periodic edges is the
    /// caller's responsibility; the engine does not recover from this.
    #[error("grid index {index:?} is outside [0, {extent}) on non-periodic axis {axis}")]
    OutOfRangeIndex {
        /// The offending (already shifted) index.
        index: GridIndex,
        /// Axis on which the index left the grid.
        axis: usize,
        /// Extent of that axis.
        extent: u32,
    },
    /// Expressions, configuration and grid disagree with each other.
    #[error("configuration mismatch: {reason}")]
    ConfigMismatch {
        /// What disagreed.
        reason: String,
    },
}

/// Errors detected while validating an equation-system configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The system was declared with zero spatial dimensions.
    #[error("equation system must have at least one dimension")]
    ZeroDimensions,
    /// The system was declared with zero unknown fields.
    #[error("equation system must have at least one unknown field")]
    ZeroFields,
    /// The per-axis boundary array does not have one entry per axis.
    #[error("boundary modes given for {got} axes, system has {dims}")]
    BoundaryArity {
        /// Declared dimension count.
        dims: usize,
        /// Number of boundary modes supplied.
        got: usize,
    },
    /// A staggered basis direction does not have one entry per axis.
    #[error("basis direction {component} has {got} entries, system has {dims} axes")]
    BasisArity {
        /// Index of the malformed basis vector.
        component: usize,
        /// Declared dimension count.
        dims: usize,
        /// Length of the supplied basis vector.
        got: usize,
    },
}
