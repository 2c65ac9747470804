//! Error types for grid construction and index queries.

use fdstencil_core::GridIndex;
use thiserror::Error;

/// Errors arising from grid construction or index conversion.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// Attempted to construct a grid with no axes.
    #[error("grid must have at least one axis")]
    EmptyGrid,
    /// An axis was given extent zero.
    #[error("axis {axis} has extent 0")]
    ZeroExtent {
        /// The offending axis.
        axis: usize,
    },
    /// An axis extent does not fit the signed index type.
    #[error("axis {axis} extent {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// The offending axis.
        axis: usize,
        /// The requested extent.
        value: u32,
        /// The maximum allowed extent.
        max: u32,
    },
    /// The product of all extents overflows the column id type.
    #[error("total cell count overflows i64")]
    CellCountOverflow,
    /// A spacing entry is not a finite positive number.
    #[error("spacing on axis {axis} must be finite and positive, got {value}")]
    InvalidSpacing {
        /// The offending axis.
        axis: usize,
        /// The rejected value, widened to `f64` for reporting.
        value: f64,
    },
    /// Two objects that must share a dimensionality do not.
    #[error("dimension mismatch: expected {expected} axes, got {got}")]
    DimensionMismatch {
        /// Dimensionality of the grid.
        expected: usize,
        /// Dimensionality that was supplied.
        got: usize,
    },
    /// An index or linear id lies outside the grid.
    #[error("index {index:?} out of bounds: {bounds}")]
    IndexOutOfBounds {
        /// The offending index.
        index: GridIndex,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}
