//! Per-axis boundary handling for structured grids.

/// How a grid axis behaves at its ends.
///
/// This controls *topology* only: which index a step lands on. It says
/// nothing about boundary conditions on field values, which are the
/// equation author's business.
///
/// # Examples
///
/// ```
/// use fdstencil_grid::{BoundaryMode, GridShape};
///
/// let shape = GridShape::new(&[16, 16]).unwrap();
///
/// // Periodic: stepping off the low end wraps to the high end.
/// assert_eq!(shape.step_axis(0, 0, -1, BoundaryMode::Periodic), 15);
///
/// // Non-periodic: the step is returned as-is, possibly off-grid.
/// assert_eq!(shape.step_axis(0, 0, -1, BoundaryMode::NonPeriodic), -1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryMode {
    /// Indices wrap modulo the extent (torus topology).
    Periodic,
    /// The axis terminates; stencils near the ends must be one-sided.
    #[default]
    NonPeriodic,
}

impl BoundaryMode {
    /// `true` for [`Periodic`](Self::Periodic).
    pub fn is_periodic(self) -> bool {
        self == Self::Periodic
    }
}

/// Where an index component sits relative to the ends of its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryPosition {
    /// First point of a non-periodic axis (index 0).
    Lower,
    /// Strictly inside the axis, or anywhere on a periodic axis.
    Interior,
    /// Last point of a non-periodic axis (index `extent - 1`).
    Upper,
}
