//! A grid shape paired with its spacing.

use crate::error::GridError;
use crate::shape::GridShape;
use crate::spacing::Spacing;
use fdstencil_core::Scalar;

/// Shape and spacing of the grid a row is evaluated on.
///
/// Guarantees `shape.ndim() == spacing.ndim()`.
///
/// # Examples
///
/// ```
/// use fdstencil_grid::{GridGeometry, GridShape, Spacing};
///
/// let geom = GridGeometry::new(
///     GridShape::new(&[16, 16]).unwrap(),
///     Spacing::uniform(2, 1.0f64).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(geom.ndim(), 2);
/// assert_eq!(geom.spacing().get(1), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry<T: Scalar> {
    shape: GridShape,
    spacing: Spacing<T>,
}

impl<T: Scalar> GridGeometry<T> {
    /// Pair a shape with a spacing of the same dimensionality.
    pub fn new(shape: GridShape, spacing: Spacing<T>) -> Result<Self, GridError> {
        if shape.ndim() != spacing.ndim() {
            return Err(GridError::DimensionMismatch {
                expected: shape.ndim(),
                got: spacing.ndim(),
            });
        }
        Ok(Self { shape, spacing })
    }

    /// Unit spacing on every axis of `extents`.
    pub fn unit(extents: &[u32]) -> Result<Self, GridError> {
        let shape = GridShape::new(extents)?;
        let spacing = Spacing::uniform(shape.ndim(), T::one())?;
        Ok(Self { shape, spacing })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// The grid shape.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// The grid spacing.
    pub fn spacing(&self) -> &Spacing<T> {
        &self.spacing
    }
}
