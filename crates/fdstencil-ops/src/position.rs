//! Basis directions for staggered unknowns.

use fdstencil_core::{ConfigError, StencilError};
use smallvec::SmallVec;

/// Signed per-axis direction of one vector component.
pub type Direction = SmallVec<[i8; 4]>;

/// One direction per vector component of a staggered unknown.
///
/// Component `c` is stored on the face/edge normal to its direction.
/// A derivative along axis `a` samples component `c` only if
/// `direction(c)[a] != 0`.
///
/// # Examples
///
/// ```
/// use fdstencil_ops::StaggeredBasis;
///
/// let basis = StaggeredBasis::axes(2);
/// assert_eq!(basis.direction(1).unwrap(), &[0, 1]);
/// assert!(basis.direction(2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaggeredBasis {
    dims: usize,
    directions: Vec<Direction>,
}

impl StaggeredBasis {
    /// Build a basis from explicit directions, each with `dims` entries.
    pub fn new(dims: usize, directions: Vec<Direction>) -> Result<Self, ConfigError> {
        if dims == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        for (component, dir) in directions.iter().enumerate() {
            if dir.len() != dims {
                return Err(ConfigError::BasisArity {
                    component,
                    dims,
                    got: dir.len(),
                });
            }
        }
        Ok(Self { dims, directions })
    }

    /// The canonical basis: component `k` points along axis `k`.
    pub fn axes(dims: usize) -> Self {
        let directions = (0..dims)
            .map(|k| (0..dims).map(|a| i8::from(a == k)).collect())
            .collect();
        Self { dims, directions }
    }

    /// Number of axes every direction spans.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Number of vector components.
    pub fn components(&self) -> usize {
        self.directions.len()
    }

    /// Direction of `component`.
    pub fn direction(&self, component: usize) -> Result<&[i8], StencilError> {
        self.directions
            .get(component)
            .map(|d| d.as_slice())
            .ok_or_else(|| StencilError::ConfigMismatch {
                reason: format!(
                    "component {component} requested, basis has {}",
                    self.directions.len()
                ),
            })
    }

    /// `true` if `component` has a non-zero entry along `axis`.
    pub fn spans(&self, component: usize, axis: usize) -> Result<bool, StencilError> {
        let dir = self.direction(component)?;
        Ok(dir.get(axis).is_some_and(|&d| d != 0))
    }
}
