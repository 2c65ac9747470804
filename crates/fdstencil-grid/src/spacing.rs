//! Per-axis grid spacing.

use crate::error::GridError;
use fdstencil_core::Scalar;
use smallvec::SmallVec;

/// Immutable per-axis step sizes `h_a > 0`.
///
/// Stencil coefficients are divided by these to turn discrete
/// differences into derivative approximations.
#[derive(Clone, Debug, PartialEq)]
pub struct Spacing<T: Scalar> {
    steps: SmallVec<[T; 4]>,
}

impl<T: Scalar> Spacing<T> {
    /// Create a spacing from explicit per-axis steps.
    ///
    /// Every step must be finite and strictly positive.
    pub fn new(steps: &[T]) -> Result<Self, GridError> {
        if steps.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        for (axis, &h) in steps.iter().enumerate() {
            if !h.is_finite() || h <= T::zero() {
                return Err(GridError::InvalidSpacing {
                    axis,
                    value: h.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(Self {
            steps: SmallVec::from_slice(steps),
        })
    }

    /// The same step `h` on each of `dims` axes.
    pub fn uniform(dims: usize, h: T) -> Result<Self, GridError> {
        let steps: SmallVec<[T; 4]> = SmallVec::from_elem(h, dims);
        Self::new(&steps)
    }

    /// Spacing of a vertex-centred grid of `extents` points spanning a box
    /// of side `lengths`: `h_a = lengths[a] / (extents[a] - 1)`.
    ///
    /// An axis with a single point gets `h_a = lengths[a]`.
    pub fn from_domain(lengths: &[T], extents: &[u32]) -> Result<Self, GridError> {
        if lengths.len() != extents.len() {
            return Err(GridError::DimensionMismatch {
                expected: extents.len(),
                got: lengths.len(),
            });
        }
        let steps: SmallVec<[T; 4]> = lengths
            .iter()
            .zip(extents)
            .map(|(&l, &n)| {
                let intervals = n.saturating_sub(1).max(1);
                l / T::of(f64::from(intervals))
            })
            .collect();
        Self::new(&steps)
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.steps.len()
    }

    /// Step size along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= ndim()`.
    pub fn get(&self, axis: usize) -> T {
        self.steps[axis]
    }

    /// All steps, axis 0 first.
    pub fn as_slice(&self) -> &[T] {
        &self.steps
    }
}
