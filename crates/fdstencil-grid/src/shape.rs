//! N-dimensional structured grid shape: folding, unfolding and stepping.

use crate::boundary::{BoundaryMode, BoundaryPosition};
use crate::error::GridError;
use fdstencil_core::GridIndex;
use smallvec::SmallVec;

/// Immutable per-axis extents of a structured grid.
///
/// Linear ids are row-major with **axis 0 varying fastest**:
///
/// ```text
/// linear = i_0 + n_0 * (i_1 + n_1 * (i_2 + ...))
/// ```
///
/// This ordering is shared by the whole engine and by the column-id
/// encoding handed to the external assembler, so it must not change.
///
/// # Examples
///
/// ```
/// use fdstencil_grid::GridShape;
///
/// let shape = GridShape::new(&[16, 16]).unwrap();
/// assert_eq!(shape.cell_count(), 256);
/// assert_eq!(shape.linear_index(&[1, 1]).unwrap(), 17);
/// assert_eq!(shape.unfold(17).unwrap().as_slice(), &[1, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    extents: SmallVec<[u32; 4]>,
    strides: SmallVec<[i64; 4]>,
    cell_count: i64,
}

impl GridShape {
    /// Maximum extent per axis.
    ///
    /// Index components are `i32`. Half the positive range is kept free
    /// so a stencil walk can leave a non-periodic axis without
    /// overflowing.
    pub const MAX_EXTENT: u32 = (i32::MAX / 2) as u32;

    /// Create a shape from per-axis extents.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for zero axes,
    /// `Err(GridError::ZeroExtent)` for an empty axis,
    /// `Err(GridError::DimensionTooLarge)` for an extent above
    /// [`MAX_EXTENT`](Self::MAX_EXTENT), and
    /// `Err(GridError::CellCountOverflow)` if the cell count overflows.
    pub fn new(extents: &[u32]) -> Result<Self, GridError> {
        if extents.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let mut strides = SmallVec::with_capacity(extents.len());
        let mut cell_count: i64 = 1;
        for (axis, &extent) in extents.iter().enumerate() {
            if extent == 0 {
                return Err(GridError::ZeroExtent { axis });
            }
            if extent > Self::MAX_EXTENT {
                return Err(GridError::DimensionTooLarge {
                    axis,
                    value: extent,
                    max: Self::MAX_EXTENT,
                });
            }
            strides.push(cell_count);
            cell_count = cell_count
                .checked_mul(i64::from(extent))
                .ok_or(GridError::CellCountOverflow)?;
        }
        Ok(Self {
            extents: SmallVec::from_slice(extents),
            strides,
            cell_count,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// Extent of `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= ndim()`.
    pub fn extent(&self, axis: usize) -> u32 {
        self.extents[axis]
    }

    /// All extents, axis 0 first.
    pub fn extents(&self) -> &[u32] {
        &self.extents
    }

    /// Total number of grid points.
    pub fn cell_count(&self) -> i64 {
        self.cell_count
    }

    /// First axis on which `index` lies outside `[0, extent)`, if any.
    ///
    /// Assumes `index.len() == ndim()`.
    pub fn out_of_range_axis(&self, index: &[i32]) -> Option<usize> {
        index
            .iter()
            .zip(&self.extents)
            .position(|(&i, &n)| i < 0 || i as u32 >= n)
    }

    /// `true` if `index` has the right arity and lies inside the grid.
    pub fn contains(&self, index: &[i32]) -> bool {
        index.len() == self.ndim() && self.out_of_range_axis(index).is_none()
    }

    /// Fold an in-range index into its linear id, axis 0 fastest.
    ///
    /// No bounds checking is performed beyond a debug assertion; use
    /// [`linear_index`](Self::linear_index) for untrusted input.
    pub fn fold(&self, index: &[i32]) -> i64 {
        debug_assert!(self.contains(index), "fold of {index:?} outside {:?}", self.extents);
        index
            .iter()
            .zip(&self.strides)
            .map(|(&i, &s)| i64::from(i) * s)
            .sum()
    }

    /// Checked version of [`fold`](Self::fold).
    pub fn linear_index(&self, index: &[i32]) -> Result<i64, GridError> {
        if index.len() != self.ndim() {
            return Err(GridError::DimensionMismatch {
                expected: self.ndim(),
                got: index.len(),
            });
        }
        if self.out_of_range_axis(index).is_some() {
            return Err(GridError::IndexOutOfBounds {
                index: SmallVec::from_slice(index),
                bounds: self.bounds_description(),
            });
        }
        Ok(self.fold(index))
    }

    /// Inverse of [`fold`](Self::fold).
    pub fn unfold(&self, linear: i64) -> Result<GridIndex, GridError> {
        if linear < 0 || linear >= self.cell_count {
            return Err(GridError::IndexOutOfBounds {
                index: SmallVec::new(),
                bounds: format!("linear id {linear} not in [0, {})", self.cell_count),
            });
        }
        let mut rest = linear;
        let mut out = GridIndex::with_capacity(self.ndim());
        for &n in &self.extents {
            let n = i64::from(n);
            out.push((rest % n) as i32);
            rest /= n;
        }
        Ok(out)
    }

    /// Step one index component along `axis` by `step`.
    ///
    /// On a periodic axis the result is folded into `[0, extent)` with a
    /// true (Euclidean) modulo, so negative steps wrap correctly. On a
    /// non-periodic axis the raw sum is returned even if it leaves the grid,
    /// saturating at the `i32` limits.
    pub fn step_axis(&self, value: i32, axis: usize, step: i32, mode: BoundaryMode) -> i32 {
        resolve_axis(i64::from(value) + i64::from(step), self.extents[axis], mode)
    }

    /// A copy of `index` shifted by `step` along `axis`.
    pub fn shifted(&self, index: &[i32], axis: usize, step: i32, mode: BoundaryMode) -> GridIndex {
        let mut out = SmallVec::from_slice(index);
        out[axis] = self.step_axis(index[axis], axis, step, mode);
        out
    }

    /// Where `value` sits on `axis` given the axis' boundary mode.
    ///
    /// Periodic axes have no ends and always report
    /// [`Interior`](BoundaryPosition::Interior). On an axis of extent 1
    /// the single point is reported as [`Lower`](BoundaryPosition::Lower).
    pub fn boundary_position(&self, value: i32, axis: usize, mode: BoundaryMode) -> BoundaryPosition {
        if mode.is_periodic() {
            return BoundaryPosition::Interior;
        }
        let last = self.extents[axis] as i32 - 1;
        if value == 0 {
            BoundaryPosition::Lower
        } else if value == last {
            BoundaryPosition::Upper
        } else {
            BoundaryPosition::Interior
        }
    }

    /// All grid points in linear-id order (axis 0 fastest).
    pub fn canonical_ordering(&self) -> impl Iterator<Item = GridIndex> + '_ {
        let mut cursor: Option<GridIndex> = Some(SmallVec::from_elem(0, self.ndim()));
        std::iter::from_fn(move || {
            let current = cursor.take()?;
            let mut next = current.clone();
            for (axis, &n) in self.extents.iter().enumerate() {
                next[axis] += 1;
                if (next[axis] as u32) < n {
                    cursor = Some(next);
                    break;
                }
                next[axis] = 0;
            }
            Some(current)
        })
    }

    fn bounds_description(&self) -> String {
        self.extents
            .iter()
            .map(|n| format!("[0, {n})"))
            .collect::<Vec<_>>()
            .join(" x ")
    }
}

/// Resolve one widened axis value under the given boundary mode.
pub(crate) fn resolve_axis(val: i64, len: u32, mode: BoundaryMode) -> i32 {
    match mode {
        // Result lies in [0, len) and len <= MAX_EXTENT.
        BoundaryMode::Periodic => val.rem_euclid(i64::from(len)) as i32,
        BoundaryMode::NonPeriodic => val.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
    }
}
