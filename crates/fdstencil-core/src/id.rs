//! Strongly-typed identifiers and the [`GridIndex`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Identifies one unknown field within an equation system.
///
/// `FieldId(k)` is the k-th unknown of the system; it occupies the
/// `k`-th slot of every grid point's block of columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A point of a structured grid, one signed component per axis.
///
/// Uses `SmallVec<[i32; 4]>` so that grids up to 4 dimensions never
/// touch the heap. Components are signed because stencil walks may
/// step past a non-periodic boundary before the leaf rejects them.
pub type GridIndex = SmallVec<[i32; 4]>;

/// Linear index of one scalar unknown (grid point x field) in the
/// assembled linear system.
///
/// Encoded as `linear_index(point) * field_count + field_id`.
pub type ColumnId = i64;
