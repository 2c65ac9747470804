//! The floating-point abstraction stencil coefficients are computed in.

use num_traits::Float;
use std::fmt;

/// Names the scalar type an equation system is discretised in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarKind {
    /// Single precision (`f32`).
    F32,
    /// Double precision (`f64`).
    F64,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
        }
    }
}

/// Coefficient type of stencil rows and grid spacings.
///
/// Implemented for `f32` and `f64`. The associated [`KIND`](Self::KIND)
/// lets an evaluation check that the type it runs with is the one the
/// equation system was declared with.
pub trait Scalar: Float + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The [`ScalarKind`] this type corresponds to.
    const KIND: ScalarKind;

    /// Convert a literal weight into this scalar type.
    fn of(v: f64) -> Self;
}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::F32;

    fn of(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::F64;

    fn of(v: f64) -> Self {
        v
    }
}
