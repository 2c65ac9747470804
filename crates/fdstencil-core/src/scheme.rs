//! Finite-difference evaluation scheme tags.

use std::fmt;

/// How a differential operator samples its neighbourhood.
///
/// Derivative operators implement every variant. The Laplacian only
/// implements [`Central`](Self::Central) and
/// [`CentralSymmetric`](Self::CentralSymmetric); asking it for any other
/// tag is reported as [`StencilError::UnsupportedScheme`](crate::StencilError)
/// when the row is evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    /// Second-order central difference, `±1` step, weight `1/(2h)`.
    ///
    /// Assumes the point is interior or the axis is periodic.
    #[default]
    Central,
    /// Central in the interior; second-order one-sided stencil on the
    /// first and last point of a non-periodic axis.
    CentralOneSidedAtBoundary,
    /// First-order forward difference `(f(i+1) - f(i)) / h`.
    Forward,
    /// First-order backward difference `(f(i) - f(i-1)) / h`.
    Backward,
    /// Central stencil symmetric about the sample point, used on
    /// staggered layouts.
    CentralSymmetric,
}

impl Scheme {
    /// Every scheme tag, in declaration order.
    pub const ALL: [Scheme; 5] = [
        Scheme::Central,
        Scheme::CentralOneSidedAtBoundary,
        Scheme::Forward,
        Scheme::Backward,
        Scheme::CentralSymmetric,
    ];
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Central => write!(f, "CENTRAL"),
            Self::CentralOneSidedAtBoundary => write!(f, "CENTRAL_ONE_SIDED_AT_BOUNDARY"),
            Self::Forward => write!(f, "FORWARD"),
            Self::Backward => write!(f, "BACKWARD"),
            Self::CentralSymmetric => write!(f, "CENTRAL_SYMMETRIC"),
        }
    }
}
