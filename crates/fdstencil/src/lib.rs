//! fdstencil: finite-difference stencil composition for structured grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all fdstencil sub-crates. For most users, adding `fdstencil` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fdstencil::prelude::*;
//! use std::sync::Arc;
//!
//! // 2-D, one unknown, periodic in x and bounded in y.
//! let cfg = Arc::new(
//!     EquationConfig::builder()
//!         .dims(2)
//!         .fields(1)
//!         .boundary(&[BoundaryMode::Periodic, BoundaryMode::NonPeriodic])
//!         .build()
//!         .unwrap(),
//! );
//!
//! // ∂u/∂y with one-sided stencils on the bounded edges.
//! let u = Expr::field(&cfg, FieldId(0)).unwrap();
//! let dy = Expr::derivative(1, u, Scheme::CentralOneSidedAtBoundary).unwrap();
//!
//! let grid = GridGeometry::<f64>::unit(&[16, 16]).unwrap();
//! let row = dy.row(&[0, 0], &grid).unwrap();
//! assert_eq!(row.into_sorted_vec(), vec![(0, -1.5), (16, 2.0), (32, -0.5)]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fdstencil-core` | IDs, grid index, scalar trait, scheme tags, errors |
//! | [`grid`] | `fdstencil-grid` | Grid shape, boundary modes, spacing |
//! | [`ops`] | `fdstencil-ops` | Stencil rows, configuration, operator trees |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and error taxonomy (`fdstencil-core`).
///
/// Contains [`types::GridIndex`], [`types::FieldId`], the
/// [`types::Scalar`] trait and the [`types::Scheme`] tags.
pub use fdstencil_core as types;

/// Structured-grid topology (`fdstencil-grid`).
///
/// [`grid::GridShape`] folds indices and steps along axes under a
/// [`grid::BoundaryMode`]; [`grid::Spacing`] holds per-axis steps.
pub use fdstencil_grid as grid;

/// Operators and stencil rows (`fdstencil-ops`).
///
/// Build [`ops::Expr`] trees against an [`ops::EquationConfig`] and
/// evaluate them into [`ops::StencilRow`]s.
pub use fdstencil_ops as ops;

/// Common imports for typical fdstencil usage.
///
/// ```rust
/// use fdstencil::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use fdstencil_core::{ColumnId, FieldId, GridIndex, Scalar, ScalarKind, Scheme};

    // Errors
    pub use fdstencil_core::{ConfigError, StencilError};
    pub use fdstencil_grid::GridError;

    // Grid
    pub use fdstencil_grid::{BoundaryMode, GridGeometry, GridShape, Spacing};

    // Operators
    pub use fdstencil_ops::{
        EquationConfig, Expr, GridPlacement, StaggeredBasis, StencilOperator, StencilRow,
    };
}
