//! Composable finite-difference operators for the fdstencil engine.
//!
//! An equation is written as a tree of [`Expr`] nodes over one shared
//! [`EquationConfig`]:
//!
//! - [`FieldRef`]: the leaf, one unknown at the current grid point.
//! - [`Derivative`]: first derivative along an axis under a [`Scheme`].
//!   Nest two to get second and mixed partials.
//! - [`Laplacian`]: the `2D+1`-point second-difference stencil.
//! - [`Sum`] and [`Scaled`]: linear combinations.
//!
//! Evaluating a tree at a grid index produces a [`StencilRow`], the
//! column-id to coefficient map a sparse assembler writes as one matrix
//! row. Column ids are `fold(index) * fields + field` with axis 0
//! varying fastest.
//!
//! Every node implements [`StencilOperator`], which also answers
//! staggered-position queries against a [`StaggeredBasis`].
//!
//! [`Scheme`]: fdstencil_core::Scheme

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod derivative;
pub mod expr;
pub mod field;
pub mod laplacian;
pub mod operator;
pub mod position;
pub mod row;
pub mod scaled;
pub mod sum;
mod walk;

pub use config::{EquationConfig, EquationConfigBuilder, GridPlacement};
pub use derivative::{kernel, Derivative, DerivativeKernel};
pub use expr::Expr;
pub use field::FieldRef;
pub use laplacian::Laplacian;
pub use operator::StencilOperator;
pub use position::{Direction, StaggeredBasis};
pub use row::StencilRow;
pub use scaled::Scaled;
pub use sum::Sum;
