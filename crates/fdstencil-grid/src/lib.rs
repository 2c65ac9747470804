//! Structured-grid topology for the fdstencil engine.
//!
//! This crate owns everything the stencil engine needs to know about
//! the grid it discretises on, and nothing about operators:
//!
//! - [`GridShape`]: per-axis extents, folding a [`GridIndex`] into a
//!   linear id (axis 0 fastest) and stepping along an axis under a
//!   [`BoundaryMode`] (periodic wrap or pass-through).
//! - [`Spacing`]: per-axis positive step sizes.
//! - [`GridGeometry`]: a shape and a spacing of matching dimensionality,
//!   the bundle every row evaluation receives.
//!
//! [`GridIndex`]: fdstencil_core::GridIndex

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod geometry;
pub mod shape;
pub mod spacing;

#[cfg(test)]
pub(crate) mod compliance;

pub use boundary::{BoundaryMode, BoundaryPosition};
pub use error::GridError;
pub use geometry::GridGeometry;
pub use shape::GridShape;
pub use spacing::Spacing;
