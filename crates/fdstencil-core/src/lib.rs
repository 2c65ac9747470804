//! Core types for the fdstencil finite-difference stencil engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: grid
//! indices, field and column identifiers, the scalar abstraction, the
//! scheme tags operators are parametrised by, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod scalar;
pub mod scheme;

pub use error::{ConfigError, StencilError};
pub use id::{ColumnId, FieldId, GridIndex};
pub use scalar::{Scalar, ScalarKind};
pub use scheme::Scheme;
