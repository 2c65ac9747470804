//! Equation-system configuration shared by every node of an expression.
//!
//! Constructed via the builder pattern: [`EquationConfig::builder`], or
//! from one of the presets ([`EquationConfig::equations_2d1`] and friends).

use fdstencil_core::{ConfigError, ScalarKind, StencilError};
use fdstencil_grid::BoundaryMode;
use std::fmt;

/// Where unknowns live relative to cell centres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridPlacement {
    /// Every unknown is stored at the cell centre.
    #[default]
    Collocated,
    /// Vector components are stored on faces/edges offset from the centre.
    Staggered,
}

impl fmt::Display for GridPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collocated => write!(f, "collocated"),
            Self::Staggered => write!(f, "staggered"),
        }
    }
}

/// Immutable descriptor of one discretization session.
///
/// Supplies the dimension count, the number of unknown fields, one
/// boundary mode per axis, the scalar type and the grid placement.
/// Expression nodes hold it behind an `Arc`; two nodes agree on
/// configuration when they point at the same allocation or compare equal.
///
/// # Construction
///
/// ```
/// use fdstencil_grid::BoundaryMode;
/// use fdstencil_ops::EquationConfig;
///
/// let cfg = EquationConfig::builder()
///     .dims(2)
///     .fields(3)
///     .boundary(&[BoundaryMode::Periodic, BoundaryMode::NonPeriodic])
///     .build()
///     .unwrap();
/// assert_eq!(cfg.boundary(1), BoundaryMode::NonPeriodic);
/// ```
///
/// With the `serde` feature, deserialization goes through
/// [`EquationConfigBuilder::build`] and rejects the same inputs it does.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEquationConfig"))]
pub struct EquationConfig {
    dims: usize,
    fields: u32,
    boundary: Vec<BoundaryMode>,
    placement: GridPlacement,
    scalar: ScalarKind,
}

/// Unvalidated on-disk form of [`EquationConfig`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEquationConfig {
    dims: usize,
    fields: u32,
    boundary: Option<Vec<BoundaryMode>>,
    #[serde(default)]
    placement: GridPlacement,
    scalar: Option<ScalarKind>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEquationConfig> for EquationConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEquationConfig) -> Result<Self, Self::Error> {
        let mut builder = EquationConfig::builder()
            .dims(raw.dims)
            .fields(raw.fields)
            .placement(raw.placement);
        if let Some(modes) = &raw.boundary {
            builder = builder.boundary(modes);
        }
        if let Some(scalar) = raw.scalar {
            builder = builder.scalar(scalar);
        }
        builder.build()
    }
}

/// Builder for [`EquationConfig`].
///
/// Required: `dims` and `fields`. Boundary modes default to
/// non-periodic on every axis, placement to collocated and the scalar
/// type to `f64`.
#[derive(Clone, Debug, Default)]
pub struct EquationConfigBuilder {
    dims: Option<usize>,
    fields: Option<u32>,
    boundary: Option<Vec<BoundaryMode>>,
    periodic_all: bool,
    placement: GridPlacement,
    scalar: Option<ScalarKind>,
}

impl EquationConfig {
    /// Create a new builder.
    pub fn builder() -> EquationConfigBuilder {
        EquationConfigBuilder::default()
    }

    /// Number of spatial axes `D`.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Number of unknown fields per grid point.
    pub fn fields(&self) -> u32 {
        self.fields
    }

    /// Boundary mode of `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= dims()`.
    pub fn boundary(&self, axis: usize) -> BoundaryMode {
        self.boundary[axis]
    }

    /// Boundary modes of every axis, axis 0 first.
    pub fn boundaries(&self) -> &[BoundaryMode] {
        &self.boundary
    }

    /// Grid placement mode.
    pub fn placement(&self) -> GridPlacement {
        self.placement
    }

    /// Scalar type coefficients are computed in.
    pub fn scalar(&self) -> ScalarKind {
        self.scalar
    }

    /// `ConfigMismatch` unless the grid and `index` both have `dims()` axes.
    pub(crate) fn check_arity(&self, grid_dims: usize, index: &[i32]) -> Result<(), StencilError> {
        if grid_dims != self.dims || index.len() != self.dims {
            return Err(StencilError::ConfigMismatch {
                reason: format!(
                    "system has {} axes, grid has {}, index has {}",
                    self.dims,
                    grid_dims,
                    index.len()
                ),
            });
        }
        Ok(())
    }

    fn preset(dims: usize, fields: u32, mode: BoundaryMode) -> Self {
        Self {
            dims,
            fields,
            boundary: vec![mode; dims],
            placement: GridPlacement::Collocated,
            scalar: ScalarKind::F64,
        }
    }

    /// 2-D, one field, non-periodic on both axes.
    pub fn equations_2d1() -> Self {
        Self::preset(2, 1, BoundaryMode::NonPeriodic)
    }

    /// 2-D, two fields, non-periodic on both axes.
    pub fn equations_2d2() -> Self {
        Self::preset(2, 2, BoundaryMode::NonPeriodic)
    }

    /// 2-D, one field, periodic on both axes.
    pub fn equations_2d1p() -> Self {
        Self::preset(2, 1, BoundaryMode::Periodic)
    }

    /// 2-D, two fields, periodic on both axes.
    pub fn equations_2d2p() -> Self {
        Self::preset(2, 2, BoundaryMode::Periodic)
    }

    /// 3-D, one field, non-periodic on every axis.
    pub fn equations_3d1() -> Self {
        Self::preset(3, 1, BoundaryMode::NonPeriodic)
    }

    /// 3-D, three fields, non-periodic on every axis.
    pub fn equations_3d3() -> Self {
        Self::preset(3, 3, BoundaryMode::NonPeriodic)
    }

    /// The same configuration with a different placement mode.
    pub fn with_placement(mut self, placement: GridPlacement) -> Self {
        self.placement = placement;
        self
    }
}

impl EquationConfigBuilder {
    /// Set the number of spatial axes.
    pub fn dims(mut self, dims: usize) -> Self {
        self.dims = Some(dims);
        self
    }

    /// Set the number of unknown fields per grid point.
    pub fn fields(mut self, fields: u32) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Set the boundary mode of every axis explicitly.
    pub fn boundary(mut self, modes: &[BoundaryMode]) -> Self {
        self.boundary = Some(modes.to_vec());
        self
    }

    /// Make every axis periodic. Overrides [`boundary`](Self::boundary).
    pub fn periodic_all(mut self) -> Self {
        self.periodic_all = true;
        self
    }

    /// Set the grid placement mode.
    pub fn placement(mut self, placement: GridPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the scalar type.
    pub fn scalar(mut self, scalar: ScalarKind) -> Self {
        self.scalar = Some(scalar);
        self
    }

    /// Build the configuration, validating all settings.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `dims` is unset or zero
    /// - `fields` is unset or zero
    /// - an explicit boundary array does not have exactly `dims` entries
    pub fn build(self) -> Result<EquationConfig, ConfigError> {
        let dims = self.dims.filter(|&d| d > 0).ok_or(ConfigError::ZeroDimensions)?;
        let fields = self.fields.filter(|&n| n > 0).ok_or(ConfigError::ZeroFields)?;

        let boundary = if self.periodic_all {
            vec![BoundaryMode::Periodic; dims]
        } else {
            match self.boundary {
                Some(modes) if modes.len() != dims => {
                    return Err(ConfigError::BoundaryArity {
                        dims,
                        got: modes.len(),
                    })
                }
                Some(modes) => modes,
                None => vec![BoundaryMode::NonPeriodic; dims],
            }
        };

        let cfg = EquationConfig {
            dims,
            fields,
            boundary,
            placement: self.placement,
            scalar: self.scalar.unwrap_or(ScalarKind::F64),
        };
        log::debug!(
            "equation config: dims={} fields={} boundary={:?} placement={} scalar={}",
            cfg.dims,
            cfg.fields,
            cfg.boundary,
            cfg.placement,
            cfg.scalar
        );
        Ok(cfg)
    }
}
