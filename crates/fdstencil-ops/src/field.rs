//! The leaf operator: one unknown field at the current grid point.

use crate::config::EquationConfig;
use crate::operator::StencilOperator;
use crate::position::StaggeredBasis;
use crate::row::StencilRow;
use fdstencil_core::{ColumnId, FieldId, GridIndex, Scalar, StencilError};
use fdstencil_grid::{GridGeometry, GridShape};
use smallvec::SmallVec;
use std::sync::Arc;

/// Reference to unknown field `field` at the index being evaluated.
///
/// Never shifts the index. This is where out-of-grid walks are caught:
/// composite operators step freely and leave range checking to the leaf.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldRef {
    config: Arc<EquationConfig>,
    field: FieldId,
}

impl FieldRef {
    /// Reference `field`, which must be below `config.fields()`.
    pub fn new(config: &Arc<EquationConfig>, field: FieldId) -> Result<Self, StencilError> {
        if field.0 >= config.fields() {
            return Err(StencilError::ConfigMismatch {
                reason: format!(
                    "field {field} requested, system has {} fields",
                    config.fields()
                ),
            });
        }
        Ok(Self {
            config: Arc::clone(config),
            field,
        })
    }

    /// The referenced field.
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Column id of this field at `index`: `fold(index) * fields + field`.
    pub fn column(&self, index: &[i32], shape: &GridShape) -> ColumnId {
        shape.fold(index) * i64::from(self.config.fields()) + i64::from(self.field.0)
    }
}

impl<T: Scalar> StencilOperator<T> for FieldRef {
    fn config(&self) -> &Arc<EquationConfig> {
        &self.config
    }

    fn evaluate(
        &self,
        index: &mut GridIndex,
        geom: &GridGeometry<T>,
        row: &mut StencilRow<T>,
        coeff: T,
    ) -> Result<(), StencilError> {
        self.config.check_arity(geom.ndim(), index)?;
        let shape = geom.shape();
        if let Some(axis) = shape.out_of_range_axis(index) {
            return Err(StencilError::OutOfRangeIndex {
                index: index.clone(),
                axis,
                extent: shape.extent(axis),
            });
        }
        row.add(self.column(index, shape), coeff);
        Ok(())
    }

    fn position(
        &self,
        index: &[i32],
        _shape: &GridShape,
        _component: usize,
        _basis: &StaggeredBasis,
    ) -> Result<Option<GridIndex>, StencilError> {
        Ok(Some(SmallVec::from_slice(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn two_field_config() -> Arc<EquationConfig> {
        Arc::new(EquationConfig::equations_2d2())
    }

    #[test]
    fn column_encodes_field_after_fold() {
        let cfg = two_field_config();
        let shape = GridShape::new(&[16, 16]).unwrap();
        let u = FieldRef::new(&cfg, FieldId(0)).unwrap();
        let v = FieldRef::new(&cfg, FieldId(1)).unwrap();
        assert_eq!(u.column(&[1, 1], &shape), 34);
        assert_eq!(v.column(&[1, 1], &shape), 35);
    }

    #[test]
    fn rejects_field_beyond_count() {
        let cfg = two_field_config();
        assert!(matches!(
            FieldRef::new(&cfg, FieldId(2)),
            Err(StencilError::ConfigMismatch { .. })
        ));
    }

    #[test]
    fn evaluate_adds_coeff_without_shifting() {
        let cfg = two_field_config();
        let geom = GridGeometry::<f64>::unit(&[4, 4]).unwrap();
        let v = FieldRef::new(&cfg, FieldId(1)).unwrap();
        let mut index: GridIndex = smallvec![2, 3];
        let mut row = StencilRow::new();
        v.evaluate(&mut index, &geom, &mut row, 0.5).unwrap();
        v.evaluate(&mut index, &geom, &mut row, 0.25).unwrap();
        assert_eq!(row.get(14 * 2 + 1), Some(0.75));
        assert_eq!(index.as_slice(), &[2, 3]);
    }

    #[test]
    fn evaluate_reports_out_of_range_axis() {
        let cfg = two_field_config();
        let geom = GridGeometry::<f64>::unit(&[4, 4]).unwrap();
        let u = FieldRef::new(&cfg, FieldId(0)).unwrap();
        let mut index: GridIndex = smallvec![1, 4];
        let mut row = StencilRow::new();
        let err = u.evaluate(&mut index, &geom, &mut row, 1.0).unwrap_err();
        assert_eq!(
            err,
            StencilError::OutOfRangeIndex {
                index: smallvec![1, 4],
                axis: 1,
                extent: 4
            }
        );
        assert!(row.is_empty());
    }

    #[test]
    fn position_is_identity() {
        let cfg = two_field_config();
        let shape = GridShape::new(&[4, 4]).unwrap();
        let u = FieldRef::new(&cfg, FieldId(0)).unwrap();
        let basis = StaggeredBasis::axes(2);
        let pos = StencilOperator::<f64>::position(&u, &[3, 0], &shape, 1, &basis).unwrap();
        assert_eq!(pos.as_deref(), Some(&[3, 0][..]));
    }
}
