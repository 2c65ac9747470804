//! The sparse matrix row a stencil evaluation produces.

use fdstencil_core::{ColumnId, Scalar};
use indexmap::IndexMap;

/// Mapping from column id to accumulated coefficient.
///
/// Contributions to the same column always **sum**, never overwrite, so
/// after an evaluation the row holds the exact linear superposition of
/// every leaf reached in the expression tree. Zero contributions are
/// never materialised; entries that cancel to zero are kept (the
/// assembler tolerates explicit zeros), see [`prune_zeros`](Self::prune_zeros).
///
/// Iteration order is the order in which columns were first touched,
/// which is deterministic for a given tree and grid point.
///
/// # Examples
///
/// ```
/// use fdstencil_ops::StencilRow;
///
/// let mut row = StencilRow::<f64>::new();
/// row.add(17, 1.0);
/// row.add(17, -3.0);
/// row.add(18, 0.5);
/// assert_eq!(row.get(17), Some(-2.0));
/// assert_eq!(row.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StencilRow<T: Scalar> {
    cols: IndexMap<ColumnId, T>,
}

impl<T: Scalar> StencilRow<T> {
    /// An empty row.
    pub fn new() -> Self {
        Self {
            cols: IndexMap::new(),
        }
    }

    /// An empty row with room for `n` columns.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            cols: IndexMap::with_capacity(n),
        }
    }

    /// Accumulate `coeff` into column `col`.
    pub fn add(&mut self, col: ColumnId, coeff: T) {
        if coeff == T::zero() {
            return;
        }
        let slot = self.cols.entry(col).or_insert_with(T::zero);
        *slot = *slot + coeff;
    }

    /// Accumulate every entry of `other` into `self`.
    pub fn merge(&mut self, other: &StencilRow<T>) {
        for (&col, &coeff) in &other.cols {
            self.add(col, coeff);
        }
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&mut self, factor: T) {
        for v in self.cols.values_mut() {
            *v = *v * factor;
        }
    }

    /// Coefficient of `col`, if the column was touched.
    pub fn get(&self, col: ColumnId) -> Option<T> {
        self.cols.get(&col).copied()
    }

    /// Number of materialised columns.
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// `true` if no column was touched.
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Iterate `(column, coefficient)` pairs in first-touch order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, T)> + '_ {
        self.cols.iter().map(|(&c, &v)| (c, v))
    }

    /// Drop entries whose magnitude is at most `tolerance`.
    pub fn prune_zeros(&mut self, tolerance: T) {
        self.cols.retain(|_, v| v.abs() > tolerance);
    }

    /// Remove every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.cols.clear();
    }

    /// Consume the row into `(column, coefficient)` pairs sorted by column.
    pub fn into_sorted_vec(self) -> Vec<(ColumnId, T)> {
        let mut out: Vec<_> = self.cols.into_iter().collect();
        out.sort_unstable_by_key(|&(c, _)| c);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_same_column() {
        let mut row = StencilRow::<f64>::new();
        row.add(3, 0.5);
        row.add(3, 0.25);
        row.add(4, -1.0);
        assert_eq!(row.get(3), Some(0.75));
        assert_eq!(row.get(4), Some(-1.0));
        assert_eq!(row.get(5), None);
    }

    #[test]
    fn zero_contributions_are_not_materialised() {
        let mut row = StencilRow::<f32>::new();
        row.add(1, 0.0);
        assert!(row.is_empty());
    }

    #[test]
    fn cancelling_entries_are_kept_until_pruned() {
        let mut row = StencilRow::<f64>::new();
        row.add(0, 1.0);
        row.add(0, -1.0);
        row.add(1, 2.0);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get(0), Some(0.0));

        row.prune_zeros(1e-12);
        assert_eq!(row.len(), 1);
        assert_eq!(row.get(0), None);
    }

    #[test]
    fn merge_and_scale() {
        let mut a = StencilRow::<f64>::new();
        a.add(1, 1.0);
        let mut b = StencilRow::<f64>::new();
        b.add(1, 2.0);
        b.add(2, -2.0);
        a.merge(&b);
        a.scale(0.5);
        assert_eq!(a.into_sorted_vec(), vec![(1, 1.5), (2, -1.0)]);
    }

    #[test]
    fn iteration_follows_first_touch() {
        let mut row = StencilRow::<f64>::new();
        row.add(9, 1.0);
        row.add(2, 1.0);
        row.add(9, 1.0);
        let cols: Vec<_> = row.iter().map(|(c, _)| c).collect();
        assert_eq!(cols, vec![9, 2]);
    }
}
