//! Shift-and-restore stepping of the working index.

use fdstencil_core::GridIndex;
use fdstencil_grid::{BoundaryMode, GridShape};

/// Run `f` with `index` stepped by `step` along `axis`, then put the
/// axis value back.
///
/// The restore happens before `f`'s result is returned, so the caller's
/// index is unchanged on both the `Ok` and the `Err` path.
pub(crate) fn with_shift<R>(
    index: &mut GridIndex,
    axis: usize,
    step: i32,
    shape: &GridShape,
    mode: BoundaryMode,
    f: impl FnOnce(&mut GridIndex) -> R,
) -> R {
    if step == 0 {
        return f(index);
    }
    let saved = index[axis];
    index[axis] = shape.step_axis(saved, axis, step, mode);
    let out = f(index);
    index[axis] = saved;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn shifts_then_restores() {
        let shape = GridShape::new(&[4, 4]).unwrap();
        let mut index: GridIndex = smallvec![0, 3];
        let seen = with_shift(&mut index, 0, -1, &shape, BoundaryMode::Periodic, |i| i.clone());
        assert_eq!(seen.as_slice(), &[3, 3]);
        assert_eq!(index.as_slice(), &[0, 3]);
    }

    #[test]
    fn restores_on_error() {
        let shape = GridShape::new(&[4]).unwrap();
        let mut index: GridIndex = smallvec![3];
        let r: Result<(), i32> = with_shift(&mut index, 0, 2, &shape, BoundaryMode::NonPeriodic, |i| {
            Err(i[0])
        });
        assert_eq!(r, Err(5));
        assert_eq!(index.as_slice(), &[3]);
    }

    #[test]
    fn nested_shifts_compose() {
        let shape = GridShape::new(&[8, 8]).unwrap();
        let mut index: GridIndex = smallvec![2, 2];
        let p = BoundaryMode::NonPeriodic;
        let seen = with_shift(&mut index, 0, 1, &shape, p, |i| {
            with_shift(i, 1, -1, &shape, p, |j| j.clone())
        });
        assert_eq!(seen.as_slice(), &[3, 1]);
        assert_eq!(index.as_slice(), &[2, 2]);
    }
}
