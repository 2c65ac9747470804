use fdstencil_grid::{BoundaryMode, BoundaryPosition, GridShape};

#[test]
fn periodic_axis_wraps_at_both_ends() {
    for n in [1u32, 2, 5, 16] {
        let shape = GridShape::new(&[n]).unwrap();
        let last = n as i32 - 1;
        assert_eq!(shape.step_axis(0, 0, -1, BoundaryMode::Periodic), last);
        assert_eq!(shape.step_axis(last, 0, 1, BoundaryMode::Periodic), 0);
    }
}

#[test]
fn wrapped_neighbours_fold_to_opposite_edge_in_2d() {
    let shape = GridShape::new(&[16, 16]).unwrap();
    let p = BoundaryMode::Periodic;

    let west = shape.shifted(&[0, 0], 0, -1, p);
    let south = shape.shifted(&[0, 0], 1, -1, p);
    assert_eq!(shape.fold(&west), 15);
    assert_eq!(shape.fold(&south), 15 * 16);

    let east = shape.shifted(&[15, 15], 0, 1, p);
    let north = shape.shifted(&[15, 15], 1, 1, p);
    assert_eq!(shape.fold(&east), 15 * 16);
    assert_eq!(shape.fold(&north), 15);
}

#[test]
fn mixed_axes_wrap_independently() {
    let shape = GridShape::new(&[8, 8]).unwrap();
    let x = shape.step_axis(0, 0, -1, BoundaryMode::Periodic);
    let y = shape.step_axis(0, 1, -1, BoundaryMode::NonPeriodic);
    assert_eq!((x, y), (7, -1));
    assert!(!shape.contains(&[x, y]));
    assert_eq!(shape.out_of_range_axis(&[x, y]), Some(1));
}

#[test]
fn corner_positions_on_mixed_grid() {
    let shape = GridShape::new(&[8, 8]).unwrap();
    assert_eq!(
        shape.boundary_position(0, 0, BoundaryMode::NonPeriodic),
        BoundaryPosition::Lower
    );
    assert_eq!(
        shape.boundary_position(0, 1, BoundaryMode::Periodic),
        BoundaryPosition::Interior
    );
    assert_eq!(
        shape.boundary_position(7, 1, BoundaryMode::NonPeriodic),
        BoundaryPosition::Upper
    );
}
