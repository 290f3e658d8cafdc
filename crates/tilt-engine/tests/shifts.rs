use proptest::prelude::*;
use tilt_core::{Cell, Direction};
use tilt_engine::{EngineConfig, ShiftOutcome, SweepCollision, TransformGrid};
use tilt_space::Grid;
use tilt_test_utils::{grid_from_art, random_grid, render, single_filled};

fn blocking(g: Grid) -> TransformGrid {
    let cfg = EngineConfig {
        sweep_collision: SweepCollision::Block,
        ..EngineConfig::default()
    };
    TransformGrid::with_config(g, cfg).unwrap()
}

#[test]
fn default_sweep_collapses_a_stacked_column() {
    let mut e = TransformGrid::new(grid_from_art(
        "
        # . .
        # . .
        . . .
        ",
    ));
    let report = e.shift_all_up();
    assert_eq!(
        render(e.grid()),
        "# . .\n\
         . . .\n\
         . . .\n"
    );
    assert_eq!(report.merged, 1);
    assert_eq!(e.metrics().sweep_cells_merged, 1);
}

#[test]
fn default_sweeps_merge_cells_landing_on_the_edge() {
    let mut e = TransformGrid::new(grid_from_art(
        "
        . . . . .
        . # . . .
        . . + . .
        . # . # .
        . . . . .
        ",
    ));
    for _ in 0..5 {
        e.shift_all_down();
    }
    assert_eq!(
        render(e.grid()),
        ". . . . .\n\
         . . . . .\n\
         . . + . .\n\
         . . . . .\n\
         . # . # .\n"
    );
    assert_eq!(e.metrics().sweep_cells_merged, 1);
}

#[test]
fn blocking_sweeps_park_cells_against_the_edge() {
    let mut e = blocking(grid_from_art(
        "
        . . . . .
        . # . . .
        . . + . .
        . # . # .
        . . . . .
        ",
    ));
    for _ in 0..5 {
        e.shift_all_down();
    }
    assert_eq!(
        render(e.grid()),
        ". . . . .\n\
         . . . . .\n\
         . . + . .\n\
         . # . . .\n\
         . # . # .\n"
    );
    assert_eq!(e.grid().filled_count(), 3);
}

#[test]
fn axis_marker_stops_a_column() {
    let mut e = TransformGrid::new(grid_from_art(
        "
        . . .
        . + .
        . # .
        ",
    ));
    let report = e.shift_all_up();
    assert_eq!(report.moved, 0);
    assert_eq!(report.blocked, 1);
    assert_eq!(e.grid()[(2, 1)], Cell::Filled);
}

#[test]
fn single_shift_past_edge_is_counted_not_applied() {
    let mut e = TransformGrid::new(single_filled(5, 0, 3));
    assert_eq!(e.shift_right(0, 3, 2), ShiftOutcome::OutOfBounds);
    assert_eq!(e.grid()[(0, 3)], Cell::Filled);
    assert_eq!(e.metrics().shifts_out_of_bounds, 1);
    assert!(e.shift_right(0, 3, 1).is_moved());
    assert_eq!(e.grid()[(0, 4)], Cell::Filled);
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn blocking_sweep_conserves_cells(
        half in 0usize..6,
        seed in any::<u64>(),
        direction in arb_direction(),
    ) {
        let width = 2 * half + 1;
        let g = random_grid(width, seed, 450, 80);
        let mut e = blocking(g.clone());
        for _ in 0..width {
            e.shift_all(direction);
            prop_assert_eq!(e.grid().filled_count(), g.filled_count());
        }
    }

    #[test]
    fn sweep_moves_each_cell_at_most_one_step(
        half in 0usize..6,
        seed in any::<u64>(),
        direction in arb_direction(),
    ) {
        let width = 2 * half + 1;
        let g = random_grid(width, seed, 450, 0);
        let mut e = TransformGrid::new(g.clone());
        e.shift_all(direction);
        // Every filled cell either stayed put or came from one step behind.
        let (dr, dc) = direction.opposite().offset_2d();
        for (r, c) in e.grid().coords_where(Cell::is_filled) {
            let here = g[(r, c)].is_filled();
            let behind = r
                .checked_add_signed(dr)
                .zip(c.checked_add_signed(dc))
                .and_then(|(br, bc)| g.get(br, bc))
                .is_some_and(Cell::is_filled);
            prop_assert!(here || behind, "({}, {}) filled from nowhere", r, c);
        }
    }

    #[test]
    fn merge_sweep_never_gains_cells(
        half in 0usize..6,
        seed in any::<u64>(),
        direction in arb_direction(),
    ) {
        let width = 2 * half + 1;
        let g = random_grid(width, seed, 450, 80);
        let mut e = TransformGrid::new(g.clone());
        let report = e.shift_all(direction);
        prop_assert_eq!(e.grid().filled_count() + report.merged, g.filled_count());
    }
}
