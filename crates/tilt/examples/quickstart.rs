//! Tilt Quickstart: rotate a cross into a saltire and back.
//!
//! Demonstrates:
//!   1. Building a grid from raw cell values
//!   2. Rotating 45 degrees at a time and watching the rays turn
//!   3. Bulk and single-cell shifts, including a discarded one
//!   4. Reading the metrics side channel
//!
//! Run with:
//!   RUST_LOG=trace cargo run --example quickstart

use tilt::prelude::*;
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 7;

fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.iter_rows() {
        for cell in row {
            out.push(match cell {
                Cell::Empty => '.',
                Cell::Filled => '#',
                Cell::Axis => '+',
            });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn cross(width: usize) -> Result<Grid, GridError> {
    let c = width / 2;
    let rows: Vec<Vec<u8>> = (0..width)
        .map(|r| {
            (0..width)
                .map(|col| match (r == c, col == c) {
                    (true, true) => 2,
                    (true, false) | (false, true) => 1,
                    (false, false) => 0,
                })
                .collect()
        })
        .collect();
    Grid::from_raw(&rows)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut engine = TransformGrid::new(cross(WIDTH)?);
    println!("start:\n{}", render(engine.grid()));

    for step in 1..=8 {
        let report = engine.rotate_right();
        println!(
            "after {} x 45 deg (projected {}, lost {}):\n{}",
            step,
            report.projected,
            report.lost,
            render(engine.grid())
        );
    }

    // Gravity: one step per sweep. Cells stacked in a column merge as they land.
    for _ in 0..WIDTH {
        engine.shift_all_down();
    }
    println!("after sweeping down:\n{}", render(engine.grid()));

    // A shift past the edge is discarded, not an error.
    let last = WIDTH - 1;
    let outcome = engine.shift_down(last, 0, 1);
    println!("shift past bottom edge: {outcome:?}");

    if let Err(e) = engine.rotate_left() {
        println!("rotate_left: {e}");
    }

    println!("{:#?}", engine.metrics());
    Ok(())
}
