//! Grid fixtures.
//!
//! Art uses one character per cell, one line per row; whitespace-only
//! lines are skipped and spaces inside a line are ignored:
//!
//! ```text
//! . # .
//! . + .
//! . . .
//! ```

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tilt_core::Cell;
use tilt_space::Grid;

/// Characters for `Empty`, `Filled`, `Axis`.
pub const GRID_ART_LEGEND: [char; 3] = ['.', '#', '+'];

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => GRID_ART_LEGEND[0],
        Cell::Filled => GRID_ART_LEGEND[1],
        Cell::Axis => GRID_ART_LEGEND[2],
    }
}

/// Parse ASCII art into a grid.
///
/// # Panics
///
/// Panics on an unknown character or a shape [`Grid::new`] rejects. This
/// is test scaffolding; a bad fixture should fail loudly.
pub fn grid_from_art(art: &str) -> Grid {
    let rows: Vec<Vec<Cell>> = art
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| match ch {
                    '.' => Cell::Empty,
                    '#' => Cell::Filled,
                    '+' => Cell::Axis,
                    other => panic!("unknown grid art character {other:?}"),
                })
                .collect()
        })
        .collect();
    Grid::new(rows).unwrap_or_else(|e| panic!("bad grid art: {e}"))
}

/// Render a grid as ASCII art, cells separated by spaces.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 2);
    for row in grid.iter_rows() {
        let line: Vec<String> = row.iter().map(|&c| cell_char(c).to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// An empty grid with a single filled cell.
pub fn single_filled(width: usize, row: usize, col: usize) -> Grid {
    let mut g = Grid::empty(width).unwrap_or_else(|e| panic!("bad width: {e}"));
    g[(row, col)] = Cell::Filled;
    g
}

/// A grid where every cell is an axis marker.
pub fn axis_only(width: usize) -> Grid {
    let rows = vec![vec![Cell::Axis; width]; width];
    Grid::new(rows).unwrap_or_else(|e| panic!("bad width: {e}"))
}

/// Deterministic random grid. Each cell is filled with probability
/// `filled_per_mille / 1000` and is an axis marker with probability
/// `axis_per_mille / 1000`; the rest are empty.
pub fn random_grid(width: usize, seed: u64, filled_per_mille: u32, axis_per_mille: u32) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<Vec<Cell>> = (0..width)
        .map(|_| {
            (0..width)
                .map(|_| {
                    let roll = rng.next_u32() % 1000;
                    if roll < filled_per_mille {
                        Cell::Filled
                    } else if roll < filled_per_mille + axis_per_mille {
                        Cell::Axis
                    } else {
                        Cell::Empty
                    }
                })
                .collect()
        })
        .collect();
    Grid::new(rows).unwrap_or_else(|e| panic!("bad width: {e}"))
}

/// The eight cells at ring distance `k` that lie on a half-axis or a
/// diagonal, in clockwise order starting at the top middle.
///
/// Rotating a single filled cell at `ray_coords(width, k)[i]` once moves it
/// to index `i + 1` (mod 8).
pub fn ray_coords(width: usize, k: usize) -> [(usize, usize); 8] {
    let c = width / 2;
    assert!((1..=c).contains(&k), "ring distance {k} out of range for width {width}");
    [
        (c - k, c),
        (c - k, c + k),
        (c, c + k),
        (c + k, c + k),
        (c + k, c),
        (c + k, c - k),
        (c, c - k),
        (c - k, c - k),
    ]
}
