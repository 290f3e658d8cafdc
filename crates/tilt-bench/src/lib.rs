//! Benchmark profiles for the Tilt grid transformation engine.
//!
//! - [`reference_profile`]: 101x101 grid, 30% filled, sparse axis markers
//! - [`stress_profile`]: 501x501 grid, same densities
//! - [`ring_profile`]: every ray cell filled, so rotation loses nothing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tilt_core::Cell;
use tilt_engine::TransformGrid;
use tilt_space::Grid;
use tilt_test_utils::random_grid;

/// Filled cells per thousand in the random profiles.
pub const FILLED_PER_MILLE: u32 = 300;
/// Axis markers per thousand in the random profiles.
pub const AXIS_PER_MILLE: u32 = 20;

/// 101x101 engine (~10K cells) with a seeded random grid.
pub fn reference_profile(seed: u64) -> TransformGrid {
    TransformGrid::new(random_grid(101, seed, FILLED_PER_MILLE, AXIS_PER_MILLE))
}

/// 501x501 engine (~250K cells) with a seeded random grid.
pub fn stress_profile(seed: u64) -> TransformGrid {
    TransformGrid::new(random_grid(501, seed, FILLED_PER_MILLE, AXIS_PER_MILLE))
}

/// Engine whose grid has every half-axis and diagonal cell filled and an
/// axis marker at the center.
///
/// # Panics
///
/// Panics if `width` is even or zero.
pub fn ring_profile(width: usize) -> TransformGrid {
    let mut grid = Grid::empty(width).unwrap_or_else(|e| panic!("bad width: {e}"));
    let c = width / 2;
    for r in 0..width {
        for col in 0..width {
            let dr = r.abs_diff(c);
            let dc = col.abs_diff(c);
            if dr == 0 || dc == 0 || dr == dc {
                grid[(r, col)] = Cell::Filled;
            }
        }
    }
    grid[(c, c)] = Cell::Axis;
    TransformGrid::new(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_is_deterministic() {
        assert_eq!(reference_profile(42).grid(), reference_profile(42).grid());
        assert_eq!(reference_profile(42).width(), 101);
    }

    #[test]
    fn ring_profile_counts() {
        let e = ring_profile(9);
        // 8 rays of 4 cells.
        assert_eq!(e.grid().filled_count(), 32);
        assert_eq!(e.grid().axis_count(), 1);
    }

    #[test]
    fn ring_profile_rotates_without_loss() {
        let mut e = ring_profile(11);
        let report = e.rotate_right();
        assert_eq!(report.lost, 0);
        assert_eq!(report.projected, 40);
    }
}
