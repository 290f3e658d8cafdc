//! Whole-grid one-step shifts.
//!
//! A sweep visits destination lines starting at the edge it travels toward
//! and pulls each filled cell in from the neighbouring line behind it. A
//! cell pulled into line `i` is never a source again in the same pass, so
//! every cell moves at most one step per call no matter how long a chain
//! of filled cells is.

use tilt_core::{Cell, Direction};
use tilt_space::Grid;

/// What a sweep does when a filled cell's destination is already filled.
///
/// Axis destinations always block, whatever the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SweepCollision {
    /// The cell stays put. Cells pile up against an edge without loss.
    Block,
    /// The cell moves and merges into the occupant, so one of the two is
    /// lost. A stack of cells collapses as it reaches an edge.
    #[default]
    Merge,
}

/// Tally of one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Cells that moved one step.
    pub moved: usize,
    /// Cells held in place by an occupied or axis destination.
    pub blocked: usize,
    /// Cells that merged into an occupied destination (`Merge` only).
    pub merged: usize,
}

/// Shift every filled cell one step toward `direction`.
pub fn shift_all(grid: &mut Grid, direction: Direction, collision: SweepCollision) -> SweepReport {
    let width = grid.width();
    let mut report = SweepReport::default();

    for step in 0..width.saturating_sub(1) {
        let (line, behind) = match direction {
            Direction::Up | Direction::Left => (step, step + 1),
            Direction::Down | Direction::Right => (width - 1 - step, width - 2 - step),
        };
        for j in 0..width {
            let (dest, src) = if direction.is_vertical() {
                ((line, j), (behind, j))
            } else {
                ((j, line), (j, behind))
            };
            if !grid[src].is_filled() {
                continue;
            }
            match (grid[dest], collision) {
                (Cell::Axis, _) | (Cell::Filled, SweepCollision::Block) => {
                    report.blocked += 1;
                    continue;
                }
                (Cell::Filled, SweepCollision::Merge) => report.merged += 1,
                (Cell::Empty, _) => {}
            }
            grid[src] = Cell::Empty;
            grid[dest] = Cell::Filled;
            report.moved += 1;
        }
    }
    report
}

/// Sweep every filled cell one row up.
pub fn shift_all_up(grid: &mut Grid, collision: SweepCollision) -> SweepReport {
    shift_all(grid, Direction::Up, collision)
}

/// Sweep every filled cell one row down.
pub fn shift_all_down(grid: &mut Grid, collision: SweepCollision) -> SweepReport {
    shift_all(grid, Direction::Down, collision)
}

/// Sweep every filled cell one column left.
pub fn shift_all_left(grid: &mut Grid, collision: SweepCollision) -> SweepReport {
    shift_all(grid, Direction::Left, collision)
}

/// Sweep every filled cell one column right.
pub fn shift_all_right(grid: &mut Grid, collision: SweepCollision) -> SweepReport {
    shift_all(grid, Direction::Right, collision)
}
