//! Single-cell cardinal shifts.
//!
//! Each primitive moves one [`Cell::Filled`] cell `offset` steps within a
//! buffer. A shift either completes (source cleared, destination filled)
//! or leaves the buffer untouched; there is no partial write.
//!
//! - Source not filled: no-op.
//! - Destination outside the grid: discarded, source kept.
//! - Destination is an axis marker: blocked, source kept.
//! - Destination already filled: overwritten. The two cells merge into one.

use tilt_core::{Cell, Direction};
use tilt_space::Grid;
use tracing::trace;

/// Result of a single-cell shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOutcome {
    /// The cell now sits at `to`. `overwrote` is `true` if another filled
    /// cell was already there.
    Moved {
        /// Destination coordinate.
        to: (usize, usize),
        /// Whether a filled destination was overwritten.
        overwrote: bool,
    },
    /// The source cell was not [`Cell::Filled`].
    NotFilled,
    /// The source or destination lies outside the grid.
    OutOfBounds,
    /// The destination is an axis marker.
    BlockedByAxis,
}

impl ShiftOutcome {
    /// Returns `true` for [`ShiftOutcome::Moved`].
    pub fn is_moved(self) -> bool {
        matches!(self, ShiftOutcome::Moved { .. })
    }

    /// Returns `true` if a filled source was left in place.
    pub fn is_discarded(self) -> bool {
        matches!(self, ShiftOutcome::OutOfBounds | ShiftOutcome::BlockedByAxis)
    }
}

/// Move the filled cell at `(row, col)` by `offset` steps toward `direction`.
pub fn shift_cell(
    grid: &mut Grid,
    row: usize,
    col: usize,
    direction: Direction,
    offset: usize,
) -> ShiftOutcome {
    match grid.get(row, col) {
        Some(Cell::Filled) => {}
        Some(_) => return ShiftOutcome::NotFilled,
        None => {
            trace!(row, col, ?direction, offset, "shift discarded: source out of bounds");
            return ShiftOutcome::OutOfBounds;
        }
    }
    let Some(to) = grid.offset(row, col, direction, offset) else {
        trace!(row, col, ?direction, offset, "shift discarded: destination out of bounds");
        return ShiftOutcome::OutOfBounds;
    };
    if to == (row, col) {
        return ShiftOutcome::Moved {
            to,
            overwrote: false,
        };
    }
    let dest = grid[to];
    if dest.is_axis() {
        trace!(row, col, ?direction, offset, "shift blocked by axis marker");
        return ShiftOutcome::BlockedByAxis;
    }
    grid[(row, col)] = Cell::Empty;
    grid[to] = Cell::Filled;
    ShiftOutcome::Moved {
        to,
        overwrote: dest.is_filled(),
    }
}

/// Shift toward row 0.
pub fn shift_up(grid: &mut Grid, row: usize, col: usize, offset: usize) -> ShiftOutcome {
    shift_cell(grid, row, col, Direction::Up, offset)
}

/// Shift toward the last row.
pub fn shift_down(grid: &mut Grid, row: usize, col: usize, offset: usize) -> ShiftOutcome {
    shift_cell(grid, row, col, Direction::Down, offset)
}

/// Shift toward column 0.
pub fn shift_left(grid: &mut Grid, row: usize, col: usize, offset: usize) -> ShiftOutcome {
    shift_cell(grid, row, col, Direction::Left, offset)
}

/// Shift toward the last column.
pub fn shift_right(grid: &mut Grid, row: usize, col: usize, offset: usize) -> ShiftOutcome {
    shift_cell(grid, row, col, Direction::Right, offset)
}
