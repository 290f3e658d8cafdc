//! Quadrant decomposition: the projection half of a 45-degree rotation.
//!
//! For every axis distance `k` in `1..=dist_from_axis`, a quadrant owns two
//! source cells:
//!
//! - the **middle** cell, on the center row or column at distance `k`;
//! - the **diagonal** cell, `k` steps off that line toward the previous
//!   half-axis (clockwise order).
//!
//! Both are projected `k` steps along the quadrant's direction. The middle
//! cell lands on the next diagonal and the diagonal cell lands on the
//! middle line, which is a 45-degree clockwise turn for both. Cells that
//! are neither on a half-axis nor on a diagonal belong to no quadrant.

use smallvec::SmallVec;
use tilt_core::{Cell, Quadrant};
use tilt_space::{AxisGeometry, Grid};

use crate::shift::{shift_cell, ShiftOutcome};

/// Which of a quadrant's two cell families a projection source belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// On the center row or column.
    Middle,
    /// On a diagonal through the center.
    Diagonal,
}

/// One source cell of a quadrant and how far it is projected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Projection {
    /// Source coordinate in the input grid.
    pub source: (usize, usize),
    /// Distance from the axis; also the shift magnitude.
    pub offset: usize,
    /// Middle or diagonal.
    pub family: Family,
}

/// Enumerate a quadrant's projections in scan order.
///
/// For each axis distance the middle cell comes before the diagonal cell.
/// The distances are walked in the order the quadrant's index sequence
/// gives: the first quadrant starts at the far edge, the others start next
/// to the axis.
pub fn members(geometry: &AxisGeometry, quadrant: Quadrant) -> SmallVec<[Projection; 16]> {
    let c = geometry.center();
    let mut out = SmallVec::new();
    let mut push = |middle: (usize, usize), diagonal: (usize, usize), offset: usize| {
        out.push(Projection {
            source: middle,
            offset,
            family: Family::Middle,
        });
        out.push(Projection {
            source: diagonal,
            offset,
            family: Family::Diagonal,
        });
    };
    match quadrant {
        Quadrant::First => {
            for &j in geometry.far_axis_reverse() {
                let k = geometry.offset_of(j);
                push((c, j), (c - k, j), k);
            }
        }
        Quadrant::Second => {
            for &j in geometry.near_axis_reverse() {
                let k = geometry.offset_of(j);
                push((j, c), (j, c - k), k);
            }
        }
        Quadrant::Third => {
            for &j in geometry.near_axis_reverse() {
                let k = geometry.offset_of(j);
                push((c, j), (c + k, j), k);
            }
        }
        Quadrant::Fourth => {
            for &l in geometry.far_axis() {
                let k = geometry.offset_of(l);
                push((l, c), (l, c + k), k);
            }
        }
    }
    out
}

/// A projected quadrant and what happened while building it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadrantImage {
    /// The quadrant this image was built from.
    pub quadrant: Quadrant,
    /// Axis markers from the source plus this quadrant's projected cells.
    pub grid: Grid,
    /// Filled sources that reached their target.
    pub projected: usize,
    /// Filled sources held at their origin by an axis marker.
    pub blocked: usize,
}

/// Project one quadrant of `grid` into a fresh buffer.
///
/// The buffer starts empty except for the source grid's axis markers, so a
/// projection aimed at a marker is blocked and the cell stays where it was.
/// The input grid is not modified.
///
/// # Panics
///
/// Panics if `geometry` was built for a different width than `grid`.
pub fn project(grid: &Grid, geometry: &AxisGeometry, quadrant: Quadrant) -> QuadrantImage {
    assert_eq!(
        grid.width(),
        geometry.width(),
        "geometry width {} does not match grid width {}",
        geometry.width(),
        grid.width()
    );
    let mut image = grid.blank_like();
    for (row, col) in grid.coords_where(Cell::is_axis) {
        image[(row, col)] = Cell::Axis;
    }

    let direction = quadrant.projection();
    let mut projected = 0;
    let mut blocked = 0;
    for p in members(geometry, quadrant) {
        let (row, col) = p.source;
        if grid.get(row, col) != Some(Cell::Filled) {
            continue;
        }
        image[(row, col)] = Cell::Filled;
        match shift_cell(&mut image, row, col, direction, p.offset) {
            ShiftOutcome::Moved { .. } => projected += 1,
            ShiftOutcome::BlockedByAxis | ShiftOutcome::OutOfBounds => blocked += 1,
            ShiftOutcome::NotFilled => {}
        }
    }

    QuadrantImage {
        quadrant,
        grid: image,
        projected,
        blocked,
    }
}

/// Project one quadrant of `grid` and return only the buffer.
///
/// # Panics
///
/// Panics under the same condition as [`project`].
pub fn decompose(grid: &Grid, geometry: &AxisGeometry, quadrant: Quadrant) -> Grid {
    project(grid, geometry, quadrant).grid
}
