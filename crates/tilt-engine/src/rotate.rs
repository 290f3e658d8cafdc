//! 45-degree clockwise rotation about the center cell.

use tilt_core::Quadrant;
use tilt_space::{AxisGeometry, Grid};
use tracing::debug;

use crate::decompose::{project, QuadrantImage};
use crate::overlay::overlay;

/// Tally of one rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationReport {
    /// Filled cells projected onto their target.
    pub projected: usize,
    /// Filled cells held at their origin by an axis marker.
    pub blocked: usize,
    /// Output cells written by more than one quadrant with different values.
    pub conflicts: usize,
    /// Filled cells present before the rotation but not after. Cells off the
    /// eight rays through the center, and cells merged into another, count here.
    pub lost: usize,
}

impl std::ops::AddAssign for RotationReport {
    fn add_assign(&mut self, rhs: Self) {
        self.projected += rhs.projected;
        self.blocked += rhs.blocked;
        self.conflicts += rhs.conflicts;
        self.lost += rhs.lost;
    }
}

/// A rotated grid and its report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    /// The merged output grid.
    pub grid: Grid,
    /// What happened while building it.
    pub report: RotationReport,
}

/// Rotate `grid` 45 degrees clockwise.
///
/// Each quadrant is projected into its own buffer, then the four buffers
/// are merged in [`Quadrant::ALL`] order with later quadrants winning. The
/// center cell is outside every quadrant and is copied from `grid`
/// unchanged. `grid` itself is not modified.
///
/// The merge order is inherited scan order rather than a meaningful rule,
/// but it is kept fixed so outputs are reproducible.
pub fn rotate_right(grid: &Grid, geometry: &AxisGeometry) -> Rotation {
    let images: [QuadrantImage; 4] = Quadrant::ALL.map(|q| project(grid, geometry, q));

    let mut out = grid.blank_like();
    let conflicts = overlay(&mut out, images.iter().map(|img| &img.grid));

    let c = geometry.center();
    if let Some(center) = grid.get(c, c) {
        out[(c, c)] = center;
    }

    let report = RotationReport {
        projected: images.iter().map(|img| img.projected).sum(),
        blocked: images.iter().map(|img| img.blocked).sum(),
        conflicts,
        lost: grid.filled_count().saturating_sub(out.filled_count()),
    };
    debug!(
        width = grid.width(),
        projected = report.projected,
        blocked = report.blocked,
        conflicts = report.conflicts,
        lost = report.lost,
        "rotated 45 degrees clockwise"
    );
    Rotation { grid: out, report }
}
