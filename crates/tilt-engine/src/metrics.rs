//! Cumulative transformation counters.
//!
//! [`TransformMetrics`] is the observable side channel for outcomes the
//! engine otherwise handles silently: boundary discards, axis blocks,
//! merges, and cells lost to rotation.

use crate::rotate::RotationReport;
use crate::shift::ShiftOutcome;
use crate::sweep::SweepReport;

/// Counters accumulated by a [`TransformGrid`](crate::TransformGrid) since
/// construction or the last [`reset_metrics`](crate::TransformGrid::reset_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformMetrics {
    /// Single-cell shifts that moved their cell.
    pub shifts_applied: u64,
    /// Single-cell shifts discarded because source or destination was out of bounds.
    pub shifts_out_of_bounds: u64,
    /// Single-cell shifts blocked by an axis marker.
    pub shifts_blocked_by_axis: u64,
    /// Single-cell shifts skipped because the source was not filled.
    pub shifts_not_filled: u64,
    /// Single-cell shifts that overwrote a filled destination.
    pub shift_overwrites: u64,
    /// Number of bulk sweeps performed.
    pub sweeps: u64,
    /// Cells moved by bulk sweeps.
    pub sweep_cells_moved: u64,
    /// Cells held in place during bulk sweeps.
    pub sweep_cells_blocked: u64,
    /// Cells merged away during bulk sweeps.
    pub sweep_cells_merged: u64,
    /// Number of 45-degree rotations performed.
    pub rotations: u64,
    /// Cells projected during rotations.
    pub rotation_cells_projected: u64,
    /// Cells held by axis markers during rotations.
    pub rotation_cells_blocked: u64,
    /// Output cells two quadrants wrote with different values.
    pub rotation_conflicts: u64,
    /// Filled cells lost during rotations.
    pub rotation_cells_lost: u64,
}

impl TransformMetrics {
    pub(crate) fn record_shift(&mut self, outcome: ShiftOutcome) {
        match outcome {
            ShiftOutcome::Moved { overwrote, .. } => {
                self.shifts_applied += 1;
                if overwrote {
                    self.shift_overwrites += 1;
                }
            }
            ShiftOutcome::NotFilled => self.shifts_not_filled += 1,
            ShiftOutcome::OutOfBounds => self.shifts_out_of_bounds += 1,
            ShiftOutcome::BlockedByAxis => self.shifts_blocked_by_axis += 1,
        }
    }

    pub(crate) fn record_sweep(&mut self, report: &SweepReport) {
        self.sweeps += 1;
        self.sweep_cells_moved += report.moved as u64;
        self.sweep_cells_blocked += report.blocked as u64;
        self.sweep_cells_merged += report.merged as u64;
    }

    pub(crate) fn record_rotation(&mut self, report: &RotationReport) {
        self.rotations += 1;
        self.rotation_cells_projected += report.projected as u64;
        self.rotation_cells_blocked += report.blocked as u64;
        self.rotation_conflicts += report.conflicts as u64;
        self.rotation_cells_lost += report.lost as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = TransformMetrics::default();
        assert_eq!(m.shifts_applied, 0);
        assert_eq!(m.shifts_out_of_bounds, 0);
        assert_eq!(m.sweeps, 0);
        assert_eq!(m.rotations, 0);
        assert_eq!(m.rotation_cells_lost, 0);
    }

    #[test]
    fn record_shift_sorts_outcomes() {
        let mut m = TransformMetrics::default();
        m.record_shift(ShiftOutcome::Moved {
            to: (0, 0),
            overwrote: true,
        });
        m.record_shift(ShiftOutcome::Moved {
            to: (0, 1),
            overwrote: false,
        });
        m.record_shift(ShiftOutcome::OutOfBounds);
        m.record_shift(ShiftOutcome::BlockedByAxis);
        m.record_shift(ShiftOutcome::NotFilled);
        assert_eq!(m.shifts_applied, 2);
        assert_eq!(m.shift_overwrites, 1);
        assert_eq!(m.shifts_out_of_bounds, 1);
        assert_eq!(m.shifts_blocked_by_axis, 1);
        assert_eq!(m.shifts_not_filled, 1);
    }

    #[test]
    fn record_sweep_and_rotation_accumulate() {
        let mut m = TransformMetrics::default();
        let sweep = SweepReport {
            moved: 3,
            blocked: 1,
            merged: 0,
        };
        m.record_sweep(&sweep);
        m.record_sweep(&sweep);
        assert_eq!(m.sweeps, 2);
        assert_eq!(m.sweep_cells_moved, 6);
        assert_eq!(m.sweep_cells_blocked, 2);

        m.record_rotation(&RotationReport {
            projected: 4,
            blocked: 1,
            conflicts: 3,
            lost: 2,
        });
        assert_eq!(m.rotations, 1);
        assert_eq!(m.rotation_cells_projected, 4);
        assert_eq!(m.rotation_cells_blocked, 1);
        assert_eq!(m.rotation_conflicts, 3);
        assert_eq!(m.rotation_cells_lost, 2);
    }
}
