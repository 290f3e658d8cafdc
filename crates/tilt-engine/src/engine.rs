//! The engine instance: one committed grid and the operations on it.

use tilt_core::{ConfigError, Direction, GridError, TransformError};
use tilt_space::{AxisGeometry, Grid};
use tracing::debug;

use crate::config::EngineConfig;
use crate::metrics::TransformMetrics;
use crate::rotate::{self, RotationReport};
use crate::shift::{self, ShiftOutcome};
use crate::sweep::{self, SweepReport};

/// Owns a committed [`Grid`] and applies shifts and rotations to it.
///
/// Shifts mutate the committed grid in place. [`rotate_right`] builds a
/// complete new grid from the current one and swaps it in, so no partially
/// rotated state is ever observable. The geometry is computed once at
/// construction; the width never changes.
///
/// An engine is a single-writer value. Share it across threads only behind
/// exclusive access such as a `Mutex`.
///
/// [`rotate_right`]: TransformGrid::rotate_right
#[derive(Clone, Debug)]
pub struct TransformGrid {
    grid: Grid,
    geometry: AxisGeometry,
    config: EngineConfig,
    metrics: TransformMetrics,
}

impl TransformGrid {
    /// Wrap `grid` with the default configuration.
    pub fn new(grid: Grid) -> Self {
        let geometry = AxisGeometry::for_width(grid.width());
        Self {
            grid,
            geometry,
            config: EngineConfig::default(),
            metrics: TransformMetrics::default(),
        }
    }

    /// Wrap `grid` after validating `config` against it.
    pub fn with_config(grid: Grid, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate(grid.width())?;
        Ok(Self {
            config,
            ..Self::new(grid)
        })
    }

    /// Build from raw `u8` rows. See [`Grid::from_raw`] for the checks made.
    pub fn from_raw(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        Grid::from_raw(rows).map(Self::new)
    }

    /// The committed grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid width.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Axis geometry for this grid's width.
    pub fn geometry(&self) -> &AxisGeometry {
        &self.geometry
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Counters accumulated so far.
    pub fn metrics(&self) -> &TransformMetrics {
        &self.metrics
    }

    /// Zero all counters.
    pub fn reset_metrics(&mut self) {
        self.metrics = TransformMetrics::default();
    }

    /// Consume the engine and return the committed grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    // ── Single-cell shifts ──────────────────────────────────────

    /// Move the filled cell at `(row, col)` by `offset` steps toward `direction`.
    ///
    /// Out-of-bounds and axis-blocked shifts leave the grid unchanged; the
    /// outcome says which happened.
    pub fn shift(
        &mut self,
        direction: Direction,
        row: usize,
        col: usize,
        offset: usize,
    ) -> ShiftOutcome {
        let outcome = shift::shift_cell(&mut self.grid, row, col, direction, offset);
        self.metrics.record_shift(outcome);
        outcome
    }

    /// [`shift`](Self::shift) toward row 0.
    pub fn shift_up(&mut self, row: usize, col: usize, offset: usize) -> ShiftOutcome {
        self.shift(Direction::Up, row, col, offset)
    }

    /// [`shift`](Self::shift) toward the last row.
    pub fn shift_down(&mut self, row: usize, col: usize, offset: usize) -> ShiftOutcome {
        self.shift(Direction::Down, row, col, offset)
    }

    /// [`shift`](Self::shift) toward column 0.
    pub fn shift_left(&mut self, row: usize, col: usize, offset: usize) -> ShiftOutcome {
        self.shift(Direction::Left, row, col, offset)
    }

    /// [`shift`](Self::shift) toward the last column.
    pub fn shift_right(&mut self, row: usize, col: usize, offset: usize) -> ShiftOutcome {
        self.shift(Direction::Right, row, col, offset)
    }

    // ── Bulk shifts ─────────────────────────────────────────────

    /// Move every filled cell one step toward `direction`.
    pub fn shift_all(&mut self, direction: Direction) -> SweepReport {
        let report = sweep::shift_all(&mut self.grid, direction, self.config.sweep_collision);
        self.metrics.record_sweep(&report);
        report
    }

    /// [`shift_all`](Self::shift_all) toward row 0.
    pub fn shift_all_up(&mut self) -> SweepReport {
        self.shift_all(Direction::Up)
    }

    /// [`shift_all`](Self::shift_all) toward the last row.
    pub fn shift_all_down(&mut self) -> SweepReport {
        self.shift_all(Direction::Down)
    }

    /// [`shift_all`](Self::shift_all) toward column 0.
    pub fn shift_all_left(&mut self) -> SweepReport {
        self.shift_all(Direction::Left)
    }

    /// [`shift_all`](Self::shift_all) toward the last column.
    pub fn shift_all_right(&mut self) -> SweepReport {
        self.shift_all(Direction::Right)
    }

    // ── Rotation ────────────────────────────────────────────────

    /// Rotate the committed grid 45 degrees clockwise and commit the result.
    ///
    /// See [`rotate::rotate_right`] for the construction.
    pub fn rotate_right(&mut self) -> RotationReport {
        let rotation = rotate::rotate_right(&self.grid, &self.geometry);
        self.grid = rotation.grid;
        self.metrics.record_rotation(&rotation.report);
        rotation.report
    }

    /// Apply [`rotate_right`](Self::rotate_right) `steps` times and return
    /// the summed report.
    pub fn rotate_right_n(&mut self, steps: usize) -> RotationReport {
        let mut total = RotationReport::default();
        for _ in 0..steps {
            total += self.rotate_right();
        }
        total
    }

    /// Counter-clockwise 45-degree rotation.
    ///
    /// Not implemented: always returns `Err(TransformError::NotImplemented)`
    /// and leaves the grid untouched.
    pub fn rotate_left(&mut self) -> Result<(), TransformError> {
        debug!("rotate_left requested but not implemented");
        Err(TransformError::NotImplemented {
            operation: "rotate_left",
        })
    }
}
