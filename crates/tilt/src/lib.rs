//! Tilt: discrete shifts and 45-degree rotations on square cell grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tilt sub-crates. For most users, adding `tilt` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tilt::prelude::*;
//!
//! let grid = Grid::from_raw(&[
//!     vec![0, 0, 1, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 2, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//! ])
//! .unwrap();
//! let mut engine = TransformGrid::new(grid);
//!
//! // Two steps clockwise: top middle -> top right -> right middle.
//! engine.rotate_right_n(2);
//! assert_eq!(engine.grid().get(2, 4), Some(Cell::Filled));
//!
//! // Slide it back toward the center; the axis marker stops it.
//! engine.shift_all_left();
//! engine.shift_all_left();
//! assert_eq!(engine.grid().get(2, 3), Some(Cell::Filled));
//!
//! assert!(matches!(
//!     engine.rotate_left(),
//!     Err(TransformError::NotImplemented { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tilt-core` | Cells, directions, quadrants, errors |
//! | [`space`] | `tilt-space` | `Grid` storage and `AxisGeometry` |
//! | [`engine`] | `tilt-engine` | Shifts, sweeps, decomposition, rotation, `TransformGrid` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`tilt-core`).
pub use tilt_core as types;

/// Grid storage and axis geometry (`tilt-space`).
pub use tilt_space as space;

/// Shift and rotation engine (`tilt-engine`).
///
/// [`engine::TransformGrid`] is the main entry point; the free functions in
/// [`engine::shift`], [`engine::sweep`], [`engine::decompose`] and
/// [`engine::rotate`] operate on bare [`space::Grid`] buffers.
pub use tilt_engine as engine;

/// Common imports for typical Tilt usage.
///
/// ```rust
/// use tilt::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tilt_core::{Cell, Direction, Quadrant};

    // Errors
    pub use tilt_core::{CellError, ConfigError, GridError, TransformError};

    // Space
    pub use tilt_space::{AxisGeometry, Grid};

    // Engine
    pub use tilt_engine::{
        EngineConfig, RotationReport, ShiftOutcome, SweepCollision, SweepReport,
        TransformGrid, TransformMetrics,
    };
}
