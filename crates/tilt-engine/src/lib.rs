//! Shift and 45-degree rotation engine for Tilt grids.
//!
//! The engine moves [`Filled`](tilt_core::Cell::Filled) cells around a
//! square [`Grid`](tilt_space::Grid) in two ways:
//!
//! - **Shifts**: single cells by an arbitrary offset ([`shift`]), or every
//!   filled cell by one step ([`sweep`]).
//! - **Rotation**: a 45-degree clockwise turn about the center cell, built
//!   by projecting each of four quadrants along one cardinal axis
//!   ([`decompose`]) and merging the four images ([`overlay`], [`rotate`]).
//!
//! [`TransformGrid`] owns a committed grid and exposes all of these as
//! methods, tallying outcomes in [`TransformMetrics`].
//!
//! # Examples
//!
//! ```
//! use tilt_engine::TransformGrid;
//!
//! let mut engine = TransformGrid::from_raw(&[
//!     vec![0, 1, 0],
//!     vec![0, 2, 0],
//!     vec![0, 0, 0],
//! ])
//! .unwrap();
//!
//! engine.rotate_right();
//! assert_eq!(
//!     engine.grid().to_raw(),
//!     vec![vec![0, 0, 1], vec![0, 2, 0], vec![0, 0, 0]]
//! );
//! assert!(engine.rotate_left().is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod decompose;
pub mod engine;
pub mod metrics;
pub mod overlay;
pub mod rotate;
pub mod shift;
pub mod sweep;

pub use config::EngineConfig;
pub use decompose::{decompose, Family, Projection};
pub use engine::TransformGrid;
pub use metrics::TransformMetrics;
pub use rotate::{rotate_right, Rotation, RotationReport};
pub use shift::ShiftOutcome;
pub use sweep::{SweepCollision, SweepReport};
