//! Core types for the Tilt grid transformation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cell domain, the four cardinal directions, the four rotation
//! quadrants, and the error types shared by every other crate in the
//! workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod quadrant;

pub use cell::Cell;
pub use direction::Direction;
pub use error::{CellError, ConfigError, GridError, TransformError};
pub use quadrant::Quadrant;
