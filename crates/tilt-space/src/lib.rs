//! Square grid storage and axis geometry for Tilt.
//!
//! This crate defines [`Grid`], the `N x N` cell buffer every transformation
//! reads and writes, and [`AxisGeometry`], the index sequences derived from
//! a grid width that locate the center axis and quadrant boundaries.
//!
//! Grids are stored row-major in a flat buffer. Construction rejects empty,
//! non-square, and even-width input; after that every operation preserves
//! the width.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod geometry;
pub mod grid;
mod grid2d;

pub use geometry::AxisGeometry;
pub use grid::Grid;
