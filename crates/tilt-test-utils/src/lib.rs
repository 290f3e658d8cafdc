//! Test utilities for Tilt development.
//!
//! Provides ASCII-art grid builders and renderers, deterministic random
//! grids, and the ray coordinates a rotation moves cells along.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    axis_only, grid_from_art, random_grid, ray_coords, render, single_filled, GRID_ART_LEGEND,
};
