//! Error types for the Tilt engine.
//!
//! Organized by subsystem: cell decoding, grid construction and access,
//! transformation operations, and engine configuration. Boundary discards
//! during shifts are not errors; they are reported as shift outcomes.

use std::error::Error;
use std::fmt;

/// Errors decoding a raw cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellError {
    /// The value is outside `{0, 1, 2}`.
    InvalidValue {
        /// The offending raw value.
        value: u8,
    },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { value } => {
                write!(f, "invalid cell value {value}: expected 0, 1 or 2")
            }
        }
    }
}

impl Error for CellError {}

/// Errors from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows.
    EmptyGrid,
    /// The grid width is even, so there is no single center cell.
    EvenWidth {
        /// The rejected width.
        width: usize,
    },
    /// A row's length differs from the number of rows.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected length (the number of rows).
        width: usize,
    },
    /// A raw cell value is outside the three-state domain.
    InvalidCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The raw value.
        value: u8,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid width.
        width: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::EvenWidth { width } => {
                write!(f, "grid width {width} is even: a single center cell needs an odd width")
            }
            Self::NotSquare { row, len, width } => {
                write!(f, "row {row} has {len} cells, expected {width}")
            }
            Self::InvalidCell { row, col, value } => {
                write!(f, "cell ({row}, {col}) holds invalid value {value}")
            }
            Self::CoordOutOfBounds { row, col, width } => {
                write!(f, "coordinate ({row}, {col}) out of bounds: [0, {width}) x [0, {width})")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from transformation operations on a committed grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// The operation exists in the interface but has no implementation.
    /// Returned without touching the grid.
    NotImplemented {
        /// Name of the operation.
        operation: &'static str,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented { operation } => {
                write!(f, "operation '{operation}' is not implemented")
            }
        }
    }
}

impl Error for TransformError {}

/// Errors detected while validating an engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid is wider than the configured limit.
    WidthExceedsLimit {
        /// Width of the supplied grid.
        width: usize,
        /// Configured maximum.
        max: usize,
    },
    /// A width limit of zero admits no grid at all.
    ZeroWidthLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthExceedsLimit { width, max } => {
                write!(f, "grid width {width} exceeds configured maximum {max}")
            }
            Self::ZeroWidthLimit => write!(f, "max_width must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
