//! The three-state cell domain.

use crate::error::CellError;
use std::fmt;

/// State of a single grid cell.
///
/// The discriminants match the raw integer encoding used by callers that
/// hold grids as `u8` arrays, so conversion in either direction is lossless
/// for valid values.
///
/// # Examples
///
/// ```
/// use tilt_core::Cell;
///
/// assert_eq!(Cell::try_from(1u8), Ok(Cell::Filled));
/// assert_eq!(u8::from(Cell::Axis), 2);
/// assert!(Cell::try_from(7u8).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Cell {
    /// Nothing here.
    #[default]
    Empty = 0,
    /// A movable occupant.
    Filled = 1,
    /// Fixed reference marker. Never moved and never overwritten.
    Axis = 2,
}

impl Cell {
    /// Returns `true` for [`Cell::Empty`].
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns `true` for [`Cell::Filled`].
    pub fn is_filled(self) -> bool {
        self == Cell::Filled
    }

    /// Returns `true` for [`Cell::Axis`].
    pub fn is_axis(self) -> bool {
        self == Cell::Axis
    }
}

impl TryFrom<u8> for Cell {
    type Error = CellError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Filled),
            2 => Ok(Cell::Axis),
            _ => Err(CellError::InvalidValue { value }),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
