//! Rotation quadrants.

use crate::direction::Direction;
use std::fmt;

/// One of the four index-derived partitions used to decompose a
/// 45-degree clockwise rotation.
///
/// Each quadrant covers the cells on one half-axis and the diagonal that
/// precedes it clockwise, and projects them along a single direction:
///
/// | Quadrant | Members (relative to center) | Projection |
/// |----------|------------------------------|------------|
/// | First    | right half-row, upper-right diagonal | [`Direction::Down`] |
/// | Second   | upper half-column, upper-left diagonal | [`Direction::Right`] |
/// | Third    | left half-row, lower-left diagonal | [`Direction::Up`] |
/// | Fourth   | lower half-column, lower-right diagonal | [`Direction::Left`] |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// Quadrant 1.
    First,
    /// Quadrant 2.
    Second,
    /// Quadrant 3.
    Third,
    /// Quadrant 4.
    Fourth,
}

impl Quadrant {
    /// All quadrants in overlay precedence order: later entries win when
    /// two quadrants write the same output cell.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    /// One-based label (1..=4).
    pub fn index(self) -> u8 {
        match self {
            Quadrant::First => 1,
            Quadrant::Second => 2,
            Quadrant::Third => 3,
            Quadrant::Fourth => 4,
        }
    }

    /// Look up a quadrant by its one-based label.
    pub fn from_index(index: u8) -> Option<Quadrant> {
        match index {
            1 => Some(Quadrant::First),
            2 => Some(Quadrant::Second),
            3 => Some(Quadrant::Third),
            4 => Some(Quadrant::Fourth),
            _ => None,
        }
    }

    /// Direction along which this quadrant's members are projected.
    pub fn projection(self) -> Direction {
        match self {
            Quadrant::First => Direction::Down,
            Quadrant::Second => Direction::Right,
            Quadrant::Third => Direction::Up,
            Quadrant::Fourth => Direction::Left,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.index())
    }
}
