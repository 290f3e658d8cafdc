//! The square cell buffer.

use crate::grid2d;
use std::ops::{Index, IndexMut};
use tilt_core::{Cell, Direction, GridError};

/// An `N x N` grid of [`Cell`]s with odd `N`.
///
/// Each cell has coordinate `(row, col)` where `0 <= row, col < width`.
/// Storage is a flat row-major `Vec<Cell>`. The width is fixed at
/// construction; no operation resizes a grid.
///
/// # Examples
///
/// ```
/// use tilt_core::Cell;
/// use tilt_space::Grid;
///
/// let grid = Grid::from_raw(&[vec![0, 1, 0], vec![0, 2, 0], vec![0, 0, 0]]).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.get(0, 1), Some(Cell::Filled));
/// assert_eq!(grid[(1, 1)], Cell::Axis);
/// assert_eq!(grid.get(3, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from nested rows.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for zero rows,
    /// `Err(GridError::NotSquare)` if any row's length differs from the row
    /// count, and `Err(GridError::EvenWidth)` if the width is even.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let width = Self::check_shape(rows.iter().map(Vec::len), rows.len())?;
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { width, cells })
    }

    /// Build a grid from raw `u8` rows, validating the cell domain.
    ///
    /// In addition to the shape checks of [`Grid::new`], returns
    /// `Err(GridError::InvalidCell)` for the first value outside `{0, 1, 2}`
    /// in row-major order.
    pub fn from_raw(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let width = Self::check_shape(rows.iter().map(Vec::len), rows.len())?;
        let mut cells = Vec::with_capacity(width * width);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|_| GridError::InvalidCell { row, col, value })?;
                cells.push(cell);
            }
        }
        Ok(Self { width, cells })
    }

    /// An all-[`Cell::Empty`] grid of the given width.
    pub fn empty(width: usize) -> Result<Self, GridError> {
        Self::check_width(width)?;
        Ok(Self::blank(width))
    }

    /// A fresh all-empty buffer with this grid's width.
    pub fn blank_like(&self) -> Self {
        Self::blank(self.width)
    }

    fn blank(width: usize) -> Self {
        Self {
            width,
            cells: vec![Cell::Empty; width * width],
        }
    }

    fn check_shape(
        lens: impl Iterator<Item = usize>,
        row_count: usize,
    ) -> Result<usize, GridError> {
        Self::check_width(row_count)?;
        for (row, len) in lens.enumerate() {
            if len != row_count {
                return Err(GridError::NotSquare {
                    row,
                    len,
                    width: row_count,
                });
            }
        }
        Ok(row_count)
    }

    fn check_width(width: usize) -> Result<(), GridError> {
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width % 2 == 0 {
            return Err(GridError::EvenWidth { width });
        }
        Ok(())
    }

    /// Number of rows (and columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`width * width`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.width && col < self.width {
            Some(self.cells[grid2d::rank(row, col, self.width)])
        } else {
            None
        }
    }

    /// Overwrite the cell at `(row, col)`.
    ///
    /// Returns `Err(GridError::CoordOutOfBounds)` if the coordinate is
    /// outside the grid. No other check is made; callers that must keep
    /// axis markers intact check before writing.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        if row >= self.width || col >= self.width {
            return Err(GridError::CoordOutOfBounds {
                row,
                col,
                width: self.width,
            });
        }
        let i = grid2d::rank(row, col, self.width);
        self.cells[i] = cell;
        Ok(())
    }

    /// The coordinate `distance` steps from `(row, col)` toward `direction`,
    /// or `None` if it falls outside the grid.
    pub fn offset(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        distance: usize,
    ) -> Option<(usize, usize)> {
        if row >= self.width || col >= self.width {
            return None;
        }
        grid2d::offset_2d(row, col, direction, distance, self.width)
    }

    /// Iterate rows top to bottom, each as a slice of `width` cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(<[Cell]>::to_vec).collect()
    }

    /// Copy out as nested rows of raw `u8` values.
    pub fn to_raw(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect()
    }

    /// Coordinates of every cell matching `pred`, in row-major order.
    pub fn coords_where(&self, pred: impl Fn(Cell) -> bool) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| pred(c))
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    /// Number of [`Cell::Filled`] cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Number of [`Cell::Axis`] cells.
    pub fn axis_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_axis()).count()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `row` or `col` is not less than the width.
    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(
            row < self.width && col < self.width,
            "({row}, {col}) out of bounds for width {}",
            self.width
        );
        &self.cells[grid2d::rank(row, col, self.width)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    /// # Panics
    ///
    /// Panics if `row` or `col` is not less than the width.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        assert!(
            row < self.width && col < self.width,
            "({row}, {col}) out of bounds for width {}",
            self.width
        );
        let i = grid2d::rank(row, col, self.width);
        &mut self.cells[i]
    }
}
