//! Bounds-checked N×N grid of cell statuses.

use crate::common::Coord;
use core::fmt;
use serde::Serialize;

/// Status of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellStatus {
    /// Nothing at this cell.
    Empty,
    /// A ship section, not yet fired upon.
    Occupied,
    /// A ship section that has been fired upon.
    Hit,
    /// A fired-upon cell that held no ship.
    Miss,
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is outside [0..size).
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col, size } => {
                write!(f, "({}, {}) outside {}x{} grid", row, col, size, size)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A square grid of cell statuses with bounds-checked access.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellStatus>,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![CellStatus::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `coord` lies on the grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.in_bounds(coord) {
            return Err(GridError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            });
        }
        Ok(coord.row * self.size + coord.col)
    }

    /// Status of the cell at `coord`.
    pub fn status_at(&self, coord: Coord) -> Result<CellStatus, GridError> {
        Ok(self.cells[self.index(coord)?])
    }

    /// Overwrite the status of the cell at `coord`.
    pub fn set_status(&mut self, coord: Coord, status: CellStatus) -> Result<(), GridError> {
        let idx = self.index(coord)?;
        self.cells[idx] = status;
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.size, self.size)?;
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| match self.cells[row * self.size + col] {
                    CellStatus::Empty => '.',
                    CellStatus::Occupied => 'O',
                    CellStatus::Hit => 'X',
                    CellStatus::Miss => '-',
                })
                .collect();
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}
