//! Common types: coordinates, shot outcomes and the engine error enum.

use crate::grid::GridError;
use core::fmt;
use serde::Serialize;

/// A (row, col) position on a square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from row and column indices.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by signed deltas; `None` if either index would go below zero.
    /// Upper-bound checks are left to the grid.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis of a multi-cell ship, inferred or chosen at placement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Result of one attack, as reported back to the attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotOutcome {
    /// Attack missed every ship.
    Miss,
    /// Attack damaged a ship that still has intact sections.
    Hit,
    /// Attack destroyed the last intact section, carrying the ship's name.
    Sunk(&'static str),
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying grid error (coordinate outside the board).
    Grid(GridError),
    /// No valid layout was found for a ship within the attempt budget.
    PlacementInfeasible { length: usize, attempts: usize },
    /// Damage applied at a coordinate that is not part of the ship.
    InvalidDamageTarget { row: usize, col: usize },
    /// Damage applied to a ship that is already sunk.
    ShipAlreadySunk,
    /// Ship id does not refer to a registered ship.
    UnknownShip,
    /// Move/outcome call sequence was broken by the caller.
    ProtocolViolation(&'static str),
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Grid(e) => write!(f, "grid error: {}", e),
            GameError::PlacementInfeasible { length, attempts } => write!(
                f,
                "no valid placement for ship of length {} after {} attempts",
                length, attempts
            ),
            GameError::InvalidDamageTarget { row, col } => {
                write!(f, "ship has no section at ({}, {})", row, col)
            }
            GameError::ShipAlreadySunk => write!(f, "ship is already sunk"),
            GameError::UnknownShip => write!(f, "unknown ship id"),
            GameError::ProtocolViolation(msg) => write!(f, "protocol violation: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}
