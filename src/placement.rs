//! Randomized fleet placement with an adjacency-exclusion rule.
//!
//! Ships may not touch each other, diagonals included. Candidates are drawn
//! by picking a random anchor and axis direction and extending section by
//! section; any invalid extension discards the whole candidate. A fixed
//! attempt budget per ship keeps the search terminating.

use crate::common::{Coord, GameError};
use crate::config::ShipClass;
use crate::fleet::Fleet;
use crate::grid::{CellStatus, Grid};
use crate::ship::Ship;
use log::{debug, warn};
use rand::Rng;

/// Anchor attempts per ship before placement is declared infeasible.
pub const PLACEMENT_ATTEMPTS: usize = 10_000;

/// The four axis directions a ship can extend in from its anchor.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A section may go on an empty cell with no ship on any of the
/// eight surrounding cells. Sections of the ship being built are not
/// on the grid yet, so the rule only excludes *other* ships.
fn valid_section(grid: &Grid, coord: Coord) -> bool {
    if grid.status_at(coord) != Ok(CellStatus::Empty) {
        return false;
    }
    for d_row in -1isize..=1 {
        for d_col in -1isize..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Some(n) = coord.offset(d_row, d_col) {
                if grid.status_at(n) == Ok(CellStatus::Occupied) {
                    return false;
                }
            }
        }
    }
    true
}

/// Search for a random valid run of `length` cells on `grid`.
fn place_ship<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &Grid,
    length: usize,
) -> Result<Vec<Coord>, GameError> {
    let size = grid.size();
    // A ship needs at least one cell and can never outgrow the grid; the
    // random search below would panic on an empty sample range or spin the
    // whole attempt budget for nothing.
    if length == 0 || length > size {
        return Err(GameError::PlacementInfeasible {
            length,
            attempts: 0,
        });
    }
    for _ in 0..PLACEMENT_ATTEMPTS {
        let anchor = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        if !valid_section(grid, anchor) {
            continue;
        }
        let mut sections = vec![anchor];
        if length > 1 {
            let (d_row, d_col) = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
            let mut cursor = anchor;
            let mut complete = true;
            for _ in 1..length {
                match cursor.offset(d_row, d_col) {
                    Some(next) if valid_section(grid, next) => {
                        sections.push(next);
                        cursor = next;
                    }
                    _ => {
                        complete = false;
                        break;
                    }
                }
            }
            if !complete {
                continue;
            }
        }
        return Ok(sections);
    }
    warn!(
        "no placement found for length-{} ship after {} attempts",
        length, PLACEMENT_ATTEMPTS
    );
    Err(GameError::PlacementInfeasible {
        length,
        attempts: PLACEMENT_ATTEMPTS,
    })
}

/// Place a whole fleet spec on a fresh `grid_size`×`grid_size` grid.
///
/// Either every ship lands, with the no-touching rule holding across the
/// fleet, or the operation fails with `PlacementInfeasible` and nothing is
/// returned. Randomness comes from the caller's `rng`.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    grid_size: usize,
    fleet_spec: &[ShipClass],
) -> Result<(Grid, Fleet), GameError> {
    let mut grid = Grid::new(grid_size);
    let mut fleet = Fleet::new();
    for class in fleet_spec {
        for _ in 0..class.count() {
            let sections = place_ship(rng, &grid, class.length())?;
            for &coord in &sections {
                grid.set_status(coord, CellStatus::Occupied)?;
            }
            debug!("placed {} at {}", class.name(), sections[0]);
            fleet.add_ship(Ship::new(class.name(), sections));
        }
    }
    Ok((grid, fleet))
}
