//! Fleet registry: owns the ships of one side and their damage state.

use crate::common::{Coord, GameError, ShotOutcome};
use crate::ship::Ship;
use log::debug;

/// Index of a ship within its [`Fleet`].
pub type ShipId = usize;

/// Registry of one side's ships. Keeps a live-id list so that alive
/// queries do not rescan every ship.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    ships: Vec<Ship>,
    alive: Vec<ShipId>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ship and return its id.
    pub fn add_ship(&mut self, ship: Ship) -> ShipId {
        let id = self.ships.len();
        if ship.is_alive() {
            self.alive.push(id);
        }
        self.ships.push(ship);
        id
    }

    /// Number of registered ships, sunk or not.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Whether the fleet has no ships at all.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Look up a ship by id.
    pub fn ship(&self, id: ShipId) -> Result<&Ship, GameError> {
        self.ships.get(id).ok_or(GameError::UnknownShip)
    }

    /// Ships that still have intact sections.
    pub fn alive_ships(&self) -> impl Iterator<Item = &Ship> {
        self.alive.iter().map(|&id| &self.ships[id])
    }

    /// `true` once every ship has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.alive.is_empty()
    }

    /// The id of the ship with a section at `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<ShipId> {
        self.ships.iter().position(|s| s.has_section(coord))
    }

    /// Apply damage at `coord` to ship `id`.
    ///
    /// Fails without mutating anything when the id is unknown, the ship is
    /// already sunk, or `coord` is not one of the ship's sections. Returns
    /// `Sunk` when this damage destroys the last intact section, `Hit`
    /// otherwise.
    pub fn apply_damage(&mut self, id: ShipId, coord: Coord) -> Result<ShotOutcome, GameError> {
        let ship = self.ships.get_mut(id).ok_or(GameError::UnknownShip)?;
        if !ship.is_alive() {
            return Err(GameError::ShipAlreadySunk);
        }
        if !ship.has_section(coord) {
            return Err(GameError::InvalidDamageTarget {
                row: coord.row,
                col: coord.col,
            });
        }
        ship.record_damage(coord);
        if ship.is_alive() {
            Ok(ShotOutcome::Hit)
        } else {
            let name = ship.name();
            self.alive.retain(|&a| a != id);
            debug!("{} sunk, {} ships afloat", name, self.alive.len());
            Ok(ShotOutcome::Sunk(name))
        }
    }
}
