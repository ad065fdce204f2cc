//! Fleet configurations.

use serde::Serialize;

/// A class of ship to place: display name, length and how many of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    /// Define a ship class.
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    /// Class display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Length of each ship in the class.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of ships of this class in the fleet.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Grid size for the classic fleet.
pub const CLASSIC_GRID_SIZE: usize = 10;

/// The classic fleet.
pub const CLASSIC_FLEET: [ShipClass; 5] = [
    ShipClass::new("Aircraft Carrier", 5, 1),
    ShipClass::new("Battleship", 4, 1),
    ShipClass::new("Cruiser", 3, 1),
    ShipClass::new("Destroyer", 2, 2),
    ShipClass::new("Submarine", 1, 2),
];

/// Grid size for the small debug fleet.
pub const DEBUG_GRID_SIZE: usize = 6;

/// Two mid-size ships on a small grid, handy for quick games and tests.
pub const DEBUG_FLEET: [ShipClass; 1] = [ShipClass::new("Gunboat", 4, 2)];

/// Total number of ship sections a fleet spec describes.
pub fn fleet_cells(fleet: &[ShipClass]) -> usize {
    fleet.iter().map(|c| c.length() * c.count()).sum()
}
