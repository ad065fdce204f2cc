//! Battleship core engine: constraint-respecting fleet placement and an
//! adaptive hunt/pattern/axis targeting state machine. The turn loop and
//! any user interface live outside this crate; callers wire the pieces
//! together and relay shot outcomes.

mod common;
mod config;
mod fleet;
mod grid;
mod logging;
mod placement;
mod ship;
mod targeting;

pub use common::{Coord, GameError, Orientation, ShotOutcome};
pub use config::{
    fleet_cells, ShipClass, CLASSIC_FLEET, CLASSIC_GRID_SIZE, DEBUG_FLEET, DEBUG_GRID_SIZE,
};
pub use fleet::{Fleet, ShipId};
pub use grid::{CellStatus, Grid, GridError};
pub use logging::init_logging;
pub use placement::{place_fleet, PLACEMENT_ATTEMPTS};
pub use ship::Ship;
pub use targeting::{TargetMode, TargetingEngine};
