//! Seeded self-play driver: place a fleet, then let the targeting engine
//! attack the concealed grid until every ship is sunk. Prints a JSON
//! summary of the run.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use flotilla::{
    init_logging, place_fleet, CellStatus, Coord, ShotOutcome, TargetingEngine, CLASSIC_FLEET,
    CLASSIC_GRID_SIZE, DEBUG_FLEET, DEBUG_GRID_SIZE,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::Serialize;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FleetChoice {
    Classic,
    Debug,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix the RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Which fleet to place.
    #[arg(long, value_enum, default_value_t = FleetChoice::Classic)]
    fleet: FleetChoice,
    /// Override the grid size the fleet choice implies.
    #[arg(long)]
    grid_size: Option<usize>,
}

#[derive(Serialize)]
struct ShipReport {
    name: &'static str,
    length: usize,
    sections: Vec<Coord>,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    grid_size: usize,
    ships: Vec<ShipReport>,
    moves: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);

    let (fleet_spec, default_size): (&[_], usize) = match cli.fleet {
        FleetChoice::Classic => (&CLASSIC_FLEET, CLASSIC_GRID_SIZE),
        FleetChoice::Debug => (&DEBUG_FLEET, DEBUG_GRID_SIZE),
    };
    let grid_size = cli.grid_size.unwrap_or(default_size);

    let (mut grid, mut fleet) = place_fleet(&mut rng, grid_size, fleet_spec)?;
    let mut ships = Vec::with_capacity(fleet.len());
    for id in 0..fleet.len() {
        let ship = fleet.ship(id)?;
        ships.push(ShipReport {
            name: ship.name(),
            length: ship.length(),
            sections: ship.sections().to_vec(),
        });
    }

    let mut engine = TargetingEngine::new(grid_size);
    let mut moves = 0usize;
    while !fleet.all_sunk() {
        let mv = engine.next_move(&mut rng)?;
        let outcome = match grid.status_at(mv)? {
            CellStatus::Occupied => {
                let id = fleet
                    .ship_at(mv)
                    .context("occupied cell belongs to no ship")?;
                let outcome = fleet.apply_damage(id, mv)?;
                grid.set_status(mv, CellStatus::Hit)?;
                outcome
            }
            CellStatus::Empty => {
                grid.set_status(mv, CellStatus::Miss)?;
                ShotOutcome::Miss
            }
            CellStatus::Hit | CellStatus::Miss => {
                anyhow::bail!("engine repeated coordinate {}", mv)
            }
        };
        engine.record_outcome(mv, outcome)?;
        moves += 1;
    }

    let summary = Summary {
        seed,
        grid_size,
        ships,
        moves,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
