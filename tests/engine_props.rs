use flotilla::{
    place_fleet, CellStatus, Coord, GameError, ShotOutcome, TargetingEngine, CLASSIC_FLEET,
    CLASSIC_GRID_SIZE,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn chebyshev(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Placement either yields a layout satisfying every invariant or fails
    /// explicitly; it never panics and never returns a touching fleet.
    #[test]
    fn placement_respects_adjacency_exclusion(seed in any::<u64>(), size in 8usize..=12) {
        let mut rng = SmallRng::seed_from_u64(seed);
        match place_fleet(&mut rng, size, &CLASSIC_FLEET) {
            Ok((grid, fleet)) => {
                let mut all: Vec<(usize, Coord)> = Vec::new();
                for id in 0..fleet.len() {
                    let ship = fleet.ship(id).unwrap();
                    for &c in ship.sections() {
                        prop_assert!(grid.in_bounds(c));
                        prop_assert_eq!(grid.status_at(c).unwrap(), CellStatus::Occupied);
                        all.push((id, c));
                    }
                }
                for (i, &(id_a, a)) in all.iter().enumerate() {
                    for &(id_b, b) in &all[i + 1..] {
                        if id_a != id_b {
                            prop_assert!(
                                chebyshev(a, b) > 1,
                                "ships {} and {} touch at {} / {}", id_a, id_b, a, b
                            );
                        }
                    }
                }
            }
            Err(err) => {
                let infeasible = matches!(err, GameError::PlacementInfeasible { .. });
                prop_assert!(infeasible, "unexpected placement error: {}", err);
            }
        }
    }

    /// A full game on the classic board always terminates with every ship
    /// sunk, never repeating a coordinate and never exceeding one sweep of
    /// the grid.
    #[test]
    fn full_game_sinks_everything_within_one_sweep(place_seed in any::<u64>(), hunt_seed in any::<u64>()) {
        let mut place_rng = SmallRng::seed_from_u64(place_seed);
        let (mut grid, mut fleet) =
            place_fleet(&mut place_rng, CLASSIC_GRID_SIZE, &CLASSIC_FLEET).unwrap();

        let mut rng = SmallRng::seed_from_u64(hunt_seed);
        let mut engine = TargetingEngine::new(CLASSIC_GRID_SIZE);
        let mut seen = HashSet::new();
        let mut moves = 0usize;

        while !fleet.all_sunk() {
            let mv = engine.next_move(&mut rng).unwrap();
            moves += 1;
            prop_assert!(moves <= CLASSIC_GRID_SIZE * CLASSIC_GRID_SIZE);
            prop_assert!(seen.insert(mv), "coordinate {} proposed twice", mv);

            let outcome = match grid.status_at(mv).unwrap() {
                CellStatus::Occupied => {
                    let id = fleet.ship_at(mv).unwrap();
                    let outcome = fleet.apply_damage(id, mv).unwrap();
                    grid.set_status(mv, CellStatus::Hit).unwrap();
                    outcome
                }
                CellStatus::Empty => {
                    grid.set_status(mv, CellStatus::Miss).unwrap();
                    ShotOutcome::Miss
                }
                _ => unreachable!("engine repeated a coordinate"),
            };
            engine.record_outcome(mv, outcome).unwrap();
        }

        prop_assert!(fleet.all_sunk());
        prop_assert_eq!(fleet.alive_ships().count(), 0);
    }
}
