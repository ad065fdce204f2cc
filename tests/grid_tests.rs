use flotilla::{CellStatus, Coord, Grid, GridError};

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new(6);
    assert_eq!(grid.size(), 6);
    for row in 0..6 {
        for col in 0..6 {
            assert_eq!(
                grid.status_at(Coord::new(row, col)).unwrap(),
                CellStatus::Empty
            );
        }
    }
}

#[test]
fn set_and_read_back() {
    let mut grid = Grid::new(6);
    let c = Coord::new(2, 4);
    grid.set_status(c, CellStatus::Occupied).unwrap();
    assert_eq!(grid.status_at(c).unwrap(), CellStatus::Occupied);
    grid.set_status(c, CellStatus::Hit).unwrap();
    assert_eq!(grid.status_at(c).unwrap(), CellStatus::Hit);
}

#[test]
fn out_of_bounds_access_fails() {
    let mut grid = Grid::new(6);
    let outside = Coord::new(6, 0);
    assert!(!grid.in_bounds(outside));
    assert_eq!(
        grid.status_at(outside).unwrap_err(),
        GridError::OutOfBounds {
            row: 6,
            col: 0,
            size: 6
        }
    );
    assert_eq!(
        grid.set_status(Coord::new(0, 6), CellStatus::Miss).unwrap_err(),
        GridError::OutOfBounds {
            row: 0,
            col: 6,
            size: 6
        }
    );
}

#[test]
fn bounds_cover_whole_grid() {
    let grid = Grid::new(3);
    assert!(grid.in_bounds(Coord::new(0, 0)));
    assert!(grid.in_bounds(Coord::new(2, 2)));
    assert!(!grid.in_bounds(Coord::new(3, 2)));
    assert!(!grid.in_bounds(Coord::new(2, 3)));
}
