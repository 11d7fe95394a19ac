//! Grid tests - wall and interior queries

use tui_snake::core::Grid;
use tui_snake::types::{Position, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_default_grid_matches_the_playfield_constants() {
    let grid = Grid::default();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
    assert_eq!(grid.center(), Position::new(25, 11));
}

#[test]
fn test_every_border_cell_is_wall() {
    let grid = Grid::default();

    for x in 0..GRID_WIDTH {
        assert!(grid.is_wall(Position::new(x, 0)));
        assert!(grid.is_wall(Position::new(x, GRID_HEIGHT - 1)));
    }
    for y in 0..GRID_HEIGHT {
        assert!(grid.is_wall(Position::new(0, y)));
        assert!(grid.is_wall(Position::new(GRID_WIDTH - 1, y)));
    }
}

#[test]
fn test_every_inner_cell_is_interior() {
    let grid = Grid::default();

    for x in 1..GRID_WIDTH - 1 {
        for y in 1..GRID_HEIGHT - 1 {
            let pos = Position::new(x, y);
            assert!(grid.is_interior(pos), "({x}, {y}) should be interior");
            assert!(!grid.is_wall(pos));
        }
    }
}

#[test]
fn test_positions_beyond_the_grid_count_as_wall() {
    let grid = Grid::default();
    assert!(grid.is_wall(Position::new(-1, 10)));
    assert!(grid.is_wall(Position::new(GRID_WIDTH, 10)));
    assert!(grid.is_wall(Position::new(10, -1)));
    assert!(grid.is_wall(Position::new(10, GRID_HEIGHT)));
}

#[test]
fn test_interior_area() {
    assert_eq!(Grid::default().interior_area(), 960);
    assert_eq!(Grid::new(4, 4).interior_area(), 4);
    assert_eq!(Grid::new(2, 9).interior_area(), 0);
}
