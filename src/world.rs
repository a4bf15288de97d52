//! The built-in map and route searched by the `greedy-path` driver.

use crate::config::SearchConfig;
use crate::grid::{Cell, OccupancyMap, OBSTACLE};
use grid_2d::{Coord, Size};

pub const WIDTH: u32 = 10;
pub const HEIGHT: u32 = 10;

/// Rows of `AVAILABLE` (0) and `OBSTACLE` (1) flags, indexed `[y][x]`.
pub const WORLD: [[u8; WIDTH as usize]; HEIGHT as usize] = [
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

pub const START: Coord = Coord { x: 1, y: 8 };
pub const GOAL: Coord = Coord { x: 1, y: 4 };
pub const ALLOW_DIAGONAL: bool = true;

pub fn map() -> OccupancyMap {
    OccupancyMap::from_fn(Size::new(WIDTH, HEIGHT), |coord| {
        if WORLD[coord.y as usize][coord.x as usize] == OBSTACLE {
            Cell::Blocked
        } else {
            Cell::Open
        }
    })
}

pub fn config() -> SearchConfig {
    SearchConfig::default().with_diagonal(ALLOW_DIAGONAL)
}
