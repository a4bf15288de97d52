//! Seeded random grids for exercising grid searches.
//!
//! Every generator returns a `Grid<bool>` where `true` marks a wall.

use grid_2d::{Coord, Grid, Size};
use rand::{Rng, SeedableRng};
pub use rand_isaac::IsaacRng;

const CARVE_STEPS: [(i32, i32); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

pub fn rng_from_seed(seed: u64) -> IsaacRng {
    IsaacRng::seed_from_u64(seed)
}

/// Walls placed independently with probability `wall_probability`.
pub fn scattered<R: Rng>(size: Size, wall_probability: f64, rng: &mut R) -> Grid<bool> {
    Grid::new_fn(size, |_| rng.gen_bool(wall_probability))
}

/// A perfect maze carved by randomised depth-first search. Floor cells sit
/// on odd coordinates and every floor cell is reachable from every other.
/// Grids narrower or shorter than 3 cells are returned solid.
pub fn perfect<R: Rng>(size: Size, rng: &mut R) -> Grid<bool> {
    let mut grid = Grid::new_copy(size, true);
    let width = size.width() as i32;
    let height = size.height() as i32;
    if width < 3 || height < 3 {
        return grid;
    }

    let origin = Coord::new(1, 1);
    if let Some(cell) = grid.get_mut(origin) {
        *cell = false;
    }
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let mut candidates = CARVE_STEPS
            .iter()
            .map(|&(dx, dy)| Coord::new(current.x + dx, current.y + dy))
            .filter(|c| c.x > 0 && c.y > 0 && c.x < width - 1 && c.y < height - 1)
            .filter(|&c| grid.get(c) == Some(&true))
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let next = candidates.swap_remove(rng.gen_range(0..candidates.len()));
        let between = Coord::new((current.x + next.x) / 2, (current.y + next.y) / 2);
        for &coord in &[between, next] {
            if let Some(cell) = grid.get_mut(coord) {
                *cell = false;
            }
        }
        stack.push(next);
    }

    grid
}

/// Knocks out each remaining wall with probability `probability`, adding
/// loops to a maze.
pub fn braid<R: Rng>(grid: &mut Grid<bool>, probability: f64, rng: &mut R) {
    for cell in grid.iter_mut() {
        if *cell && rng.gen_bool(probability) {
            *cell = false;
        }
    }
}

pub fn floor_coords(grid: &Grid<bool>) -> Vec<Coord> {
    grid.coord_iter()
        .filter(|&coord| grid.get(coord) == Some(&false))
        .collect()
}

pub fn random_floor_coord<R: Rng>(grid: &Grid<bool>, rng: &mut R) -> Option<Coord> {
    let floor = floor_coords(grid);
    if floor.is_empty() {
        None
    } else {
        Some(floor[rng.gen_range(0..floor.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_maze_floor_is_connected() {
        let mut rng = rng_from_seed(7);
        let grid = perfect(Size::new(21, 15), &mut rng);
        let floor = floor_coords(&grid);

        let mut seen = Grid::new_copy(grid.size(), false);
        let mut stack = vec![floor[0]];
        let mut count = 0;
        while let Some(coord) = stack.pop() {
            match seen.get_mut(coord) {
                Some(visited) if !*visited => *visited = true,
                _ => continue,
            }
            count += 1;
            for &(dx, dy) in &[(0, -1), (1, 0), (0, 1), (-1, 0)] {
                let next = Coord::new(coord.x + dx, coord.y + dy);
                if grid.get(next) == Some(&false) {
                    stack.push(next);
                }
            }
        }

        assert_eq!(count, floor.len());
    }

    #[test]
    fn same_seed_same_grid() {
        let a = scattered(Size::new(16, 16), 0.3, &mut rng_from_seed(3));
        let b = scattered(Size::new(16, 16), 0.3, &mut rng_from_seed(3));
        assert!(a.iter().eq(b.iter()));
    }

    #[test]
    fn tiny_grid_is_solid() {
        let grid = perfect(Size::new(2, 5), &mut rng_from_seed(0));
        assert!(floor_coords(&grid).is_empty());
    }
}
