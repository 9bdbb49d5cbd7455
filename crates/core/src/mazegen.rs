//! Random-walk maze carving.
//!
//! The generator starts from a grid that is entirely wall, opens the center cell and then
//! walks a cursor for a fixed number of steps, opening every cell it lands on. Steps that
//! would leave the grid are spent without moving. The carved region is always connected to
//! the center but nothing guarantees how much of the grid it reaches.

use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::{Direction, Pos, TileKind};

pub struct MazeGenerator {
    cols: usize,
    rows: usize,
    carve_steps: u32,
}

impl MazeGenerator {
    pub fn new(cols: usize, rows: usize, carve_steps: u32) -> Self {
        Self { cols, rows, carve_steps }
    }

    pub fn generate(&self, rng: &mut impl RandomSource) -> Grid {
        let mut grid = Grid::walls(self.cols, self.rows);
        let start = grid.center();
        carve_random_walk(&mut grid, start, self.carve_steps, rng);
        grid
    }
}

/// Opens `start` and then `steps` random-walk cells from it. Returns the final cursor.
pub fn carve_random_walk(
    grid: &mut Grid,
    start: Pos,
    steps: u32,
    rng: &mut impl RandomSource,
) -> Pos {
    grid.set_tile(start, TileKind::Path);
    let mut cursor = start;
    for _ in 0..steps {
        let direction = Direction::CARDINALS[rng.below(Direction::CARDINALS.len())];
        let next = cursor.step(direction);
        if grid.in_bounds(next) {
            cursor = next;
            grid.set_tile(cursor, TileKind::Path);
        }
    }
    cursor
}
