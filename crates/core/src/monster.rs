//! Monster chase and spawn decisions.
//!
//! These functions only decide positions; applying them (and the collision that may follow)
//! is the game's job.

use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::{Direction, Pos};

/// The single greedy step toward `target`: along the axis with the strictly larger distance,
/// vertical otherwise. A zero delta steps in the negative direction.
pub fn greedy_step(from: Pos, target: Pos) -> Pos {
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    if dx.abs() > dy.abs() {
        Pos { y: from.y, x: from.x + unit_toward(dx) }
    } else {
        Pos { y: from.y + unit_toward(dy), x: from.x }
    }
}

fn unit_toward(delta: i32) -> i32 {
    if delta > 0 { 1 } else { -1 }
}

/// Where the monster ends up this tick. Tries the greedy step first; when that cell is
/// blocked, draws one random direction and takes it only if open.
pub fn chase_step(grid: &Grid, from: Pos, target: Pos, rng: &mut impl RandomSource) -> Pos {
    let greedy = greedy_step(from, target);
    if grid.is_path(greedy) {
        return greedy;
    }

    let direction = Direction::CARDINALS[rng.below(Direction::CARDINALS.len())];
    let fallback = from.step(direction);
    if grid.is_path(fallback) { fallback } else { from }
}

/// Draws uniform candidate cells until one is open and not the player's cell.
/// Returns `None` without drawing when no such cell exists.
pub fn pick_spawn_cell(grid: &Grid, player: Pos, rng: &mut impl RandomSource) -> Option<Pos> {
    let eligible = grid.path_count() - usize::from(grid.is_path(player));
    if eligible == 0 {
        return None;
    }

    loop {
        let candidate = Pos { x: rng.below(grid.cols()) as i32, y: rng.below(grid.rows()) as i32 };
        if grid.is_path(candidate) && candidate != player {
            return Some(candidate);
        }
    }
}
