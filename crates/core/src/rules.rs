//! Fixed gameplay and presentation constants.

use std::time::Duration;

pub const TILE_SIZE: f32 = 40.0;
pub const PLAYER_SIZE_RATIO: f32 = 0.6;
pub const MONSTER_SIZE_RATIO: f32 = 0.7;

pub const STARTING_HP: i32 = 100;
pub const COLLISION_DAMAGE: i32 = 10;
pub const MONSTER_INTERVAL: Duration = Duration::from_millis(300);
pub const SPAWN_PROBABILITY: f64 = 0.05;
pub const CARVE_STEPS: u32 = 500;

/// The full rule set a run is played with. Players cannot change it; tests build
/// non-default values to force otherwise random outcomes.
#[derive(Clone, Debug, PartialEq)]
pub struct Rules {
    pub tile_size: f32,
    pub starting_hp: i32,
    pub collision_damage: i32,
    pub monster_interval: Duration,
    pub spawn_probability: f64,
    pub carve_steps: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            starting_hp: STARTING_HP,
            collision_damage: COLLISION_DAMAGE,
            monster_interval: MONSTER_INTERVAL,
            spawn_probability: SPAWN_PROBABILITY,
            carve_steps: CARVE_STEPS,
        }
    }
}
