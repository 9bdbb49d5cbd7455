//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u8(match self.phase {
            Phase::Idle => 0,
            Phase::Running => 1,
            Phase::GameOver => 2,
        });
        let Some(world) = &self.world else {
            return hasher.finish();
        };

        hasher.write_u64(world.grid.cols() as u64);
        hasher.write_u64(world.grid.rows() as u64);
        for (_, tile) in world.grid.cells() {
            hasher.write_u8(match tile {
                TileKind::Wall => 0,
                TileKind::Path => 1,
            });
        }
        hasher.write_i32(world.player.pos.x);
        hasher.write_i32(world.player.pos.y);
        hasher.write_i32(world.player.hp);
        hasher.write_i32(world.monster.pos.x);
        hasher.write_i32(world.monster.pos.y);
        hasher.write_u8(u8::from(world.monster.active));
        hasher.finish()
    }
}
