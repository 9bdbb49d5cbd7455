mod hash;

use tracing::{debug, info, trace};

use crate::grid::{Grid, Viewport};
use crate::mazegen::MazeGenerator;
use crate::monster::{chase_step, pick_spawn_cell};
use crate::rng::RandomSource;
use crate::rules::Rules;
use crate::types::*;

/// Everything that exists only while a run is in progress or just ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    pub grid: Grid,
    pub player: Player,
    pub monster: Monster,
}

pub struct Game {
    rules: Rules,
    viewport: Viewport,
    phase: Phase,
    world: Option<World>,
    log: Vec<GameEvent>,
}

impl Game {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rules(viewport, Rules::default())
    }

    pub fn with_rules(viewport: Viewport, rules: Rules) -> Self {
        Self { rules, viewport, phase: Phase::Idle, world: None, log: Vec::new() }
    }

    /// Starts a run from an already built world. Used by tests to set up exact layouts.
    pub fn from_world(viewport: Viewport, rules: Rules, world: World) -> Self {
        Self { rules, viewport, phase: Phase::Running, world: Some(world), log: Vec::new() }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Takes effect on the next (re)start; a run keeps the grid it was built with.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// Events recorded since the current run started. Steps are not recorded, so the log is
    /// bounded by the number of hits a run can take.
    pub fn log(&self) -> &[GameEvent] {
        &self.log
    }

    /// Builds a fresh grid from the viewport and resets the player and monster.
    /// Has no effect while a run is already in progress.
    pub fn start(&mut self, rng: &mut impl RandomSource) {
        if self.is_running() {
            return;
        }

        let (cols, rows) = self.viewport.grid_size(self.rules.tile_size);
        let grid = MazeGenerator::new(cols, rows, self.rules.carve_steps).generate(rng);
        let player = Player { pos: grid.center(), hp: self.rules.starting_hp };
        let monster = Monster { pos: Pos { y: 0, x: 0 }, active: false };

        info!(cols, rows, open_cells = grid.path_count(), "run started");
        self.log.clear();
        self.log.push(GameEvent::RunStarted { cols, rows });
        self.world = Some(World { grid, player, monster });
        self.phase = Phase::Running;
    }

    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        if !self.is_running() {
            return MoveOutcome::Ignored;
        }
        let Some(world) = self.world.as_mut() else {
            return MoveOutcome::Ignored;
        };

        let next = world.player.pos.step(direction);
        if !world.grid.is_path(next) {
            return MoveOutcome::Blocked;
        }
        world.player.pos = next;
        trace!(x = next.x, y = next.y, "player moved");
        MoveOutcome::Moved(next)
    }

    /// One monster update: movement and collision, then a spawn attempt.
    pub fn monster_tick(&mut self, rng: &mut impl RandomSource) {
        self.move_monster(rng);
        self.spawn_monster(rng);
    }

    pub fn move_monster(&mut self, rng: &mut impl RandomSource) {
        if !self.is_running() {
            return;
        }
        let Some(world) = self.world.as_mut() else {
            return;
        };
        if !world.monster.active {
            return;
        }

        let next = chase_step(&world.grid, world.monster.pos, world.player.pos, rng);
        if next != world.monster.pos {
            world.monster.pos = next;
            trace!(x = next.x, y = next.y, "monster moved");
        }

        if world.monster.pos != world.player.pos {
            return;
        }

        world.player.hp = (world.player.hp - self.rules.collision_damage).max(0);
        world.monster.active = false;
        debug!(hp = world.player.hp, "player hit");
        self.log.push(GameEvent::PlayerHit { hp: world.player.hp });

        if world.player.hp <= 0 {
            info!("game over");
            self.phase = Phase::GameOver;
            self.log.push(GameEvent::GameOver);
        }
    }

    pub fn spawn_monster(&mut self, rng: &mut impl RandomSource) {
        if !self.is_running() {
            return;
        }
        let Some(world) = self.world.as_mut() else {
            return;
        };
        if world.monster.active || !rng.chance(self.rules.spawn_probability) {
            return;
        }

        let Some(cell) = pick_spawn_cell(&world.grid, world.player.pos, rng) else {
            debug!("no open cell to spawn the monster on");
            return;
        };
        world.monster = Monster { pos: cell, active: true };
        debug!(x = cell.x, y = cell.y, "monster spawned");
        self.log.push(GameEvent::MonsterSpawned { at: cell });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::rng::seeded_rng;

    struct Script(VecDeque<u64>);

    impl RandomSource for Script {
        fn next_u64(&mut self) -> u64 {
            self.0.pop_front().expect("script ran out of values")
        }
    }

    fn corridor_world(player: Pos, monster: Option<Pos>, hp: i32) -> World {
        let mut grid = Grid::walls(10, 10);
        for x in 1..9 {
            grid.set_tile(Pos { y: 5, x }, TileKind::Path);
        }
        World {
            grid,
            player: Player { pos: player, hp },
            monster: Monster {
                pos: monster.unwrap_or(Pos { y: 0, x: 0 }),
                active: monster.is_some(),
            },
        }
    }

    fn game_with(world: World) -> Game {
        Game::from_world(Viewport::new(400.0, 400.0), Rules::default(), world)
    }

    #[test]
    fn new_game_is_idle_without_a_world() {
        let game = Game::new(Viewport::new(800.0, 600.0));
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.world().is_none());
    }

    #[test]
    fn start_builds_a_viewport_sized_world() {
        let mut game = Game::new(Viewport::new(1000.0, 760.0));
        game.start(&mut seeded_rng(3));

        let world = game.world().expect("world after start");
        assert_eq!((world.grid.cols(), world.grid.rows()), (25, 19));
        assert_eq!(world.player, Player { pos: Pos { y: 9, x: 12 }, hp: 100 });
        assert!(world.grid.is_path(world.player.pos));
        assert!(!world.monster.active);
        assert_eq!(game.log(), &[GameEvent::RunStarted { cols: 25, rows: 19 }]);
    }

    #[test]
    fn start_while_running_keeps_the_current_world() {
        let mut game = game_with(corridor_world(Pos { y: 5, x: 4 }, None, 40));
        game.start(&mut seeded_rng(3));
        assert_eq!(game.world().map(|world| world.player.hp), Some(40));
    }

    #[test]
    fn player_moves_only_onto_open_cells() {
        let mut game = game_with(corridor_world(Pos { y: 5, x: 1 }, None, 100));

        assert_eq!(game.move_player(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(game.move_player(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(game.move_player(Direction::Right), MoveOutcome::Moved(Pos { y: 5, x: 2 }));
        assert_eq!(game.world().map(|world| world.player.pos), Some(Pos { y: 5, x: 2 }));
    }

    #[test]
    fn player_cannot_move_outside_the_grid() {
        let grid = Grid::filled(3, 3, TileKind::Path);
        let world = World {
            grid,
            player: Player { pos: Pos { y: 0, x: 0 }, hp: 100 },
            monster: Monster { pos: Pos { y: 2, x: 2 }, active: false },
        };
        let mut game = game_with(world);
        assert_eq!(game.move_player(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(game.move_player(Direction::Left), MoveOutcome::Blocked);
    }

    #[test]
    fn moves_are_ignored_when_not_running() {
        let mut game = Game::new(Viewport::new(400.0, 400.0));
        assert_eq!(game.move_player(Direction::Down), MoveOutcome::Ignored);
    }

    #[test]
    fn collision_costs_ten_hp_and_removes_the_monster() {
        let mut game =
            game_with(corridor_world(Pos { y: 5, x: 4 }, Some(Pos { y: 5, x: 5 }), 100));
        game.move_monster(&mut Script(VecDeque::new()));

        let world = game.world().expect("world");
        assert_eq!(world.player.hp, 90);
        assert!(!world.monster.active);
        assert!(game.is_running());
        assert_eq!(world.monster.pos, Pos { y: 5, x: 4 });
        assert_eq!(game.log(), &[GameEvent::PlayerHit { hp: 90 }]);
    }

    #[test]
    fn steps_do_not_grow_the_event_log() {
        let mut game = game_with(corridor_world(Pos { y: 5, x: 1 }, None, 100));
        for _ in 0..1_000 {
            game.move_player(Direction::Right);
            game.move_player(Direction::Left);
        }
        assert!(game.log().is_empty());
        assert_eq!(game.world().map(|world| world.player.pos), Some(Pos { y: 5, x: 1 }));
    }

    #[test]
    fn last_hit_point_ends_the_run() {
        let mut game = game_with(corridor_world(Pos { y: 5, x: 4 }, Some(Pos { y: 5, x: 3 }), 10));
        // The spawn attempt after the fatal hit must not draw anything.
        game.monster_tick(&mut Script(VecDeque::new()));

        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.world().map(|world| world.player.hp), Some(0));
        assert_eq!(game.log().last(), Some(&GameEvent::GameOver));
    }

    #[test]
    fn hit_points_never_drop_below_zero() {
        let mut game = game_with(corridor_world(Pos { y: 5, x: 4 }, Some(Pos { y: 5, x: 3 }), 4));
        game.move_monster(&mut Script(VecDeque::new()));
        assert_eq!(game.world().map(|world| world.player.hp), Some(0));
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn inactive_monster_does_not_move() {
        let mut game = game_with(corridor_world(Pos { y: 5, x: 4 }, None, 100));
        game.move_monster(&mut Script(VecDeque::new()));
        assert!(game.log().is_empty());
    }

    #[test]
    fn failed_spawn_roll_leaves_the_monster_inactive() {
        let mut game = game_with(corridor_world(Pos { y: 5, x: 4 }, None, 100));
        game.spawn_monster(&mut Script(VecDeque::from([u64::MAX])));
        assert_eq!(game.world().map(|world| world.monster.active), Some(false));
    }

    #[test]
    fn active_monster_is_not_respawned() {
        let mut game = game_with(corridor_world(Pos { y: 5, x: 4 }, Some(Pos { y: 5, x: 8 }), 100));
        game.spawn_monster(&mut Script(VecDeque::new()));
        assert_eq!(
            game.world().map(|world| world.monster),
            Some(Monster { pos: Pos { y: 5, x: 8 }, active: true })
        );
    }

    #[test]
    fn successful_roll_spawns_on_an_open_cell() {
        let mut game = game_with(corridor_world(Pos { y: 5, x: 4 }, None, 100));
        // roll, then candidate x=7, y=5
        game.spawn_monster(&mut Script(VecDeque::from([0, 7, 5])));
        assert_eq!(
            game.world().map(|world| world.monster),
            Some(Monster { pos: Pos { y: 5, x: 7 }, active: true })
        );
        assert_eq!(game.log(), &[GameEvent::MonsterSpawned { at: Pos { y: 5, x: 7 } }]);
    }
}
