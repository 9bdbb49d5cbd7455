//! Headless soak harness: plays many seeded runs with random input on a fixed frame clock
//! and checks the game's invariants after every frame.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use maze_core::{
    Command, Direction, DrawCommand, FixedStepFrames, FrameSource, Game, GameEvent, GameLoop,
    LoopControl, Phase, Renderer, Scene, Viewport, seeded_rng,
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of independent runs, seeded `seed`, `seed + 1`, ...
    #[arg(short, long, default_value_t = 20)]
    runs: u64,
    /// Frame budget per run
    #[arg(short, long, default_value_t = 20_000)]
    frames: u64,
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    #[arg(long, default_value_t = 1000.0)]
    width: f32,
    #[arg(long, default_value_t = 760.0)]
    height: f32,
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize, PartialEq)]
struct RunReport {
    seed: u64,
    frames: u64,
    game_over: bool,
    final_hp: i32,
    spawns: usize,
    hits: usize,
    snapshot_hash: String,
}

#[derive(Debug, Serialize)]
struct SoakReport {
    runs: Vec<RunReport>,
    game_overs: usize,
}

/// Counts presented frames and checks each one clears before drawing.
#[derive(Default)]
struct CountingRenderer {
    frames: u64,
    unclear_frames: u64,
}

impl Renderer for CountingRenderer {
    fn present(&mut self, scene: &Scene) {
        self.frames += 1;
        if !matches!(scene.commands.first(), Some(DrawCommand::Clear(_))) {
            self.unclear_frames += 1;
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("MAZE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    let args = Args::parse();
    if args.frame_ms == 0 {
        bail!("--frame-ms must be positive");
    }

    let viewport = Viewport::new(args.width, args.height);
    let mut runs = Vec::new();
    for offset in 0..args.runs {
        let seed = args.seed.wrapping_add(offset);
        let report = soak_run(seed, viewport, args.frames, Duration::from_millis(args.frame_ms))
            .with_context(|| format!("soak run with seed {seed} failed"))?;
        info!(seed, frames = report.frames, game_over = report.game_over, "run finished");
        runs.push(report);
    }

    let game_overs = runs.iter().filter(|run| run.game_over).count();
    let report = SoakReport { runs, game_overs };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).context("serializing report")?);
    } else {
        for run in &report.runs {
            println!(
                "seed {:>6}: {:>6} frames, hp {:>3}, {:>3} spawns, {:>2} hits, {}{}",
                run.seed,
                run.frames,
                run.final_hp,
                run.spawns,
                run.hits,
                run.snapshot_hash,
                if run.game_over { " GAME OVER" } else { "" }
            );
        }
        println!("{} of {} runs ended in game over", report.game_overs, report.runs.len());
    }
    Ok(())
}

fn soak_run(seed: u64, viewport: Viewport, frames: u64, step: Duration) -> Result<RunReport> {
    let mut game_loop = GameLoop::new(Game::new(viewport), seeded_rng(seed));
    // Input gets its own stream so the game's random sequence matches a real session's.
    let mut input_rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5EED_1A7E_0000_0000);
    let mut renderer = CountingRenderer::default();
    let mut clock = FixedStepFrames::new(step, frames);
    let mut spawns = 0;
    let mut hits = 0;

    game_loop.push_command(Command::Confirm);
    let mut played = 0;
    while let Some(now) = clock.next_frame() {
        played += 1;
        if input_rng.next_u64() % 4 == 0 {
            let direction = Direction::CARDINALS[(input_rng.next_u64() % 4) as usize];
            game_loop.push_command(Command::Move(direction));
        }

        let events_before = game_loop.game().log().len();
        let control = game_loop.frame(now, &mut renderer);
        for event in &game_loop.game().log()[events_before..] {
            match event {
                GameEvent::MonsterSpawned { .. } => spawns += 1,
                GameEvent::PlayerHit { .. } => hits += 1,
                _ => {}
            }
        }
        check_invariants(game_loop.game()).with_context(|| format!("frame {played}"))?;

        if control == LoopControl::Stopped {
            break;
        }
    }

    if renderer.unclear_frames > 0 {
        bail!("{} frames were drawn without clearing", renderer.unclear_frames);
    }
    if renderer.frames != played {
        warn!(presented = renderer.frames, played, "frame count mismatch");
    }

    let game = game_loop.game();
    Ok(RunReport {
        seed,
        frames: played,
        game_over: game.phase() == Phase::GameOver,
        final_hp: game.world().map_or(0, |world| world.player.hp),
        spawns,
        hits,
        snapshot_hash: format!("0x{:016x}", game.snapshot_hash()),
    })
}

fn check_invariants(game: &Game) -> Result<()> {
    let Some(world) = game.world() else {
        if game.phase() != Phase::Idle {
            bail!("phase {:?} without a world", game.phase());
        }
        return Ok(());
    };
    let rules = game.rules();

    if !world.grid.is_path(world.player.pos) {
        bail!("player stands on a wall at {:?}", world.player.pos);
    }
    if world.monster.active && !world.grid.is_path(world.monster.pos) {
        bail!("monster stands on a wall at {:?}", world.monster.pos);
    }
    if !(0..=rules.starting_hp).contains(&world.player.hp) {
        bail!("player hp {} outside 0..={}", world.player.hp, rules.starting_hp);
    }
    if (world.player.hp == 0) != (game.phase() == Phase::GameOver) {
        bail!("hp {} does not match phase {:?}", world.player.hp, game.phase());
    }
    if (world.player.hp - rules.starting_hp) % rules.collision_damage != 0 {
        bail!("hp {} is not a whole number of hits", world.player.hp);
    }
    let (cols, rows) = game.viewport().grid_size(rules.tile_size);
    let grid_size = (world.grid.cols(), world.grid.rows());
    if grid_size != (cols, rows) {
        bail!("grid {grid_size:?} does not match viewport-derived {cols}x{rows}");
    }
    Ok(())
}
