mod frame_input;
mod ui_render;
mod window_config;

use std::time::Duration;

use clap::Parser;
use macroquad::prelude::{Conf, get_time, next_frame};
use maze_app::cli::Cli;
use maze_app::format_snapshot_hash;
use maze_app::logging::init_logging;
use maze_core::{Game, GameLoop, LoopControl, seeded_rng};
use tracing::{debug, info};

use crate::frame_input::FrameInput;
use crate::ui_render::MacroquadRenderer;
use crate::window_config::{build_window_conf, current_viewport};

fn window_conf() -> Conf {
    build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    let cli = Cli::parse();
    let seed = cli.seed_choice();
    info!(seed = seed.value(), ?seed, "maze chase starting; pass --seed to replay this maze");

    let mut game_loop = GameLoop::new(Game::new(current_viewport()), seeded_rng(seed.value()));
    let mut renderer = MacroquadRenderer;
    let mut input = FrameInput::register();
    let mut last_control = None;

    loop {
        let viewport = current_viewport();
        if viewport != game_loop.game().viewport() {
            debug!(width = viewport.width, height = viewport.height, "viewport resized");
            game_loop.game_mut().set_viewport(viewport);
        }

        for command in input.capture() {
            game_loop.push_command(command);
        }

        let now = Duration::from_secs_f64(get_time());
        let control = game_loop.frame(now, &mut renderer);
        if last_control != Some(control) {
            let snapshot = format_snapshot_hash(game_loop.game().snapshot_hash());
            match control {
                LoopControl::Continue => info!(%snapshot, "run in progress"),
                LoopControl::Stopped => info!(%snapshot, "waiting for space"),
            }
            last_control = Some(control);
        }

        next_frame().await
    }
}
