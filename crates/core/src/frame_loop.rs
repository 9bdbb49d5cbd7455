//! Frame-driven loop: drains input, renders, and paces the monster.
//!
//! The host owns the frame schedule. It calls [`GameLoop::frame`] once per display refresh
//! with the current frame time, or hands a [`FrameSource`] to
//! [`GameLoop::run_until_stopped`] for headless runs.

use std::time::Duration;

use tracing::debug;

use crate::command::{Command, CommandQueue};
use crate::game::Game;
use crate::render::{Renderer, compose};
use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    /// A run is in progress; the host should keep delivering frames.
    Continue,
    /// No run in progress. Only a confirm command brings the loop back.
    Stopped,
}

/// Supplies frame timestamps, measured from an arbitrary fixed origin.
pub trait FrameSource {
    /// `None` once the host stops producing frames.
    fn next_frame(&mut self) -> Option<Duration>;
}

/// Evenly spaced frames for tests and headless runs.
#[derive(Clone, Debug)]
pub struct FixedStepFrames {
    now: Duration,
    step: Duration,
    remaining: u64,
}

impl FixedStepFrames {
    pub fn new(step: Duration, frames: u64) -> Self {
        Self { now: Duration::ZERO, step, remaining: frames }
    }
}

impl FrameSource for FixedStepFrames {
    fn next_frame(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.now += self.step;
        Some(self.now)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    Stopped { frames: u64 },
    SourceExhausted { frames: u64 },
}

pub struct GameLoop<R> {
    game: Game,
    rng: R,
    commands: CommandQueue,
    last_monster_update: Duration,
}

impl<R: RandomSource> GameLoop<R> {
    pub fn new(game: Game, rng: R) -> Self {
        Self { game, rng, commands: CommandQueue::new(), last_monster_update: Duration::ZERO }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn has_pending_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    /// One iteration: apply queued commands, draw, then run the monster if its interval
    /// has strictly elapsed.
    pub fn frame(&mut self, now: Duration, renderer: &mut impl Renderer) -> LoopControl {
        self.apply_commands(now);

        renderer.present(&compose(&self.game));
        if !self.game.is_running() {
            return LoopControl::Stopped;
        }

        if now.saturating_sub(self.last_monster_update) > self.game.rules().monster_interval {
            self.game.monster_tick(&mut self.rng);
            self.last_monster_update = now;
        }
        LoopControl::Continue
    }

    /// Pulls frames until the loop reports `Stopped` or the source runs dry.
    pub fn run_until_stopped(
        &mut self,
        frames: &mut impl FrameSource,
        renderer: &mut impl Renderer,
    ) -> LoopExit {
        let mut count = 0;
        while let Some(now) = frames.next_frame() {
            count += 1;
            if self.frame(now, renderer) == LoopControl::Stopped {
                return LoopExit::Stopped { frames: count };
            }
        }
        LoopExit::SourceExhausted { frames: count }
    }

    /// Starting a run restarts the monster interval at `now`, so the first tick of a run
    /// comes a full interval after Space rather than on the very next frame.
    fn apply_commands(&mut self, now: Duration) {
        let commands: Vec<Command> = self.commands.drain().collect();
        for command in commands {
            match command {
                Command::Confirm if !self.game.is_running() => {
                    self.game.start(&mut self.rng);
                    self.last_monster_update = now;
                    debug!(at_ms = now.as_millis() as u64, "monster timer reset");
                }
                Command::Confirm => {}
                Command::Move(direction) => {
                    self.game.move_player(direction);
                }
            }
        }
    }
}
