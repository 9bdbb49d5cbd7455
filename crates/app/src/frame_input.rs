//! Keyboard input collection for one rendered frame.

use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use maze_app::input::KeyEventCommands;
use maze_core::Command;

pub struct FrameInput {
    subscriber: usize,
    keys: KeyEventCommands,
}

impl FrameInput {
    /// Needs a live macroquad context, so call it from inside the main future.
    pub fn register() -> Self {
        Self { subscriber: register_input_subscriber(), keys: KeyEventCommands::default() }
    }

    /// Every key-down event since the previous call, mapped to commands.
    pub fn capture(&mut self) -> Vec<Command> {
        repeat_all_miniquad_input(&mut self.keys, self.subscriber);
        self.keys.take()
    }
}
