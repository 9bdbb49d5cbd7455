//! Keyboard to command mapping.

use std::mem;

use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::KeyCode;
use maze_core::{Command, Direction};

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Space => Some(Command::Confirm),
        KeyCode::Up | KeyCode::W => Some(Command::Move(Direction::Up)),
        KeyCode::Down | KeyCode::S => Some(Command::Move(Direction::Down)),
        KeyCode::Left | KeyCode::A => Some(Command::Move(Direction::Left)),
        KeyCode::Right | KeyCode::D => Some(Command::Move(Direction::Right)),
        _ => None,
    }
}

/// Turns raw key-down events into commands in arrival order. Auto-repeat events count as
/// presses, so holding an arrow keeps the player walking.
#[derive(Debug, Default)]
pub struct KeyEventCommands {
    commands: Vec<Command>,
}

impl KeyEventCommands {
    pub fn take(&mut self) -> Vec<Command> {
        mem::take(&mut self.commands)
    }
}

impl EventHandler for KeyEventCommands {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        self.commands.extend(command_for_key(keycode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_and_duplicate_presses_all_become_commands() {
        let mut keys = KeyEventCommands::default();
        keys.key_down_event(KeyCode::Right, KeyMods::default(), false);
        keys.key_down_event(KeyCode::Right, KeyMods::default(), true);
        keys.key_down_event(KeyCode::Right, KeyMods::default(), true);
        keys.key_down_event(KeyCode::D, KeyMods::default(), false);

        assert_eq!(keys.take(), vec![Command::Move(Direction::Right); 4]);
        assert!(keys.take().is_empty(), "take drains the buffer");
    }

    #[test]
    fn key_up_and_unmapped_keys_produce_nothing() {
        let mut keys = KeyEventCommands::default();
        keys.key_up_event(KeyCode::Up, KeyMods::default());
        keys.key_down_event(KeyCode::Escape, KeyMods::default(), false);
        assert!(keys.take().is_empty());
    }
}
