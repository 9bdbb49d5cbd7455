//! Frame composition as a backend-neutral draw list.
//!
//! `compose` turns the game into a `Scene`; a `Renderer` presents it. The draw list uses
//! semantic paints so the backend owns the actual palette.

use crate::game::Game;
use crate::rules::{MONSTER_SIZE_RATIO, PLAYER_SIZE_RATIO};
use crate::types::{Phase, Pos, TileKind};

const HP_TEXT_X: f32 = 10.0;
const HP_TEXT_Y: f32 = 25.0;
const HP_FONT_SIZE: f32 = 20.0;
const TITLE_FONT_SIZE: f32 = 40.0;
const PROMPT_FONT_SIZE: f32 = 20.0;
const OVERLAY_LINE_OFFSET: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Background,
    Wall,
    Player,
    Monster,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// `x` is the left edge of the text.
    Left,
    /// `x` is the horizontal center of the text.
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Paint),
    FillRect { x: f32, y: f32, width: f32, height: f32, paint: Paint },
    /// `y` is the text baseline.
    Text { text: String, x: f32, y: f32, size: f32, align: TextAlign, paint: Paint },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects_with(&self, paint: Paint) -> usize {
        self.commands
            .iter()
            .filter(|command| {
                matches!(command, DrawCommand::FillRect { paint: p, .. } if *p == paint)
            })
            .count()
    }
}

/// Presents a composed frame on some surface.
pub trait Renderer {
    fn present(&mut self, scene: &Scene);
}

/// Keeps every presented scene. Handy for headless runs.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Scene>,
}

impl Renderer for RecordingRenderer {
    fn present(&mut self, scene: &Scene) {
        self.frames.push(scene.clone());
    }
}

pub fn compose(game: &Game) -> Scene {
    let mut commands = vec![DrawCommand::Clear(Paint::Background)];
    let tile = game.rules().tile_size;

    if let Some(world) = game.world() {
        for (pos, _) in world.grid.cells().filter(|(_, tile)| *tile == TileKind::Wall) {
            commands.push(DrawCommand::FillRect {
                x: pos.x as f32 * tile,
                y: pos.y as f32 * tile,
                width: tile,
                height: tile,
                paint: Paint::Wall,
            });
        }

        commands.push(centered_square(world.player.pos, tile, PLAYER_SIZE_RATIO, Paint::Player));
        if world.monster.active {
            commands.push(centered_square(
                world.monster.pos,
                tile,
                MONSTER_SIZE_RATIO,
                Paint::Monster,
            ));
        }

        commands.push(DrawCommand::Text {
            text: format!("HP: {}", world.player.hp),
            x: HP_TEXT_X,
            y: HP_TEXT_Y,
            size: HP_FONT_SIZE,
            align: TextAlign::Left,
            paint: Paint::Text,
        });
    }

    let overlay = match game.phase() {
        Phase::Idle => Some(("MAZE GAME", "Press Space to Start")),
        Phase::GameOver => Some(("GAME OVER", "Press Space to Restart")),
        Phase::Running => None,
    };
    if let Some((title, prompt)) = overlay {
        let viewport = game.viewport();
        let center_x = viewport.width / 2.0;
        let center_y = viewport.height / 2.0;
        let title_y = center_y - OVERLAY_LINE_OFFSET;
        let prompt_y = center_y + OVERLAY_LINE_OFFSET;
        commands.push(centered_text(title, center_x, title_y, TITLE_FONT_SIZE));
        commands.push(centered_text(prompt, center_x, prompt_y, PROMPT_FONT_SIZE));
    }

    Scene { commands }
}

fn centered_square(pos: Pos, tile: f32, ratio: f32, paint: Paint) -> DrawCommand {
    let size = tile * ratio;
    let inset = (tile - size) / 2.0;
    DrawCommand::FillRect {
        x: pos.x as f32 * tile + inset,
        y: pos.y as f32 * tile + inset,
        width: size,
        height: size,
        paint,
    }
}

fn centered_text(text: &str, x: f32, y: f32, size: f32) -> DrawCommand {
    DrawCommand::Text {
        text: text.to_string(),
        x,
        y,
        size,
        align: TextAlign::Center,
        paint: Paint::Text,
    }
}
