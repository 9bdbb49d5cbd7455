//! Macroquad presentation of composed scenes.

use macroquad::prelude::*;
use maze_core::{DrawCommand, Paint, Renderer, Scene, TextAlign};

pub struct MacroquadRenderer;

impl Renderer for MacroquadRenderer {
    fn present(&mut self, scene: &Scene) {
        for command in &scene.commands {
            match command {
                DrawCommand::Clear(paint) => clear_background(paint_color(*paint)),
                DrawCommand::FillRect { x, y, width, height, paint } => {
                    draw_rectangle(*x, *y, *width, *height, paint_color(*paint));
                }
                DrawCommand::Text { text, x, y, size, align, paint } => {
                    let left = match align {
                        TextAlign::Left => *x,
                        TextAlign::Center => {
                            *x - measure_text(text, None, *size as u16, 1.0).width / 2.0
                        }
                    };
                    draw_text(text, left, *y, *size, paint_color(*paint));
                }
            }
        }
    }
}

fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::Background => BLACK,
        Paint::Wall => YELLOW,
        Paint::Player => BLUE,
        Paint::Monster => RED,
        Paint::Text => WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_the_classic_colors() {
        assert_eq!(paint_color(Paint::Wall), YELLOW);
        assert_eq!(paint_color(Paint::Background), BLACK);
        assert_eq!(paint_color(Paint::Player), BLUE);
        assert_eq!(paint_color(Paint::Monster), RED);
        assert_eq!(paint_color(Paint::Text), WHITE);
    }
}
