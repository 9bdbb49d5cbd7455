//! Window configuration for the desktop app.

use macroquad::window::{Conf, screen_height, screen_width};
use maze_app::APP_NAME;
use maze_core::Viewport;

const DEFAULT_WINDOW_WIDTH: i32 = 1000;
const DEFAULT_WINDOW_HEIGHT: i32 = 760;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // The maze is re-sized from the surface on every restart.
        window_resizable: true,
        ..Default::default()
    }
}

pub fn current_viewport() -> Viewport {
    Viewport::new(screen_width(), screen_height())
}
