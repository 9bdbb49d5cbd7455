pub mod command;
pub mod frame_loop;
pub mod game;
pub mod grid;
pub mod mazegen;
pub mod monster;
pub mod render;
pub mod rng;
pub mod rules;
pub mod types;

pub use command::{Command, CommandQueue};
pub use frame_loop::{FixedStepFrames, FrameSource, GameLoop, LoopControl, LoopExit};
pub use game::{Game, World};
pub use grid::{Grid, Viewport};
pub use render::{DrawCommand, Paint, RecordingRenderer, Renderer, Scene, TextAlign, compose};
pub use rng::{RandomSource, seeded_rng};
pub use rules::Rules;
pub use types::*;
