//! Hard-coded configuration. Nothing here is adjustable at runtime.

use std::time::Duration;

use crate::cell::Color;

pub const SCREEN_WIDTH: i32 = 720;
pub const SCREEN_HEIGHT: i32 = 720;

/// Cells per axis. The grid itself spans `0..=GRID_SIZE`.
pub const GRID_SIZE: i32 = 16;

/// Side of one cell in pixels.
pub const CELL_SIZE: i32 = SCREEN_WIDTH / GRID_SIZE;

/// Frames that pass between two simulation ticks.
pub const TICK_THRESHOLD: u32 = 30;

/// Time budget of one frame of the host loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub const INITIAL_SNAKE_LENGTH: usize = 3;

pub const SNAKE_COLOR: Color = Color::Blue;
pub const APPLE_COLOR: Color = Color::Green;
pub const DEAD_COLOR: Color = Color::Purple;
pub const EMPTY_COLOR: Color = Color::Black;

pub const LOG_FILE: &str = "grid-snake.log";
