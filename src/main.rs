mod game;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use grid_snake::config::LOG_FILE;

fn main() -> Result<()> {
    // The terminal belongs to the board, so logs go to a file.
    // Per-tick trace! events stay filtered out.
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create(LOG_FILE).with_context(|| format!("creating {}", LOG_FILE))?,
    )
    .context("initializing logger")?;

    info!("starting grid-snake");

    let mut game = game::SnakeGame::new()?;
    let result = game
        .initialize()
        .and_then(|_| game.show_intro())
        .and_then(|start| if start { game.play() } else { Ok(()) });

    // Restore even when the loop failed, then report the first error
    let restored = game.restore();
    info!("shutting down");
    result.and(restored)
}
