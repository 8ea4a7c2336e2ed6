use std::thread::sleep;

use anyhow::{bail, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use grid_snake::config::FRAME_INTERVAL;
use grid_snake::{Direction, GameState};

use crate::term::TermManager;

pub struct SnakeGame {
    term: TermManager,
    state: GameState,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new() -> Result<Self> {
        let term = TermManager::new().context("reading terminal size")?;
        let mut rng = StdRng::from_entropy();
        let state = GameState::new(&mut rng);
        Ok(SnakeGame { term, state, rng })
    }

    pub fn initialize(&mut self) -> Result<()> {
        let (w, h) = self.term.get_terminal_size();
        let (need_w, need_h) = TermManager::required_size();
        if w < need_w || h < need_h {
            bail!("terminal is {}x{}, the board needs at least {}x{}", w, h, need_w, need_h);
        }

        self.term.setup().context("preparing terminal")?;
        Ok(())
    }

    /// Shows the controls and waits for a key. Returns false if the player quit.
    pub fn show_intro(&mut self) -> Result<bool> {
        self.term.clear()?;
        self.term.draw(&self.state)?;
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "Esc or Q to quit",
            "",
            "Press any key to begin"
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.clear()?;
        Ok(!is_quit(&key))
    }

    /// Runs frames until the player quits: input, simulation, draw.
    pub fn play(&mut self) -> Result<()> {
        let mut announced_death = false;

        loop {
            sleep(FRAME_INTERVAL);

            let events = self.term.read_key_events_queue().context("reading input")?;
            if events.iter().any(is_quit) {
                info!("quit requested, final length {}", self.state.snake().len());
                return Ok(());
            }

            if let Some(dir) = direction_from_keys(&events) {
                self.state.set_direction(dir);
            }

            self.state.update(&mut self.rng);

            if announced_death {
                continue;
            }

            self.term.draw(&self.state).context("drawing frame")?;

            if self.state.is_dead() {
                self.term.show_message(&["Game over!", "", "Esc or Q to quit"])?;
                announced_death = true;
            }
        }
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore().context("restoring terminal")?;
        Ok(())
    }
}

/// Picks the direction for this frame from the keys pressed during it.
/// Up beats down beats left beats right when several are present.
pub fn direction_from_keys(events: &[KeyEvent]) -> Option<Direction> {
    let pressed = |want: Direction| events.iter().any(|ev| key_direction(ev) == Some(want));

    [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        .iter()
        .copied()
        .find(|dir| pressed(*dir))
}

fn key_direction(ev: &KeyEvent) -> Option<Direction> {
    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    match ev.code {
        KeyCode::Char('c') => ev.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}
