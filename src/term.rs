use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyEvent, read, poll};
use crossterm::style::Color as TermColor;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use grid_snake::config::{CELL_SIZE, GRID_SIZE};
use grid_snake::{Cell, Color, GameState, Grid, Role};

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

const GRID_CHAR: char = '·';
const BLOCK: &str = "  ";

/// Owns the terminal while the game runs and draws the board each frame.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> crossterm::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout() })
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    /// Terminal area the board, its border and the status line take up.
    pub fn required_size() -> Coords {
        let side = (GRID_SIZE + 1) as TermInt;
        (side * 2 + 2, side + 3)
    }

    pub fn read_key_blocking(&self) -> crossterm::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn read_key_events_queue(&self) -> crossterm::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn clear(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))
    }

    /// Redraws the whole board from a read-only view of the state.
    pub fn draw(&mut self, state: &GameState) -> crossterm::Result<()> {
        self.draw_borders()?;

        for cell in state.grid().cells() {
            if let Some(pos) = to_screen(state.grid(), cell) {
                queue!(
                    self.stdout,
                    cursor::MoveTo(pos.0, pos.1),
                    style::SetForegroundColor(TermColor::DarkGrey),
                    style::Print(GRID_CHAR),
                    style::Print(' '),
                    style::ResetColor
                )?;
            }
        }

        self.fill(state.grid(), state.apple(), BLOCK)?;

        let head_glyph: String = [state.direction().head_char(), ' '].iter().collect();
        for seg in state.snake().body().iter().rev() {
            let glyph = if seg.role == Role::Head { head_glyph.as_str() } else { BLOCK };
            self.fill(state.grid(), seg, glyph)?;
        }

        let (_, board_h) = Self::required_size();
        let status = if state.is_dead() {
            format!("Game over! Length: {}", state.snake().len())
        } else {
            format!("Length: {}", state.snake().len())
        };
        queue!(
            self.stdout,
            cursor::MoveTo(0, board_h - 1),
            terminal::Clear(ClearType::CurrentLine),
            style::Print(status)
        )?;

        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> crossterm::Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let (area_w, area_h) = Self::required_size();
        let center = (area_w / 2, area_h / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        let blank: String = " ".repeat(msg_width as usize);
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            queue!(self.stdout, cursor::MoveTo(top_left.0, *y), style::Print(&blank))?;
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            queue!(self.stdout, cursor::MoveTo(top_left.0, y), style::Print(padded_line))?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> crossterm::Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn fill(&mut self, grid: &Grid, cell: &Cell, glyph: &str) -> crossterm::Result<()> {
        if let Some(pos) = to_screen(grid, cell) {
            queue!(
                self.stdout,
                cursor::MoveTo(pos.0, pos.1),
                style::SetBackgroundColor(term_color(cell.color)),
                style::SetForegroundColor(TermColor::White),
                style::Print(glyph),
                style::ResetColor
            )?;
        }
        Ok(())
    }

    fn draw_borders(&mut self) -> crossterm::Result<()> {
        let (width, height) = Self::required_size();
        let end_x = width - 1;
        let end_y = height - 2;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            queue!(self.stdout, cursor::MoveTo(x, 0), style::Print(ch))?;
            queue!(self.stdout, cursor::MoveTo(x, end_y), style::Print(ch))?;
        }

        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(end_x, y), style::Print('|'))?;
        }

        Ok(())
    }
}

/// Maps a pixel-space cell to its terminal position. Rows grow downward,
/// so y is flipped. Cells off the grid have no position.
pub fn to_screen(grid: &Grid, cell: &Cell) -> Option<Coords> {
    if !grid.contains(cell.x, cell.y) {
        return None;
    }

    let col = cell.x / CELL_SIZE;
    let row = GRID_SIZE - cell.y / CELL_SIZE;
    Some((1 + col as TermInt * 2, 1 + row as TermInt))
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Purple => TermColor::Magenta,
    }
}
