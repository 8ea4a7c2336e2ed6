use crate::cell::{Cell, Role};
use crate::config::{CELL_SIZE, DEAD_COLOR, GRID_SIZE, INITIAL_SNAKE_LENGTH, SNAKE_COLOR};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Pixel offset of one step. y grows upward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, CELL_SIZE),
            Down => (0, -CELL_SIZE),
            Left => (-CELL_SIZE, 0),
            Right => (CELL_SIZE, 0),
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// Ordered segments, index 0 is the head and the last one the tail.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// Segments stacked downward from the center of the grid, head on top.
    pub fn generate() -> Self {
        let mid = GRID_SIZE / 2;
        let x = CELL_SIZE * mid;

        let body = (0..INITIAL_SNAKE_LENGTH)
            .map(|i| {
                let role = match i {
                    0 => Role::Head,
                    i if i == INITIAL_SNAKE_LENGTH - 1 => Role::Tail,
                    _ => Role::Body,
                };
                Cell::new(x, CELL_SIZE * (mid - i as i32), CELL_SIZE, role, SNAKE_COLOR)
            })
            .collect();
        Snake { body }
    }

    /// Builds a snake from explicit segments, head first. Used for scripted setups.
    ///
    /// Collision checks walk the segments behind the head, so a snake is never
    /// shorter than `INITIAL_SNAKE_LENGTH`.
    pub fn from_segments(body: Vec<Cell>) -> Self {
        assert!(
            body.len() >= INITIAL_SNAKE_LENGTH,
            "a snake needs at least {} segments, got {}",
            INITIAL_SNAKE_LENGTH,
            body.len()
        );
        Snake { body }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> &Cell {
        &self.body[0]
    }

    pub fn tail(&self) -> &Cell {
        &self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Moves every segment into its predecessor's slot, then steps the head.
    ///
    /// Role and color are copied along with the position, so they belong to
    /// the slot rather than to a particular segment.
    pub fn move_step(&mut self, direction: Direction) -> Cell {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        let (dx, dy) = direction.delta();
        let head = &mut self.body[0];
        head.x += dx;
        head.y += dy;
        *head
    }

    /// Turns the current tail into body and appends a new tail one cell to its left.
    pub fn grow(&mut self) {
        let last = self.body.len() - 1;
        self.body[last].role = Role::Body;

        let old_tail = self.body[last];
        self.body.push(Cell::new(old_tail.x - CELL_SIZE, old_tail.y, CELL_SIZE, Role::Tail, SNAKE_COLOR));
    }

    pub fn occupies(&self, cell: &Cell) -> bool {
        self.body.iter().any(|seg| seg.same_position(cell))
    }

    pub fn paint_dead(&mut self) {
        for seg in self.body.iter_mut() {
            seg.color = DEAD_COLOR;
        }
    }
}
