use rand::Rng;

use crate::cell::{Cell, Role};
use crate::config::{APPLE_COLOR, CELL_SIZE, EMPTY_COLOR, GRID_SIZE};

/// The fixed set of cells making up the playfield, `0..=GRID_SIZE` on both axes.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    pub fn generate() -> Self {
        let mut cells = Vec::with_capacity(((GRID_SIZE + 1) * (GRID_SIZE + 1)) as usize);

        for x in 0..=GRID_SIZE {
            for y in 0..=GRID_SIZE {
                cells.push(Cell::new(CELL_SIZE * x, CELL_SIZE * y, CELL_SIZE, Role::Empty, EMPTY_COLOR));
            }
        }

        Grid { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True for grid-aligned positions inside `0..=GRID_SIZE` cells on both axes.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let max = CELL_SIZE * GRID_SIZE;
        (0..=max).contains(&x) && (0..=max).contains(&y) && x % CELL_SIZE == 0 && y % CELL_SIZE == 0
    }

    /// Picks a cell uniformly at random and tags it as the apple.
    ///
    /// The chosen grid cell keeps its apple tag afterwards. Avoiding the
    /// snake is the caller's job: call again until the result is free.
    pub fn place_apple<R: Rng>(&mut self, rng: &mut R) -> Cell {
        let idx = rng.gen_range(0..self.cells.len());
        let cell = &mut self.cells[idx];
        cell.role = Role::Apple;
        cell.color = APPLE_COLOR;
        *cell
    }
}
