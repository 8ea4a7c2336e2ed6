use log::{debug, info, trace};
use rand::Rng;

use crate::cell::Cell;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_THRESHOLD};
use crate::grid::Grid;
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeathCause {
    SelfCollision,
    Wall,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved { new_head: Cell },
    Ate { new_head: Cell, apple: Cell },
    Died(DeathCause),
}

/// Everything the simulation owns. Input writes the latched direction,
/// the renderer only reads.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    apple: Cell,
    direction: Direction,
    delay: u32,
    death: Option<DeathCause>,
}

impl GameState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut grid = Grid::generate();
        let mut apple = grid.place_apple(rng);
        let snake = Snake::generate();
        while snake.occupies(&apple) {
            apple = grid.place_apple(rng);
        }

        GameState::from_parts(grid, snake, apple)
    }

    /// Assembles a live state from prepared pieces, direction `Up`.
    pub fn from_parts(grid: Grid, snake: Snake, apple: Cell) -> Self {
        GameState { grid, snake, apple, direction: Direction::Up, delay: 0, death: None }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Cell {
        &self.apple
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn is_dead(&self) -> bool {
        self.death.is_some()
    }

    pub fn death(&self) -> Option<DeathCause> {
        self.death
    }

    /// Latches a direction. It takes effect on the next tick; reversing is allowed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advances one frame. Returns the tick outcome on the frames where a tick runs.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> Option<TickOutcome> {
        if self.is_dead() {
            return None;
        }

        self.delay += 1;
        if self.delay < TICK_THRESHOLD {
            return None;
        }
        self.delay = 0;

        Some(self.tick(rng))
    }

    /// One simulation step: shift, advance, collide, eat.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        if let Some(cause) = self.death {
            return TickOutcome::Died(cause);
        }

        let new_head = self.snake.move_step(self.direction);
        trace!("tick: head {:?} heading {:?}", new_head.position(), self.direction);

        let collision = self.snake.body()[1..].iter().find_map(|seg| {
            if is_touching_self(&new_head, seg) {
                Some(DeathCause::SelfCollision)
            } else if is_touching_wall(&new_head) {
                Some(DeathCause::Wall)
            } else {
                None
            }
        });

        if let Some(cause) = collision {
            self.death = Some(cause);
            self.snake.paint_dead();
            info!("snake died ({:?}) at {:?} with length {}", cause, new_head.position(), self.snake.len());
            return TickOutcome::Died(cause);
        }

        if new_head.same_position(&self.apple) {
            self.snake.grow();
            debug!("apple eaten at {:?}, length now {}", new_head.position(), self.snake.len());

            while self.snake.occupies(&self.apple) {
                self.apple = self.grid.place_apple(rng);
            }
            debug!("apple moved to {:?}", self.apple.position());

            return TickOutcome::Ate { new_head, apple: self.apple };
        }

        TickOutcome::Moved { new_head }
    }
}

pub fn is_touching_self(head: &Cell, other: &Cell) -> bool {
    head.same_position(other)
}

/// Left and bottom edges reject anything below zero, the right edge rejects
/// exactly `SCREEN_WIDTH` and the top edge anything above `SCREEN_HEIGHT`.
pub fn is_touching_wall(head: &Cell) -> bool {
    head.x < 0 || head.x == SCREEN_WIDTH || head.y < 0 || head.y > SCREEN_HEIGHT
}
