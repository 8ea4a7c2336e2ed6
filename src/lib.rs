//! Grid snake: a fixed-timestep snake simulation on a pixel-aligned grid.
//!
//! The library holds the deterministic core. Input and rendering live in
//! the binary and only talk to [`GameState`].

pub mod cell;
pub mod config;
pub mod grid;
pub mod snake;
pub mod state;

pub use cell::{Cell, Color, Role};
pub use grid::Grid;
pub use snake::{Direction, Snake};
pub use state::{DeathCause, GameState, TickOutcome};
