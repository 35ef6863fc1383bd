//! A minimal Space Invaders: a player slides along the bottom row of a
//! fixed grid, a column of enemies marches down one cell per tick, and the
//! player can fire a single bullet.
//!
//! The core is deterministic and terminal-free: `compute::tick` advances the
//! world, `input::Dispatcher` applies commands, and the `grid::Grid` snapshot
//! is rebuilt from entity state every tick.  All terminal I/O lives in
//! `display` and `main`.

pub mod compute;
pub mod display;
pub mod entities;
pub mod grid;
pub mod input;
pub mod movement;

/// Number of grid rows; the player sits on row `NUM_ROWS - 1`.
pub const NUM_ROWS: usize = 24;

/// Number of grid columns.
pub const GRID_WIDTH: usize = 90;
