//! The grid snapshot — a 2-D character buffer rebuilt from entity state
//! every tick and handed to the presentation shell for drawing.
//!
//! The grid is derived state, never the source of truth: entity positions
//! live in `entities::World`, and the buffer is cleared and re-stamped each
//! tick.  On overlap the last writer wins (stamp order: enemies, then the
//! player).

use crate::{GRID_WIDTH, NUM_ROWS};

pub const BLANK: char = ' ';
pub const SYM_ENEMY: char = 'X';
pub const SYM_PLAYER: char = 'O';
pub const SYM_BULLET: char = '^';

/// `NUM_ROWS × GRID_WIDTH` character buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; GRID_WIDTH]; NUM_ROWS],
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            cells: [[BLANK; GRID_WIDTH]; NUM_ROWS],
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(BLANK);
        }
    }

    /// Write `symbol` at `(row, col)`, overwriting whatever was there.
    /// Positions outside the buffer are silently skipped: entities are free
    /// to wander off-grid and simply stop being drawn.
    pub fn stamp(&mut self, row: i32, col: i32, symbol: char) {
        if (0..NUM_ROWS as i32).contains(&row) && (0..GRID_WIDTH as i32).contains(&col) {
            self.cells[row as usize][col as usize] = symbol;
        }
    }

    /// The symbol at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// All rows, top to bottom, for rasterization.
    pub fn rows(&self) -> &[[char; GRID_WIDTH]] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}
