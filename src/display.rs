//! Rendering layer — all terminal I/O lives here.
//!
//! The shell's only contract with the core is the grid snapshot: each tick
//! it receives the rebuilt buffer and maps every symbol to a colored glyph.
//! No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::grid::{Grid, SYM_BULLET, SYM_ENEMY, SYM_PLAYER};
use crate::NUM_ROWS;

// Palette from the original: green invaders, red player, white bullet.
const C_ENEMY: Color = Color::Green;
const C_PLAYER: Color = Color::Red;
const C_BULLET: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Render one complete frame from the snapshot.
pub fn render<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for (row, cells) in grid.rows().iter().enumerate() {
        for (col, &symbol) in cells.iter().enumerate() {
            let color = match symbol {
                SYM_ENEMY => C_ENEMY,
                SYM_PLAYER => C_PLAYER,
                SYM_BULLET => C_BULLET,
                _ => continue,
            };
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(style::SetForegroundColor(color))?;
            out.queue(Print(symbol))?;
        }
    }

    draw_controls_hint(out)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, NUM_ROWS as u16))?;
    out.flush()?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, NUM_ROWS as u16 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("1 : Left   2 : Right   3 : Shoot   4 : Quit"))?;
    Ok(())
}
