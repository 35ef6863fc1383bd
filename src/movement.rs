//! Movement strategies — one variant per behavior, applied through a single
//! dispatch function.
//!
//! A strategy is bound to exactly one entity by storing it in that entity's
//! `movement` slot (see `entities`); rebinding replaces the old strategy.

use thiserror::Error;

use crate::GRID_WIDTH;

/// A recoverable edge condition: the move was refused and the position left
/// untouched.  Converted to an informational notice at the call site, never
/// propagated further.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BoundaryViolation {
    #[error("Cannot move left - already at leftmost position")]
    LeftEdge,
    #[error("Cannot move right - already at rightmost position")]
    RightEdge,
}

/// A swappable unit of behavior.  Each variant carries its step so new
/// movements are added as new variants, not by editing existing ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Player, leftward.  Refused at the left edge.
    Left { step: i32 },
    /// Player, rightward.  Refused when the result would leave the grid.
    Right { step: i32 },
    /// Enemy, downward.  No bound check.
    Down { step: i32 },
    /// Bullet, upward.  No bound check.
    Bullet { step: i32 },
}

impl Movement {
    pub fn left() -> Self {
        Movement::Left { step: 2 }
    }

    pub fn right() -> Self {
        Movement::Right { step: 2 }
    }

    pub fn down() -> Self {
        Movement::Down { step: 1 }
    }

    pub fn bullet() -> Self {
        Movement::Bullet { step: 1 }
    }

    /// Apply this movement to a position.  Boundary refusals leave the
    /// position exactly as it was.
    pub fn apply(&self, x: &mut i32, y: &mut i32) -> Result<(), BoundaryViolation> {
        match *self {
            Movement::Left { step } => {
                if *x > 0 {
                    *x -= step;
                    Ok(())
                } else {
                    Err(BoundaryViolation::LeftEdge)
                }
            }
            Movement::Right { step } => {
                // Pre-check so x is never set out of range.
                if *x + step > GRID_WIDTH as i32 - 1 {
                    Err(BoundaryViolation::RightEdge)
                } else {
                    *x += step;
                    Ok(())
                }
            }
            Movement::Down { step } => {
                *y += step;
                Ok(())
            }
            Movement::Bullet { step } => {
                *y -= step;
                Ok(())
            }
        }
    }
}
