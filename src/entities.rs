//! Game entities and the world that owns them.
//!
//! `Entity` is the one shape shared by the three roles (player, enemy,
//! bullet): an integer grid position plus an optional bound `Movement`.
//! `World` replaces the original's singletons with plainly owned instances —
//! "exactly one player, at most one bullet" falls out of ownership instead
//! of lazy statics.

use log::info;

use crate::grid::Grid;
use crate::movement::Movement;
use crate::NUM_ROWS;

/// Position plus an optional behavior binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    movement: Option<Movement>,
}

impl Entity {
    pub fn new(x: i32, y: i32) -> Self {
        Entity {
            x,
            y,
            movement: None,
        }
    }

    /// Bind a movement strategy, discarding any previous binding.
    pub fn set_movement(&mut self, movement: Movement) {
        self.movement = Some(movement);
    }

    pub fn movement(&self) -> Option<Movement> {
        self.movement
    }

    /// Invoke the bound strategy once.  With nothing bound this is a no-op;
    /// a boundary refusal is logged as a notice and absorbed.
    pub fn move_once(&mut self) {
        if let Some(movement) = self.movement {
            if let Err(notice) = movement.apply(&mut self.x, &mut self.y) {
                info!("{notice}");
            }
        }
    }
}

/// All simulation state: the three entity roles and the derived grid
/// snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    /// The player, at `(0, 0)`; only its `x` ever changes.
    pub player: Entity,
    /// At most one bullet per run, created on the first fire.
    pub bullet: Option<Entity>,
    /// One enemy per row index, three columns apart.  Fixed length after
    /// construction; insertion order is display and check order.
    pub enemies: Vec<Entity>,
    pub grid: Grid,
}

impl World {
    /// Initial layout: player at the origin, enemies at `(i*3, 0)`, no
    /// bullet, blank grid.
    pub fn new() -> Self {
        let enemies = (0..NUM_ROWS as i32).map(|i| Entity::new(i * 3, 0)).collect();
        World {
            player: Entity::new(0, 0),
            bullet: None,
            enemies,
            grid: Grid::new(),
        }
    }

    /// Fire the player's bullet.  The bullet is created at the player's
    /// current position the first time only; firing again while it exists
    /// leaves it exactly where it was.  (Deliberately kept from the
    /// original single-bullet behavior.)
    pub fn fire(&mut self) {
        if self.bullet.is_none() {
            self.bullet = Some(Entity::new(self.player.x, self.player.y));
        }
        info!("Player has fired!");
    }
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}
