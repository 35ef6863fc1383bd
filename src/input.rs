//! Command dispatch — an ordered, first-match-wins table.
//!
//! The presentation shell feeds one character per keystroke to
//! `Dispatcher::dispatch`.  Links are scanned in construction order and only
//! the first match acts; unmatched input falls off the end of the table and
//! is silently dropped.  New commands are added by appending a link, not by
//! editing existing ones.

use crate::compute::Outcome;
use crate::entities::World;
use crate::grid::SYM_BULLET;
use crate::movement::Movement;

/// What a matched link does to the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    MoveLeft,
    MoveRight,
    Shoot,
    Quit,
}

struct Link {
    command: char,
    action: Action,
}

/// The fixed `'1' → '2' → '3' → '4'` dispatch table.
pub struct Dispatcher {
    links: Vec<Link>,
}

impl Dispatcher {
    pub fn new() -> Self {
        let links = vec![
            Link { command: '1', action: Action::MoveLeft },
            Link { command: '2', action: Action::MoveRight },
            Link { command: '3', action: Action::Shoot },
            Link { command: '4', action: Action::Quit },
        ];
        Dispatcher { links }
    }

    /// Apply `command` to the world.  Returns a terminal outcome for the
    /// quit link, `None` otherwise (including unrecognized input).
    pub fn dispatch(&self, command: char, world: &mut World) -> Option<Outcome> {
        let link = self.links.iter().find(|link| link.command == command)?;
        match link.action {
            Action::MoveLeft => {
                world.player.set_movement(Movement::left());
                world.player.move_once();
                None
            }
            Action::MoveRight => {
                world.player.set_movement(Movement::right());
                world.player.move_once();
                None
            }
            Action::Shoot => {
                world.fire();
                // The bullet marker goes one row below the player's stored
                // y into the current snapshot; the next rebuild clears it.
                world
                    .grid
                    .stamp(world.player.y + 1, world.player.x, SYM_BULLET);
                None
            }
            Action::Quit => Some(Outcome::PlayerQuit),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new()
    }
}
