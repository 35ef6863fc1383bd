//! Tick-driven simulation: per-tick world advancement plus the fixed-period
//! scheduler that drives it.
//!
//! `tick` is pure with respect to time and I/O, so tests can advance the
//! world any number of ticks instantly.  `Scheduler` adds the wall-clock
//! period and the command channel; the clock is injected so tests run
//! without sleeping.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::warn;

use crate::entities::World;
use crate::grid::{Grid, SYM_ENEMY, SYM_PLAYER};
use crate::input::Dispatcher;
use crate::movement::Movement;
use crate::NUM_ROWS;

/// Wall-clock period of one tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(1600);

// ── Terminal conditions ──────────────────────────────────────────────────────

/// Why the simulation ended.  These are the only two ways it ever does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    PlayerQuit,
    EnemyReachedBase,
}

impl Outcome {
    /// The user-visible termination notice.
    pub fn notice(&self) -> &'static str {
        match self {
            Outcome::PlayerQuit => "Game Over - Player Quit",
            Outcome::EnemyReachedBase => "Game Over - Enemy Reached Your Base",
        }
    }
}

// ── Per-tick advancement ─────────────────────────────────────────────────────

/// Re-derive the grid snapshot from entity state: clear, stamp enemies,
/// stamp the player on the bottom row.  Later stamps overwrite earlier ones.
pub fn rebuild_grid(world: &mut World) {
    world.grid.clear();
    for enemy in &world.enemies {
        world.grid.stamp(enemy.y, enemy.x, SYM_ENEMY);
    }
    world.grid.stamp(NUM_ROWS as i32 - 1, world.player.x, SYM_PLAYER);
}

/// Advance the world by one tick.
///
/// 1. Every enemy still on or below the top row moves down one cell.
/// 2. Enemies are checked in sequence order; the first to reach the row
///    past the base ends the game immediately.
/// 3. Otherwise the grid snapshot is rebuilt for the presentation shell.
pub fn tick(world: &mut World) -> Option<Outcome> {
    for enemy in &mut world.enemies {
        if enemy.y >= 0 {
            enemy.set_movement(Movement::down());
            enemy.move_once();
        }
    }

    for enemy in &world.enemies {
        if enemy.y == NUM_ROWS as i32 + 1 {
            return Some(Outcome::EnemyReachedBase);
        }
    }

    rebuild_grid(world);
    None
}

// ── Clock abstraction ────────────────────────────────────────────────────────

/// Result of one wait on the command channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wait {
    /// A command arrived before the timeout.
    Command(char),
    /// The timeout elapsed with no command.
    Elapsed,
}

/// The inter-tick wait, abstracted so tests can run tick-for-tick without
/// real delays.
pub trait Clock {
    fn wait(&mut self, commands: &Receiver<char>, timeout: Duration) -> Wait;
}

/// Production clock: blocks on the channel up to the timeout.
#[derive(Default)]
pub struct WallClock {
    input_closed: bool,
}

impl Clock for WallClock {
    fn wait(&mut self, commands: &Receiver<char>, timeout: Duration) -> Wait {
        match commands.recv_timeout(timeout) {
            Ok(command) => Wait::Command(command),
            Err(RecvTimeoutError::Timeout) => Wait::Elapsed,
            Err(RecvTimeoutError::Disconnected) => {
                // Input side went away; ticks keep running regardless.
                if !self.input_closed {
                    warn!("input channel closed; continuing without input");
                    self.input_closed = true;
                }
                thread::sleep(timeout);
                Wait::Elapsed
            }
        }
    }
}

// ── Cancellation ─────────────────────────────────────────────────────────────

/// Cooperative shutdown signal, checked once per tick.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ── Scheduler ────────────────────────────────────────────────────────────────

/// Fixed-period driver for the simulation.
///
/// Commands and ticks interleave on the calling thread: the scheduler waits
/// out each period on the command channel, dispatching commands as they
/// arrive, then advances the world once and presents the rebuilt snapshot.
/// No entity state is ever touched from another thread.
pub struct Scheduler<C: Clock> {
    period: Duration,
    clock: C,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(period: Duration, clock: C) -> Self {
        Scheduler { period, clock }
    }

    /// Run until a terminal condition or cancellation.  Returns `None` only
    /// when cancelled.
    pub fn run<F>(
        &mut self,
        world: &mut World,
        commands: &Receiver<char>,
        cancel: &CancelToken,
        mut present: F,
    ) -> Option<Outcome>
    where
        F: FnMut(&Grid),
    {
        let dispatcher = Dispatcher::new();
        loop {
            if cancel.is_cancelled() {
                return None;
            }

            let tick_start = Instant::now();
            while let Some(remaining) = self.period.checked_sub(tick_start.elapsed()) {
                match self.clock.wait(commands, remaining) {
                    Wait::Command(command) => {
                        if let Some(outcome) = dispatcher.dispatch(command, world) {
                            return Some(outcome);
                        }
                    }
                    Wait::Elapsed => break,
                }
            }

            if let Some(outcome) = tick(world) {
                return Some(outcome);
            }
            present(&world.grid);
        }
    }
}
