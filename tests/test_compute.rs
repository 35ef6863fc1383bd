use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use space_invaders::compute::{
    rebuild_grid, tick, CancelToken, Clock, Outcome, Scheduler, Wait,
};
use space_invaders::entities::World;
use space_invaders::grid::{BLANK, SYM_BULLET, SYM_ENEMY, SYM_PLAYER};
use space_invaders::input::Dispatcher;
use space_invaders::NUM_ROWS;

/// Test clock: hands out whatever commands are already queued, then reports
/// the period as elapsed.  Never sleeps, so N-tick runs are instant.
struct FakeClock;

impl Clock for FakeClock {
    fn wait(&mut self, commands: &Receiver<char>, _timeout: Duration) -> Wait {
        match commands.try_recv() {
            Ok(command) => Wait::Command(command),
            Err(_) => Wait::Elapsed,
        }
    }
}

// ── tick: enemy advancement ──────────────────────────────────────────────────

#[test]
fn tick_moves_every_enemy_down_one() {
    let mut world = World::new();
    assert_eq!(tick(&mut world), None);
    for (i, enemy) in world.enemies.iter().enumerate() {
        assert_eq!(enemy.y, 1);
        assert_eq!(enemy.x, i as i32 * 3); // x never changes
    }
}

#[test]
fn tick_never_adds_or_removes_enemies() {
    let mut world = World::new();
    for _ in 0..10 {
        tick(&mut world);
    }
    assert_eq!(world.enemies.len(), NUM_ROWS);
}

#[test]
fn tick_skips_enemy_above_top_row() {
    // The advance rule only applies to enemies with y >= 0
    let mut world = World::new();
    world.enemies[0].y = -5;
    tick(&mut world);
    assert_eq!(world.enemies[0].y, -5);
    assert_eq!(world.enemies[1].y, 1);
}

// ── tick: grid rebuild ───────────────────────────────────────────────────────

#[test]
fn tick_stamps_enemies_and_player() {
    let mut world = World::new();
    world.player.x = 4;
    tick(&mut world);
    assert_eq!(world.grid.at(1, 0), SYM_ENEMY); // first enemy, one row down
    assert_eq!(world.grid.at(1, 3), SYM_ENEMY);
    assert_eq!(world.grid.at(NUM_ROWS - 1, 4), SYM_PLAYER);
}

#[test]
fn tick_clears_bullet_marker() {
    let mut world = World::new();
    let dispatcher = Dispatcher::new();
    dispatcher.dispatch('3', &mut world);
    assert_eq!(world.grid.at(1, 0), SYM_BULLET);
    tick(&mut world);
    // Rebuild starts from a blank buffer; the marker is gone, the enemy
    // that advanced onto row 1 now owns the cell
    assert_eq!(world.grid.at(1, 0), SYM_ENEMY);
}

#[test]
fn rebuild_is_last_writer_wins() {
    // An enemy sitting on the player's cell is overwritten by the player,
    // which is stamped after all enemies
    let mut world = World::new();
    world.enemies[0].x = 0;
    world.enemies[0].y = NUM_ROWS as i32 - 1;
    rebuild_grid(&mut world);
    assert_eq!(world.grid.at(NUM_ROWS - 1, 0), SYM_PLAYER);
}

#[test]
fn rebuild_skips_positions_outside_grid() {
    let mut world = World::new();
    world.enemies[0].y = NUM_ROWS as i32; // one past the bottom
    rebuild_grid(&mut world); // must not panic
    assert_eq!(world.grid.at(0, 0), BLANK); // its old cell is not redrawn
    // The in-bounds enemies are still stamped on their own rows
    assert_eq!(world.grid.at(0, 3), SYM_ENEMY);
}

// ── tick: terminal condition ─────────────────────────────────────────────────

#[test]
fn enemies_reach_base_on_tick_twenty_five() {
    let mut world = World::new();
    for t in 1..=NUM_ROWS as i32 {
        assert_eq!(tick(&mut world), None, "no game over on tick {t}");
    }
    assert_eq!(tick(&mut world), Some(Outcome::EnemyReachedBase));
    for enemy in &world.enemies {
        assert_eq!(enemy.y, NUM_ROWS as i32 + 1);
    }
}

#[test]
fn first_enemy_in_sequence_triggers_game_over() {
    // Only the head of the column is about to reach the base; the check
    // fires for it without waiting for the rest
    let mut world = World::new();
    world.enemies[0].y = NUM_ROWS as i32;
    assert_eq!(tick(&mut world), Some(Outcome::EnemyReachedBase));
    assert_eq!(world.enemies[1].y, 1); // others advanced normally this tick
}

#[test]
fn enemy_reached_base_notice_text() {
    assert_eq!(
        Outcome::EnemyReachedBase.notice(),
        "Game Over - Enemy Reached Your Base"
    );
}

// ── Scheduler ────────────────────────────────────────────────────────────────

#[test]
fn scheduler_runs_until_enemies_reach_base() {
    let mut world = World::new();
    let (_tx, rx) = mpsc::channel::<char>();
    let cancel = CancelToken::new();
    let mut presented = 0;
    let mut scheduler = Scheduler::new(Duration::from_millis(1600), FakeClock);

    let outcome = scheduler.run(&mut world, &rx, &cancel, |_grid| presented += 1);

    assert_eq!(outcome, Some(Outcome::EnemyReachedBase));
    // Ticks 1..=24 render; the terminal tick does not
    assert_eq!(presented, NUM_ROWS);
}

#[test]
fn scheduler_quit_command_stops_before_any_tick() {
    let mut world = World::new();
    let (tx, rx) = mpsc::channel::<char>();
    tx.send('4').unwrap();
    let cancel = CancelToken::new();
    let mut presented = 0;
    let mut scheduler = Scheduler::new(Duration::from_millis(1600), FakeClock);

    let outcome = scheduler.run(&mut world, &rx, &cancel, |_grid| presented += 1);

    assert_eq!(outcome, Some(Outcome::PlayerQuit));
    assert_eq!(presented, 0); // no further ticks occur after quit
    assert_eq!(world.enemies[0].y, 0);
}

#[test]
fn scheduler_applies_commands_between_ticks() {
    let mut world = World::new();
    let (tx, rx) = mpsc::channel::<char>();
    tx.send('2').unwrap();
    tx.send('2').unwrap();
    drop(tx);
    let cancel = CancelToken::new();
    let mut scheduler = Scheduler::new(Duration::from_millis(1600), FakeClock);

    let outcome = scheduler.run(&mut world, &rx, &cancel, |_grid| {});

    assert_eq!(outcome, Some(Outcome::EnemyReachedBase));
    assert_eq!(world.player.x, 4); // both commands were dispatched
}

#[test]
fn scheduler_honors_cancellation() {
    let mut world = World::new();
    let (_tx, rx) = mpsc::channel::<char>();
    let cancel = CancelToken::new();
    cancel.cancel();
    let mut presented = 0;
    let mut scheduler = Scheduler::new(Duration::from_millis(1600), FakeClock);

    let outcome = scheduler.run(&mut world, &rx, &cancel, |_grid| presented += 1);

    assert_eq!(outcome, None);
    assert_eq!(presented, 0);
    assert_eq!(world.enemies[0].y, 0);
}
