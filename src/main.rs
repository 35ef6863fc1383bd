use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};

use space_invaders::compute::{CancelToken, Scheduler, WallClock, TICK_PERIOD};
use space_invaders::display;
use space_invaders::entities::World;

/// Command the shell substitutes for Ctrl-C / Esc, which raw mode would
/// otherwise swallow.
const QUIT_COMMAND: char = '4';

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending one
    // character per keystroke through a channel so the simulation thread
    // never blocks on I/O.
    let (tx, rx) = mpsc::channel::<char>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            })) => {
                let command = match code {
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(QUIT_COMMAND)
                    }
                    KeyCode::Esc => Some(QUIT_COMMAND),
                    KeyCode::Char(c) => Some(c),
                    _ => None,
                };
                if let Some(command) = command {
                    if tx.send(command).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });

    let mut world = World::new();
    let cancel = CancelToken::new();
    let mut scheduler = Scheduler::new(TICK_PERIOD, WallClock::default());
    let outcome = scheduler.run(&mut world, &rx, &cancel, |grid| {
        let _ = display::render(&mut out, grid);
    });

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    out.flush()?;

    if let Some(outcome) = outcome {
        println!("{}", outcome.notice());
    }
    Ok(())
}
