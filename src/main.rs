mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::info;

use shape_shooter::assets::SpriteSet;
use shape_shooter::compute::{init_state, move_player_left, move_player_right, player_shoot, tick};
use shape_shooter::config::{self, TICK};
use shape_shooter::entities::{GameState, GameStatus};

enum LoopExit {
    Quit,
    Restart,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one game to completion on a fixed timestep.
///
/// Each frame drains the pending input events (discrete press events
/// only), applies the pure state transitions, advances the simulation by
/// one tick while the game is running, renders, and sleeps away the
/// remainder of `TICK`.  The fire cooldown needs no handling here: it is
/// a tick-count deadline checked inside `player_shoot`.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    sprites: &SpriteSet,
) -> std::io::Result<LoopExit> {
    let mut rng = thread_rng();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(LoopExit::Quit);
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(LoopExit::Quit);
                }
                KeyCode::Char('r') | KeyCode::Char('R')
                    if state.status == GameStatus::GameOver =>
                {
                    return Ok(LoopExit::Restart);
                }
                _ if state.status != GameStatus::Playing => {}
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                    *state = move_player_left(state);
                }
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                    *state = move_player_right(state);
                }
                KeyCode::Char(' ') => {
                    *state = player_shoot(state);
                }
                _ => {}
            }
        }

        if state.status == GameStatus::Playing {
            *state = tick(state, &mut rng);
        }

        display::render(out, state, sprites)?;

        let elapsed = frame_start.elapsed();
        if elapsed < TICK {
            thread::sleep(TICK - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging() -> Result<()> {
    // stderr is hidden behind the alternate screen, so diagnostics go to
    // a file.
    let file = File::create(config::LOG_FILE)
        .with_context(|| format!("create log file {}", config::LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    info!("starting");

    let sprites = SpriteSet::load(Path::new(config::ASSET_DIR));

    let (cols, rows) = terminal::size().context("query terminal size")?;
    ensure!(
        cols >= display::MIN_COLS && rows >= display::MIN_ROWS,
        "terminal too small: the playfield needs {}x{} cells, this terminal is {}x{}",
        display::MIN_COLS,
        display::MIN_ROWS,
        cols,
        rows
    );

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped, program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &sprites);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting");
    result.map_err(Into::into)
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    sprites: &SpriteSet,
) -> std::io::Result<()> {
    loop {
        let mut state = init_state();
        match game_loop(out, &mut state, rx, sprites)? {
            LoopExit::Quit => return Ok(()),
            LoopExit::Restart => continue,
        }
    }
}
