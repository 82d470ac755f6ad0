use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_dodger::compute::{init_state, tick};
use space_dodger::config::GameConfig;
use space_dodger::display;
use space_dodger::error::GameError;
use space_dodger::events::{drain_events, Control};
use space_dodger::input::KeyTracker;
use space_dodger::logging;
use space_dodger::viewport::Viewport;

const WINDOW_TITLE: &str = "Space Dodger";

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits or the terminal fails.
///
/// Each frame: drain every pending key event into the tracker, take one
/// snapshot, advance the simulation once, then render the result.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<std::io::Result<Event>>,
    config: &GameConfig,
) -> Result<(), GameError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_time = Duration::from_millis(config.frame_ms);
    let mut keys = KeyTracker::new(config.hold_window);
    let mut state = init_state();

    loop {
        let frame_start = Instant::now();

        if drain_events(rx, &mut keys)? == Control::Quit {
            info!("quit requested at frame {}", keys.frame());
            return Ok(());
        }

        let input = keys.snapshot();
        state = tick(&state, &input, &mut rng);

        // The logical field is fixed; only the projection follows the terminal.
        let (cols, rows) = terminal::size()?;
        display::render(out, &Viewport::new(cols, rows), &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Terminal setup / restore ──────────────────────────────────────────────────

/// Returns whether keyboard enhancement was enabled.
fn setup_terminal<W: Write>(out: &mut W) -> std::io::Result<bool> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(WINDOW_TITLE))?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    Ok(out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok())
}

/// Best effort: each step is attempted even if an earlier one failed or
/// setup never got that far.
fn restore_terminal<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let config = GameConfig::load()?;
    logging::init(config.log_file.as_deref())?;
    info!("starting with {:?}", config);

    let mut out = BufWriter::new(stdout());
    let mut keyboard_enhanced = false;

    let result = match setup_terminal(&mut out) {
        Ok(enhanced) => {
            keyboard_enhanced = enhanced;
            info!("keyboard enhancement: {}", enhanced);

            // Dedicate a thread exclusively to blocking event reads, sending
            // them through a channel so the game loop never blocks on I/O.
            // A read error is forwarded and ends the reader.
            let (tx, rx) = mpsc::channel::<std::io::Result<Event>>();
            thread::spawn(move || loop {
                let ev = event::read();
                let failed = ev.is_err();
                if tx.send(ev).is_err() || failed {
                    break;
                }
            });

            game_loop(&mut out, &rx, &config)
        }
        Err(e) => Err(GameError::Io(e)),
    };

    // Always restore the terminal, then report: stderr is only readable
    // once the alternate screen is gone.
    restore_terminal(&mut out, keyboard_enhanced);
    if let Err(e) = &result {
        log::error!("game loop failed: {}", e);
    }
    result
}
