//! Terminal key events → `KeyTracker`.
//!
//! A reader thread blocks on `crossterm::event::read` and forwards every
//! result, errors included, over a channel.  The frame loop drains it once
//! per frame without blocking.

use std::sync::mpsc::{Receiver, TryRecvError};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::GameError;
use crate::input::{Key, KeyTracker};

/// What the frame loop should do after draining input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Game keys.  Anything else is ignored.
pub fn map_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Restart),
        _ => None,
    }
}

/// Raw mode delivers Ctrl-C as a key, so it is handled here with Q / Esc.
pub fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Feed every pending event into `keys`.
///
/// A read error from the terminal is returned as `GameError::Io`.  A closed
/// channel means the reader thread is gone and no more input can arrive,
/// which is also fatal.
pub fn drain_events(
    rx: &Receiver<std::io::Result<Event>>,
    keys: &mut KeyTracker,
) -> Result<Control, GameError> {
    loop {
        let ev = match rx.try_recv() {
            Ok(item) => item?,
            Err(TryRecvError::Empty) => return Ok(Control::Continue),
            Err(TryRecvError::Disconnected) => return Err(GameError::InputClosed),
        };
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
            continue;
        };
        if kind == KeyEventKind::Press && is_quit(&code, modifiers) {
            return Ok(Control::Quit);
        }
        let Some(key) = map_key(&code) else {
            continue;
        };
        match kind {
            KeyEventKind::Press => keys.press(key),
            KeyEventKind::Repeat => keys.repeat(key),
            KeyEventKind::Release => keys.release(key),
        }
    }
}
