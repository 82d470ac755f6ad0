use std::io;
use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use space_dodger::error::GameError;
use space_dodger::events::*;
use space_dodger::input::{Key, KeyTracker};

fn press(code: KeyCode) -> io::Result<Event> {
    Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn with_kind(code: KeyCode, kind: KeyEventKind) -> io::Result<Event> {
    Ok(Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)))
}

// ── Failure paths ─────────────────────────────────────────────────────────────

#[test]
fn closed_channel_is_an_error() {
    let (tx, rx) = mpsc::channel::<io::Result<Event>>();
    drop(tx);
    let mut keys = KeyTracker::new(4);
    let result = drain_events(&rx, &mut keys);
    assert!(matches!(result, Err(GameError::InputClosed)));
}

#[test]
fn closed_channel_still_errors_after_pending_events() {
    let (tx, rx) = mpsc::channel();
    tx.send(press(KeyCode::Left)).unwrap();
    drop(tx);
    let mut keys = KeyTracker::new(4);
    assert!(matches!(drain_events(&rx, &mut keys), Err(GameError::InputClosed)));
}

#[test]
fn read_error_is_returned() {
    let (tx, rx) = mpsc::channel();
    tx.send(Err(io::Error::new(io::ErrorKind::Other, "tty gone"))).unwrap();
    let mut keys = KeyTracker::new(4);
    assert!(matches!(drain_events(&rx, &mut keys), Err(GameError::Io(_))));
}

#[test]
fn closed_channel_stops_a_frame_loop() {
    let (tx, rx) = mpsc::channel::<io::Result<Event>>();
    drop(tx);
    let mut keys = KeyTracker::new(4);
    let mut frames = 0;
    while drain_events(&rx, &mut keys).is_ok() {
        keys.snapshot();
        frames += 1;
        assert!(frames < 1000, "loop never saw the closed channel");
    }
    assert_eq!(frames, 0);
}

// ── Normal input ──────────────────────────────────────────────────────────────

#[test]
fn empty_channel_continues() {
    let (_tx, rx) = mpsc::channel::<io::Result<Event>>();
    let mut keys = KeyTracker::new(4);
    assert_eq!(drain_events(&rx, &mut keys).unwrap(), Control::Continue);
    assert_eq!(keys.snapshot(), Default::default());
}

#[test]
fn keys_reach_the_tracker() {
    let (_tx, rx) = {
        let (tx, rx) = mpsc::channel();
        tx.send(press(KeyCode::Char(' '))).unwrap();
        tx.send(press(KeyCode::Up)).unwrap();
        tx.send(press(KeyCode::Char('x'))).unwrap();
        tx.send(Ok(Event::Resize(80, 24))).unwrap();
        (tx, rx)
    };
    let mut keys = KeyTracker::new(4);
    assert_eq!(drain_events(&rx, &mut keys).unwrap(), Control::Continue);
    let snap = keys.snapshot();
    assert!(snap.fire);
    assert!(snap.up);
    assert!(!snap.left);
}

#[test]
fn release_event_drops_key() {
    let (_tx, rx) = {
        let (tx, rx) = mpsc::channel();
        tx.send(press(KeyCode::Right)).unwrap();
        tx.send(with_kind(KeyCode::Right, KeyEventKind::Release)).unwrap();
        (tx, rx)
    };
    let mut keys = KeyTracker::new(4);
    drain_events(&rx, &mut keys).unwrap();
    assert!(!keys.is_held(Key::Right));
}

#[test]
fn quit_keys() {
    let (_tx, rx) = {
        let (tx, rx) = mpsc::channel();
        tx.send(press(KeyCode::Char('q'))).unwrap();
        (tx, rx)
    };
    let mut keys = KeyTracker::new(4);
    assert_eq!(drain_events(&rx, &mut keys).unwrap(), Control::Quit);

    assert!(is_quit(&KeyCode::Esc, KeyModifiers::NONE));
    assert!(is_quit(&KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!is_quit(&KeyCode::Char('c'), KeyModifiers::NONE));
}

#[test]
fn key_mapping() {
    assert_eq!(map_key(&KeyCode::Left), Some(Key::Left));
    assert_eq!(map_key(&KeyCode::Char(' ')), Some(Key::Fire));
    assert_eq!(map_key(&KeyCode::Char('R')), Some(Key::Restart));
    assert_eq!(map_key(&KeyCode::Char('a')), None);
}
