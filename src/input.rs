//! Turns raw key events into one input snapshot per tick.
//!
//! Terminals differ in what they report: keyboard-enhancement capable ones
//! (kitty, Ghostty, ...) send `Press` / `Repeat` / `Release`, classic ones only
//! send `Press` (OS key-repeat shows up as repeated presses).  The tracker
//! records the frame each key was last seen; a key stays "held" until it is
//! released or has been silent for longer than the hold window.

use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Restart,
}

/// What the game core sees for a single tick.
///
/// Directions are level-triggered (true while held).  `fire` and `restart`
/// are edge-triggered: true only on the tick the key goes down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub restart: bool,
}

#[derive(Debug)]
pub struct KeyTracker {
    /// Maps each held key → the frame it was last seen (press or repeat).
    last_seen: HashMap<Key, u64>,
    /// Keys that went down since the last snapshot.
    fresh: HashSet<Key>,
    hold_window: u64,
    frame: u64,
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        KeyTracker {
            last_seen: HashMap::new(),
            fresh: HashSet::new(),
            hold_window,
            frame: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Returns true if `key` was seen within the last `hold_window` frames.
    pub fn is_held(&self, key: Key) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    /// Record a press.  A press of a key that is already held counts as a
    /// repeat, which is how classic terminals report auto-repeat.
    pub fn press(&mut self, key: Key) {
        if !self.is_held(key) {
            self.fresh.insert(key);
        }
        self.last_seen.insert(key, self.frame);
    }

    /// Refresh the timestamp so the key stays held, without a new edge.
    pub fn repeat(&mut self, key: Key) {
        self.last_seen.insert(key, self.frame);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    /// Build the snapshot for the current frame, consume pending edges and
    /// move on to the next frame.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            fire: self.fresh.contains(&Key::Fire),
            restart: self.fresh.contains(&Key::Restart),
        };
        self.fresh.clear();
        self.frame += 1;
        snapshot
    }
}
