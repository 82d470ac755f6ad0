use space_dodger::input::*;

// ── Edge-triggered keys ───────────────────────────────────────────────────────

#[test]
fn fire_press_is_seen_once() {
    let mut keys = KeyTracker::new(4);
    keys.press(Key::Fire);
    assert!(keys.snapshot().fire);
    // Still held, but the edge has been consumed.
    assert!(keys.is_held(Key::Fire));
    assert!(!keys.snapshot().fire);
}

#[test]
fn repeats_do_not_refire() {
    let mut keys = KeyTracker::new(4);
    keys.press(Key::Fire);
    let mut fired = 0;
    for _ in 0..20 {
        if keys.snapshot().fire {
            fired += 1;
        }
        keys.repeat(Key::Fire);
    }
    assert_eq!(fired, 1);
}

#[test]
fn classic_terminal_auto_repeat_fires_once() {
    // Without keyboard enhancement, auto-repeat arrives as more presses.
    let mut keys = KeyTracker::new(4);
    let fired = (0..20)
        .filter(|_| {
            keys.press(Key::Fire);
            keys.snapshot().fire
        })
        .count();
    assert_eq!(fired, 1);
}

#[test]
fn release_then_press_fires_again() {
    let mut keys = KeyTracker::new(4);
    keys.press(Key::Fire);
    assert!(keys.snapshot().fire);
    keys.release(Key::Fire);
    keys.press(Key::Fire);
    assert!(keys.snapshot().fire);
}

#[test]
fn tap_within_one_frame_still_fires() {
    let mut keys = KeyTracker::new(4);
    keys.press(Key::Restart);
    keys.release(Key::Restart);
    let snap = keys.snapshot();
    assert!(snap.restart);
    assert!(!snap.fire);
}

#[test]
fn expired_key_fires_again_on_next_press() {
    let mut keys = KeyTracker::new(2);
    keys.press(Key::Fire);
    assert!(keys.snapshot().fire);
    for _ in 0..5 {
        keys.snapshot();
    }
    assert!(!keys.is_held(Key::Fire));
    keys.press(Key::Fire);
    assert!(keys.snapshot().fire);
}

// ── Level-triggered keys ──────────────────────────────────────────────────────

#[test]
fn direction_held_within_window() {
    let mut keys = KeyTracker::new(4);
    keys.press(Key::Left);
    // Frames 0..=4 are within the window, frame 5 is not.
    for frame in 0..5 {
        assert!(keys.snapshot().left, "frame {}", frame);
    }
    assert!(!keys.snapshot().left);
}

#[test]
fn repeat_keeps_direction_held() {
    let mut keys = KeyTracker::new(4);
    keys.press(Key::Up);
    for _ in 0..30 {
        keys.repeat(Key::Up);
        assert!(keys.snapshot().up);
    }
}

#[test]
fn release_drops_direction_immediately() {
    let mut keys = KeyTracker::new(4);
    keys.press(Key::Right);
    assert!(keys.snapshot().right);
    keys.release(Key::Right);
    assert!(!keys.snapshot().right);
}

#[test]
fn several_keys_at_once() {
    let mut keys = KeyTracker::new(4);
    keys.press(Key::Left);
    keys.press(Key::Down);
    keys.press(Key::Fire);
    let snap = keys.snapshot();
    assert_eq!(
        snap,
        InputSnapshot { left: true, down: true, fire: true, ..InputSnapshot::default() }
    );
}

#[test]
fn snapshot_advances_frame() {
    let mut keys = KeyTracker::new(4);
    assert_eq!(keys.frame(), 0);
    keys.snapshot();
    keys.snapshot();
    assert_eq!(keys.frame(), 2);
}
