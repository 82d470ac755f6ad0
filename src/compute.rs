//! Pure game-logic functions.
//!
//! Every public function takes immutable references to the current state
//! (plus the input snapshot and, where needed, an RNG handle) and returns
//! brand-new values.  Side effects are limited to the injected RNG.

use log::{debug, info};
use rand::Rng;

use crate::entities::{
    Asteroid, Bullet, GameState, GameStatus, Player, Rect, BULLET_WIDTH,
};
use crate::input::InputSnapshot;

// ── Tuning ───────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

pub const PLAYER_SIZE: i32 = 30;
pub const PLAYER_SPEED: i32 = 5;
pub const BULLET_SPEED: i32 = 7;
pub const ASTEROID_SPEED: i32 = 7;

/// Ticks between asteroid spawns (one second at 60 FPS).
pub const SPAWN_INTERVAL: u32 = 60;
pub const ASTEROID_MIN_SIZE: i32 = 20;
/// Exclusive upper bound.
pub const ASTEROID_MAX_SIZE: i32 = 50;

pub const DODGE_SCORE: u32 = 1;
pub const HIT_SCORE: u32 = 5;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the starting state: player centred near the bottom, nothing else
/// on screen.  Used both for the first game and for every restart.
pub fn init_state() -> GameState {
    GameState {
        player: Player {
            x: SCREEN_WIDTH / 2 - PLAYER_SIZE / 2,
            y: SCREEN_HEIGHT - 40,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
        },
        bullets: Vec::new(),
        asteroids: Vec::new(),
        score: 0,
        spawn_timer: 0,
        status: GameStatus::Playing,
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Half-open AABB overlap.  Boxes that only touch along an edge do not collide.
pub fn is_colliding(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply the four directional guards independently.  Each axis step only
/// happens if the player stays fully on screen afterwards, so diagonal
/// movement is simply two guards passing in the same tick.
pub fn move_player(player: &Player, input: &InputSnapshot) -> Player {
    let max_x = SCREEN_WIDTH - player.width;
    let max_y = SCREEN_HEIGHT - player.height;
    let mut p = player.clone();

    if input.left && p.x - PLAYER_SPEED >= 0 {
        p.x -= PLAYER_SPEED;
    }
    if input.right && p.x + PLAYER_SPEED <= max_x {
        p.x += PLAYER_SPEED;
    }
    if input.up && p.y - PLAYER_SPEED >= 0 {
        p.y -= PLAYER_SPEED;
    }
    if input.down && p.y + PLAYER_SPEED <= max_y {
        p.y += PLAYER_SPEED;
    }
    p
}

/// Fire one bullet, centred on the player and starting at its top edge.
pub fn player_shoot(state: &GameState) -> GameState {
    let p = &state.player;
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet {
        x: p.x + p.width / 2 - BULLET_WIDTH / 2,
        y: p.y,
        active: true,
    });
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Per-step updates ─────────────────────────────────────────────────────────

/// Move live bullets up; a bullet above the top edge goes inactive.
pub fn advance_bullets(bullets: &[Bullet]) -> Vec<Bullet> {
    bullets
        .iter()
        .map(|b| {
            if !b.active {
                return b.clone();
            }
            let y = b.y - BULLET_SPEED;
            Bullet { y, active: y >= 0, ..b.clone() }
        })
        .collect()
}

/// Create one asteroid just above the screen, fully inside it horizontally.
pub fn spawn_asteroid(rng: &mut impl Rng) -> Asteroid {
    let size = rng.gen_range(ASTEROID_MIN_SIZE..ASTEROID_MAX_SIZE);
    let x = rng.gen_range(0..SCREEN_WIDTH - size);
    debug!("spawned asteroid size={} at x={}", size, x);
    Asteroid {
        x,
        y: -size,
        size,
        active: true,
    }
}

/// Move live asteroids down.  Returns the moved asteroids and how many of
/// them dropped past the bottom edge this tick (each one is a dodge).
pub fn advance_asteroids(asteroids: &[Asteroid]) -> (Vec<Asteroid>, u32) {
    let mut dodged = 0;
    let moved: Vec<Asteroid> = asteroids
        .iter()
        .map(|a| {
            if !a.active {
                return a.clone();
            }
            let y = a.y + ASTEROID_SPEED;
            let gone = y > SCREEN_HEIGHT;
            if gone {
                dodged += 1;
            }
            Asteroid { y, active: !gone, ..a.clone() }
        })
        .collect();
    (moved, dodged)
}

/// Test every live bullet against every live asteroid.  Both sides of a hit
/// go inactive.  A bullet stops at its first hit, so it can never destroy
/// two overlapping asteroids in the same tick.  Returns the number of hits.
pub fn resolve_bullet_hits(bullets: &mut [Bullet], asteroids: &mut [Asteroid]) -> u32 {
    let mut hits = 0;
    for bullet in bullets.iter_mut().filter(|b| b.active) {
        let bullet_rect = bullet.rect();
        if let Some(asteroid) = asteroids
            .iter_mut()
            .find(|a| a.active && is_colliding(&bullet_rect, &a.rect()))
        {
            bullet.active = false;
            asteroid.active = false;
            hits += 1;
        }
    }
    hits
}

/// True if any live asteroid overlaps the player.
pub fn player_hit(player: &Player, asteroids: &[Asteroid]) -> bool {
    let player_rect = player.rect();
    asteroids
        .iter()
        .any(|a| a.active && is_colliding(&player_rect, &a.rect()))
}

/// Drop every inactive bullet and asteroid, keeping survivors in order.
pub fn clean_up(state: &GameState) -> GameState {
    GameState {
        bullets: state.bullets.iter().filter(|b| b.active).cloned().collect(),
        asteroids: state.asteroids.iter().filter(|a| a.active).cloned().collect(),
        ..state.clone()
    }
}

// ── Per-frame tick (RNG is injected) ─────────────────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, input: &InputSnapshot, rng: &mut impl Rng) -> GameState {
    // ── 1. Game over: frozen until restart ───────────────────────────────────
    if state.status == GameStatus::GameOver {
        if input.restart {
            info!("restarting after game over (final score {})", state.score);
            return init_state();
        }
        return state.clone();
    }

    // ── 2. Movement ──────────────────────────────────────────────────────────
    let mut next = GameState {
        player: move_player(&state.player, input),
        ..state.clone()
    };

    // ── 3. Firing ────────────────────────────────────────────────────────────
    if input.fire {
        next = player_shoot(&next);
    }

    // ── 4. Bullets ───────────────────────────────────────────────────────────
    next.bullets = advance_bullets(&next.bullets);

    // ── 5. Asteroid spawn ────────────────────────────────────────────────────
    next.spawn_timer += 1;
    if next.spawn_timer >= SPAWN_INTERVAL {
        next.spawn_timer = 0;
        next.asteroids.push(spawn_asteroid(rng));
    }

    // ── 6. Asteroids ─────────────────────────────────────────────────────────
    let (asteroids, dodged) = advance_asteroids(&next.asteroids);
    next.asteroids = asteroids;
    next.score += dodged * DODGE_SCORE;

    // ── 7. Collision: bullets ↔ asteroids ────────────────────────────────────
    let hits = resolve_bullet_hits(&mut next.bullets, &mut next.asteroids);
    next.score += hits * HIT_SCORE;

    // ── 8. Collision: player ↔ asteroids ─────────────────────────────────────
    if player_hit(&next.player, &next.asteroids) {
        info!("player hit, game over with score {}", next.score);
        next.status = GameStatus::GameOver;
    }

    // ── 9. Cleanup ───────────────────────────────────────────────────────────
    clean_up(&next)
}
