//! All game entity types: pure data, no logic.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in logical screen coordinates (origin top-left, y down).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: i32 = 4;
pub const BULLET_HEIGHT: i32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Cleared when the bullet leaves the top or hits something;
    /// inactive bullets are dropped at the end of the tick.
    pub active: bool,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: BULLET_WIDTH, h: BULLET_HEIGHT }
    }
}

// ── Player & asteroid ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.width, h: self.height }
    }
}

/// A falling square rock.
#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    pub x: i32,
    pub y: i32,
    /// Side length; asteroids are always square.
    pub size: i32,
    pub active: bool,
}

impl Asteroid {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.size, h: self.size }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub score: u32,
    /// Ticks since the last asteroid spawn.
    pub spawn_timer: u32,
    pub status: GameStatus,
}
