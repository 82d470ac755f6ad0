//! Rendering layer.  All terminal I/O lives here.
//!
//! Each function receives a mutable writer, the viewport and an immutable
//! view of the game state.  No game logic is performed; this module only
//! translates logical rectangles into coloured terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use crate::compute::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{GameState, GameStatus, Rect};
use crate::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Rgb { r: 0, g: 0, b: 20 };
const C_PLAYER: Color = Color::Rgb { r: 0, g: 255, b: 0 };
const C_COCKPIT: Color = Color::Rgb { r: 255, g: 255, b: 0 };
const C_BULLET: Color = Color::Rgb { r: 255, g: 255, b: 0 };
const C_ASTEROID: Color = Color::Rgb { r: 150, g: 75, b: 0 };
const C_TEXT: Color = Color::White;

const COCKPIT_WIDTH: i32 = 4;
const COCKPIT_HEIGHT: i32 = 5;

const GAME_OVER_TEXT: &str = "GAME OVER - Press R to restart";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    draw_background(out, view)?;

    let p = &state.player;
    fill_rect(out, view, &p.rect(), C_PLAYER)?;
    let cockpit = Rect {
        x: p.x + p.width / 2 - COCKPIT_WIDTH / 2,
        y: p.y - COCKPIT_HEIGHT,
        w: COCKPIT_WIDTH,
        h: COCKPIT_HEIGHT,
    };
    fill_rect(out, view, &cockpit, C_COCKPIT)?;

    for bullet in state.bullets.iter().filter(|b| b.active) {
        fill_rect(out, view, &bullet.rect(), C_BULLET)?;
    }
    for asteroid in state.asteroids.iter().filter(|a| a.active) {
        fill_rect(out, view, &asteroid.rect(), C_ASTEROID)?;
    }

    draw_text(out, view, 10, 10, &format!("Score: {}", state.score))?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let blank = " ".repeat(view.cols as usize);
    for row in 0..view.rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&blank))?;
    }
    Ok(())
}

fn fill_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    color: Color,
) -> std::io::Result<()> {
    let Some(cells) = view.project(rect) else {
        return Ok(());
    };
    out.queue(style::SetBackgroundColor(color))?;
    let span = " ".repeat(cells.cols as usize);
    for row in cells.row..cells.row + cells.rows {
        out.queue(cursor::MoveTo(cells.col, row))?;
        out.queue(Print(&span))?;
    }
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    Ok(())
}

/// Print `text` starting at the cell holding logical point `(x, y)`.
fn draw_text<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: i32,
    y: i32,
    text: &str,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.project_point(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_TEXT))?;
        out.queue(Print(text))?;
    }
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let Some((cx, cy)) = view.project_point(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2) else {
        return Ok(());
    };
    let col = cx.saturating_sub(GAME_OVER_TEXT.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, cy))?;
    out.queue(style::SetForegroundColor(Color::Red))?;
    out.queue(Print(GAME_OVER_TEXT))?;
    Ok(())
}
