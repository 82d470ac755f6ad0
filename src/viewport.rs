//! Mapping from the fixed logical play field onto terminal cells.
//!
//! The game always runs at 640×480 logical units no matter how large the
//! host terminal is; only the projection changes.

use crate::compute::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::Rect;

/// The logical resolution, independent of the host's size.
pub fn layout(_outside_cols: u16, _outside_rows: u16) -> (i32, i32) {
    (SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// A block of terminal cells: top-left corner plus size, all in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    /// Project a logical rectangle onto cells.  The leading edge is floored
    /// and the trailing edge ceiled, so anything on screen covers at least
    /// one cell.  Returns `None` when nothing of it is visible.
    pub fn project(&self, rect: &Rect) -> Option<CellRect> {
        let (logical_w, logical_h) = layout(self.cols, self.rows);

        let left = scale_floor(rect.x, self.cols, logical_w).max(0);
        let right = scale_ceil(rect.x + rect.w, self.cols, logical_w).min(self.cols as i64);
        let top = scale_floor(rect.y, self.rows, logical_h).max(0);
        let bottom = scale_ceil(rect.y + rect.h, self.rows, logical_h).min(self.rows as i64);

        if right <= left || bottom <= top {
            return None;
        }
        Some(CellRect {
            col: left as u16,
            row: top as u16,
            cols: (right - left) as u16,
            rows: (bottom - top) as u16,
        })
    }

    /// Cell holding a logical point, or `None` if it is off screen.
    pub fn project_point(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let (logical_w, logical_h) = layout(self.cols, self.rows);
        let col = scale_floor(x, self.cols, logical_w);
        let row = scale_floor(y, self.rows, logical_h);
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

fn scale_floor(v: i32, cells: u16, logical: i32) -> i64 {
    (v as i64 * cells as i64).div_euclid(logical as i64)
}

fn scale_ceil(v: i32, cells: u16, logical: i32) -> i64 {
    -(-(v as i64 * cells as i64)).div_euclid(logical as i64)
}
