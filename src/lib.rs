//! Space Dodger: a ship dodges and shoots falling asteroids.
//!
//! The library holds the pure game core plus the terminal rendering and
//! event plumbing; the binary owns the terminal and the frame loop.

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod viewport;
