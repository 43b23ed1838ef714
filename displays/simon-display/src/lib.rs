//! Display abstraction and status screens for the Simon firmware
//!
//! This crate provides:
//! - `DisplayBackend` trait for different display types
//! - `Screen` character buffer with change tracking
//! - `StatusScreen` with the texts shown during a game
//! - `Hd44780` driver for 16x2 LCDs on a PCF8574 I2C backpack
//!
//! The display is purely informational. The game never waits on it, and
//! callers are free to ignore its errors.

#![no_std]

pub mod backend;
pub mod hd44780;
pub mod screen;
pub mod status;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, NullDisplay};
pub use hd44780::Hd44780;
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
pub use status::StatusScreen;
