//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in simon-core on top of `embedded-hal`:
//!
//! - Debounced button pad (`InputSource`)
//! - LED bank and buzzer tone output
//! - Game console combining lights, sound and status display
//!   (`Playback` + `Feedback`)

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod buzzer;
pub mod console;
pub mod lights;

pub use buttons::{ButtonConfig, ButtonPad};
pub use buzzer::{Note, ToneOutput};
pub use console::{Console, ConsoleConfig};
pub use lights::LedBank;
