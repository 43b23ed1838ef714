//! Move indicator LEDs

pub mod bank;

pub use bank::LedBank;
