//! Button input
//!
//! Polled, debounced push buttons mapped onto game moves.

pub mod debounce;
pub mod pad;

pub use debounce::Debouncer;
pub use pad::{ButtonConfig, ButtonPad};
