//! Configuration types
//!
//! Board-agnostic game settings, validated before a session may start.

pub mod types;

pub use types::*;
