//! Board-agnostic core logic for the Simon memory game firmware
//!
//! This crate contains all game logic that does not depend on specific
//! hardware implementations:
//!
//! - Moves and the growing sequence
//! - Sequence engine (grow, replay, validate)
//! - Session phase machine and outcomes
//! - Collaborator traits (input, playback, feedback)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod config;
pub mod engine;
pub mod sequence;
pub mod state;
pub mod traits;

pub use board::GameBoard;
pub use engine::{SequenceEngine, SessionReport};
pub use sequence::{Move, MoveSource, NUM_MOVES};
pub use state::{GameOutcome, LossCause};
