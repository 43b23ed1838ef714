//! Moves and the growing sequence built from them

pub mod buffer;
pub mod moves;

pub use buffer::{Sequence, SequenceFull, MAX_LEVELS};
pub use moves::{Move, MoveSource, NUM_MOVES};
