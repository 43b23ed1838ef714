//! Collaborator traits
//!
//! These traits define the interface between the sequence engine
//! and the hardware (or test) host it runs on.

pub mod input;
pub mod output;

pub use input::InputSource;
pub use output::{Feedback, Playback};
