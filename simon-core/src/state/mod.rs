//! Session state machine
//!
//! Defines the phases a session moves through and how it ends.
//! The phase machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;
pub mod outcome;

pub use events::Event;
pub use machine::Phase;
pub use outcome::{GameOutcome, LossCause};
