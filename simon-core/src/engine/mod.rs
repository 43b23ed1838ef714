//! Game sequence engine
//!
//! The only component with real game logic: randomized sequence growth,
//! timing-bounded input validation and the win/loss decision.

pub mod report;
pub mod session;

pub use report::{Loss, SessionReport};
pub use session::SequenceEngine;
