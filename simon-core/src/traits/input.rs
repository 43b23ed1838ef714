//! Player input trait

use crate::sequence::Move;

/// Source of player moves
///
/// Implementations must debounce and must wait for the button to be
/// released before returning, so one press is counted exactly once.
pub trait InputSource {
    /// Block until the player presses a move or `timeout_ms` elapses
    ///
    /// Returns `None` on timeout. The timeout bounds the wait for a press,
    /// not the wait for release.
    fn wait_for_move(&mut self, timeout_ms: u32) -> Option<Move>;
}
