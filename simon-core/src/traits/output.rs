//! Light, sound and status output traits

use crate::sequence::Move;
use crate::state::{GameOutcome, LossCause};

/// Light + sound rendering of moves
///
/// Both calls block for their full duration.
pub trait Playback {
    /// Light the move's LED and sound its tone for `duration_ms`, then
    /// switch both off
    fn render(&mut self, mv: Move, duration_ms: u32);

    /// All indicators off and silent for `duration_ms`
    fn rest(&mut self, duration_ms: u32);
}

/// Session status presentation
///
/// Fire-and-forget from the engine's point of view. Only `announce` is
/// required; the other hooks default to doing nothing.
pub trait Feedback {
    /// A session is about to start round 1
    fn session_started(&mut self) {}

    /// Round `round` of `levels` begins (before its replay)
    fn round_started(&mut self, _round: u8, _levels: u8) {}

    /// Replay finished, the player's turn begins
    fn awaiting_input(&mut self) {}

    /// The session was just lost; show what should have been pressed
    fn reveal(&mut self, _cause: LossCause) {}

    /// Present the final result
    fn announce(&mut self, outcome: GameOutcome);
}
