//! Session results

use crate::sequence::Move;

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameOutcome {
    /// Every round reproduced correctly
    Won,
    /// Timeout or wrong move
    Lost,
}

/// Why a session was lost
///
/// Both causes end the session the same way; the distinction exists for
/// logging and for the feedback shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LossCause {
    /// No button pressed within the entry time limit
    Timeout { expected: Move },
    /// A real button that did not match the sequence
    WrongMove { expected: Move, pressed: Move },
}

impl LossCause {
    /// The move the player should have pressed
    pub fn expected(&self) -> Move {
        match *self {
            LossCause::Timeout { expected } => expected,
            LossCause::WrongMove { expected, .. } => expected,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LossCause::Timeout { .. })
    }
}
