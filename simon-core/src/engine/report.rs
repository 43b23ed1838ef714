//! Per-session summary kept for logging

use crate::state::{GameOutcome, LossCause};

/// Where and why a session was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Loss {
    /// Index into the sequence of the failed entry
    pub position: u8,
    pub cause: LossCause,
}

/// Result of the most recent session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionReport {
    pub outcome: GameOutcome,
    /// Round counter when the session ended
    pub rounds_reached: u8,
    /// Set only for lost sessions
    pub loss: Option<Loss>,
}

impl SessionReport {
    pub(crate) fn won(rounds_reached: u8) -> Self {
        Self {
            outcome: GameOutcome::Won,
            rounds_reached,
            loss: None,
        }
    }

    pub(crate) fn lost(rounds_reached: u8, loss: Loss) -> Self {
        Self {
            outcome: GameOutcome::Lost,
            rounds_reached,
            loss: Some(loss),
        }
    }

    /// Rounds fully reproduced by the player
    pub fn rounds_cleared(&self) -> u8 {
        match self.outcome {
            GameOutcome::Won => self.rounds_reached,
            GameOutcome::Lost => self.rounds_reached.saturating_sub(1),
        }
    }
}
