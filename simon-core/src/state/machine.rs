//! Session phase machine
//!
//! Every engine step is a function of the current phase and an event.

use super::events::Event;
use super::outcome::GameOutcome;

/// Engine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No session has run yet
    Idle,
    /// Drawing the next move
    Growing,
    /// Playing the sequence back to the player
    Replaying,
    /// Waiting for the player to reproduce the sequence
    Validating,
    /// Round cleared, pausing before the next one
    RoundGap,
    /// Session over
    Finished(GameOutcome),
}

impl Phase {
    /// Check if the engine is waiting on the player
    pub fn accepts_input(&self) -> bool {
        matches!(self, Phase::Validating)
    }

    /// Check if a session is in progress
    pub fn is_active(&self) -> bool {
        !matches!(self, Phase::Idle | Phase::Finished(_))
    }

    /// Outcome, once the session has finished
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            Phase::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Idle, SessionStarted) => Growing,
            (Finished(_), SessionStarted) => Growing,

            (Growing, MoveAdded) => Replaying,

            (Replaying, ReplayDone) => Validating,

            (Validating, SequenceMatched) => RoundGap,
            (Validating, InputRejected) => Finished(GameOutcome::Lost),

            (RoundGap, NextRound) => Growing,
            (RoundGap, AllRoundsCleared) => Finished(GameOutcome::Won),

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cycle() {
        let phase = Phase::Idle.transition(Event::SessionStarted);
        assert_eq!(phase, Phase::Growing);

        let phase = phase.transition(Event::MoveAdded);
        assert_eq!(phase, Phase::Replaying);

        let phase = phase.transition(Event::ReplayDone);
        assert_eq!(phase, Phase::Validating);
        assert!(phase.accepts_input());

        let phase = phase.transition(Event::SequenceMatched);
        assert_eq!(phase, Phase::RoundGap);

        let phase = phase.transition(Event::NextRound);
        assert_eq!(phase, Phase::Growing);
    }

    #[test]
    fn test_rejection_loses() {
        let phase = Phase::Validating.transition(Event::InputRejected);
        assert_eq!(phase, Phase::Finished(GameOutcome::Lost));
        assert_eq!(phase.outcome(), Some(GameOutcome::Lost));
        assert!(!phase.is_active());
    }

    #[test]
    fn test_final_round_wins() {
        let phase = Phase::RoundGap.transition(Event::AllRoundsCleared);
        assert_eq!(phase, Phase::Finished(GameOutcome::Won));
    }

    #[test]
    fn test_restart_after_finish() {
        for outcome in [GameOutcome::Won, GameOutcome::Lost] {
            let next = Phase::Finished(outcome).transition(Event::SessionStarted);
            assert_eq!(next, Phase::Growing);
        }
    }

    #[test]
    fn test_unexpected_events_ignored() {
        // Input can only be rejected while validating
        assert_eq!(
            Phase::Replaying.transition(Event::InputRejected),
            Phase::Replaying
        );
        // Sessions do not restart mid-round
        assert_eq!(
            Phase::Validating.transition(Event::SessionStarted),
            Phase::Validating
        );
        assert_eq!(Phase::Idle.transition(Event::MoveAdded), Phase::Idle);
    }

    #[test]
    fn test_active_phases() {
        assert!(!Phase::Idle.is_active());
        assert!(Phase::Growing.is_active());
        assert!(Phase::RoundGap.is_active());
        assert_eq!(Phase::Replaying.outcome(), None);
    }
}
