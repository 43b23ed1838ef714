//! Events that trigger phase transitions

/// Events raised by the sequence engine as a session progresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A new session was started (from idle or after a previous result)
    SessionStarted,
    /// One move was appended to the sequence
    MoveAdded,
    /// The whole sequence was played back
    ReplayDone,
    /// The player reproduced the whole sequence
    SequenceMatched,
    /// Rounds remain; the pause before the next one has elapsed
    NextRound,
    /// The final round was cleared
    AllRoundsCleared,
    /// Timeout or wrong move during validation
    InputRejected,
}

impl Event {
    /// Check if this event ends the session
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::AllRoundsCleared | Event::InputRejected)
    }

    /// Check if this event is caused by the player
    pub fn is_player_event(&self) -> bool {
        matches!(self, Event::SequenceMatched | Event::InputRejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_events() {
        assert!(Event::AllRoundsCleared.is_terminal());
        assert!(Event::InputRejected.is_terminal());
        assert!(!Event::NextRound.is_terminal());
        assert!(!Event::MoveAdded.is_terminal());
    }

    #[test]
    fn test_player_events() {
        assert!(Event::SequenceMatched.is_player_event());
        assert!(Event::InputRejected.is_player_event());
        assert!(!Event::ReplayDone.is_player_event());
    }
}
