//! Sequence engine
//!
//! Runs one blocking session: grow the sequence by one random move, replay
//! it, validate the player's reproduction, repeat until every level is
//! cleared or the player fails.

use crate::config::{ConfigError, GameConfig};
use crate::sequence::{MoveSource, Sequence};
use crate::state::{Event, GameOutcome, LossCause, Phase};
use crate::traits::{Feedback, InputSource, Playback};

use super::report::{Loss, SessionReport};

/// Game sequence engine
///
/// Owns the sequence and round counter of the current session. Both are
/// reset at the start of every [`play_session`](Self::play_session), so an
/// engine can be reused without leaking state between games.
pub struct SequenceEngine<M> {
    config: GameConfig,
    moves: M,
    sequence: Sequence,
    round: u8,
    phase: Phase,
    report: Option<SessionReport>,
}

impl<M: MoveSource> SequenceEngine<M> {
    /// Create an engine for a validated configuration
    pub fn new(config: GameConfig, moves: M) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            moves,
            sequence: Sequence::new(),
            round: 0,
            phase: Phase::Idle,
            report: None,
        })
    }

    /// Play one complete session and return its outcome
    ///
    /// Blocks for the whole game. The outcome is announced through
    /// [`Feedback::announce`] before returning.
    pub fn play_session<H>(&mut self, host: &mut H) -> GameOutcome
    where
        H: InputSource + Playback + Feedback,
    {
        self.sequence.clear();
        self.round = 0;
        self.report = None;
        self.advance(Event::SessionStarted);

        host.session_started();

        let levels = self.config.levels_to_complete;

        let report = loop {
            self.grow();

            host.round_started(self.round, levels);
            self.replay(host);

            if let Err(loss) = self.validate(host) {
                self.advance(Event::InputRejected);
                host.reveal(loss.cause);
                break SessionReport::lost(self.round, loss);
            }
            self.advance(Event::SequenceMatched);

            if self.round >= levels {
                self.advance(Event::AllRoundsCleared);
                break SessionReport::won(self.round);
            }

            host.rest(self.config.round_gap_ms);
            self.advance(Event::NextRound);
        };

        self.report = Some(report);
        host.announce(report.outcome);

        report.outcome
    }

    /// Append one random move and bump the round counter
    fn grow(&mut self) {
        let next = self.moves.next_move();

        // levels_to_complete <= MAX_LEVELS is enforced by GameConfig::validate,
        // and grow only runs while round < levels_to_complete
        if self.sequence.push(next).is_ok() {
            self.round += 1;
        }
        self.advance(Event::MoveAdded);
    }

    /// Play the whole sequence back, in order
    fn replay<H: Playback>(&mut self, host: &mut H) {
        let move_time = self.config.move_time_for_round(self.round);

        for &mv in self.sequence.iter() {
            host.render(mv, move_time);
            host.rest(self.config.move_gap_ms);
        }

        self.advance(Event::ReplayDone);
    }

    /// Read one move per sequence entry; stop at the first mismatch
    fn validate<H>(&self, host: &mut H) -> Result<(), Loss>
    where
        H: InputSource + Playback + Feedback,
    {
        host.awaiting_input();

        let move_time = self.config.move_time_for_round(self.round);
        let timeout = self.config.entry_time_limit_ms;

        for (position, &expected) in self.sequence.iter().enumerate() {
            let position = position as u8;

            let pressed = host.wait_for_move(timeout).ok_or(Loss {
                position,
                cause: LossCause::Timeout { expected },
            })?;

            if pressed != expected {
                return Err(Loss {
                    position,
                    cause: LossCause::WrongMove { expected, pressed },
                });
            }

            // Echo the accepted move
            host.render(pressed, move_time);
        }

        Ok(())
    }

    fn advance(&mut self, event: Event) {
        self.phase = self.phase.transition(event);
    }

    /// Current round counter (equals the sequence length)
    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the move source, e.g. to reseed between sessions
    pub fn moves_mut(&mut self) -> &mut M {
        &mut self.moves
    }

    /// Summary of the last finished session
    pub fn last_report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }
}
