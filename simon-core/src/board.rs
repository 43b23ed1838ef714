//! Host composition
//!
//! The engine needs one value implementing every collaborator trait.
//! `GameBoard` builds it from an input device and an output device that
//! usually own disjoint peripherals.

use crate::sequence::Move;
use crate::state::{GameOutcome, LossCause};
use crate::traits::{Feedback, InputSource, Playback};

/// Input device + output device, acting as one host
pub struct GameBoard<I, O> {
    input: I,
    output: O,
}

impl<I, O> GameBoard<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Split back into the two devices
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}

impl<I: InputSource, O> InputSource for GameBoard<I, O> {
    fn wait_for_move(&mut self, timeout_ms: u32) -> Option<Move> {
        self.input.wait_for_move(timeout_ms)
    }
}

impl<I, O: Playback> Playback for GameBoard<I, O> {
    fn render(&mut self, mv: Move, duration_ms: u32) {
        self.output.render(mv, duration_ms);
    }

    fn rest(&mut self, duration_ms: u32) {
        self.output.rest(duration_ms);
    }
}

impl<I, O: Feedback> Feedback for GameBoard<I, O> {
    fn session_started(&mut self) {
        self.output.session_started();
    }

    fn round_started(&mut self, round: u8, levels: u8) {
        self.output.round_started(round, levels);
    }

    fn awaiting_input(&mut self) {
        self.output.awaiting_input();
    }

    fn reveal(&mut self, cause: LossCause) {
        self.output.reveal(cause);
    }

    fn announce(&mut self, outcome: GameOutcome) {
        self.output.announce(outcome);
    }
}
