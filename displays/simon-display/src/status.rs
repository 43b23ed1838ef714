//! Game status texts
//!
//! Maps game progress onto the two screen lines and pushes changes to the
//! backend.

use core::fmt::Write;

use heapless::String;
use simon_core::GameOutcome;

use crate::backend::{DisplayBackend, DisplayError};
use crate::screen::{Screen, LINE_LEN};

/// Status display for a game console
pub struct StatusScreen<B> {
    backend: B,
    screen: Screen,
}

impl<B: DisplayBackend> StatusScreen<B> {
    /// Wrap an initialized backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            screen: Screen::new(),
        }
    }

    /// Attract screen shown between sessions
    pub fn show_idle(&mut self) -> Result<(), DisplayError> {
        self.show("SIMON", "Press any key")
    }

    /// Round header while the sequence is replayed
    pub fn show_round(&mut self, round: u8, levels: u8) -> Result<(), DisplayError> {
        let mut header: String<LINE_LEN> = String::new();
        let _ = write!(header, "Round {}/{}", round, levels);
        self.show(&header, "Watch...")
    }

    /// Prompt while the player repeats the sequence
    pub fn show_your_turn(&mut self) -> Result<(), DisplayError> {
        self.screen.set_line(1, "Your turn");
        self.screen.render_to(&mut self.backend)
    }

    /// Final screen of a session
    ///
    /// `round` is the last round reached, equal to the level count on a win.
    pub fn show_result(&mut self, outcome: GameOutcome, round: u8) -> Result<(), DisplayError> {
        let mut detail: String<LINE_LEN> = String::new();
        match outcome {
            GameOutcome::Won => {
                let _ = write!(detail, "{} rounds", round);
                self.show("You win!", &detail)
            }
            GameOutcome::Lost => {
                let _ = write!(detail, "Reached round {}", round);
                self.show("Game over", &detail)
            }
        }
    }

    /// Current screen content
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Access the backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn show(&mut self, top: &str, bottom: &str) -> Result<(), DisplayError> {
        self.screen.set_line(0, top);
        self.screen.set_line(1, bottom);
        self.screen.render_to(&mut self.backend)
    }
}
