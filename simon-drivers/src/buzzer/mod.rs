//! Piezo buzzer
//!
//! Tone output abstraction plus the note table and jingles used by the
//! console.

pub mod melody;

pub use melody::{Note, LOSS_BUZZ, VICTORY_MELODY};

/// Square-wave tone output
///
/// Implemented by the board's PWM buzzer. Calls are fire-and-forget.
pub trait ToneOutput {
    /// Start a tone at the given frequency, replacing any current tone
    fn start(&mut self, freq_hz: u32);

    /// Silence the buzzer
    fn stop(&mut self);
}
