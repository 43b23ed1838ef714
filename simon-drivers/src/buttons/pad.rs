//! Four-button pad
//!
//! Polls the buttons through `embedded-hal` input pins and reports one
//! debounced press per call.
//!
//! # Usage
//!
//! ```ignore
//! let mut pad = ButtonPad::new([green, red, yellow, blue], Delay, ButtonConfig::default());
//! match pad.wait_for_move(3500) {
//!     Some(mv) => { /* player pressed mv */ }
//!     None => { /* timed out */ }
//! }
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use simon_core::traits::InputSource;
use simon_core::{Move, NUM_MOVES};

use super::debounce::Debouncer;

/// Button pad configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Time a reading must hold before it is accepted (ms)
    pub debounce_ms: u32,
    /// Delay between polls (ms, 0 is treated as 1)
    pub poll_interval_ms: u32,
    /// Pressed reads low (buttons to ground with pull-ups)
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            poll_interval_ms: 1,
            active_low: true,
        }
    }
}

/// Debounced four-button pad
///
/// Button `i` maps to `Move::from_index(i)`.
pub struct ButtonPad<B, D> {
    buttons: [B; NUM_MOVES],
    debouncers: [Debouncer; NUM_MOVES],
    delay: D,
    config: ButtonConfig,
}

impl<B, D> ButtonPad<B, D>
where
    B: InputPin,
    D: DelayNs,
{
    /// Create a new button pad
    pub fn new(buttons: [B; NUM_MOVES], delay: D, config: ButtonConfig) -> Self {
        Self {
            buttons,
            debouncers: [Debouncer::new(config.debounce_ms); NUM_MOVES],
            delay,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Release the pins and delay
    pub fn release(self) -> ([B; NUM_MOVES], D) {
        (self.buttons, self.delay)
    }

    fn poll_ms(&self) -> u32 {
        self.config.poll_interval_ms.max(1)
    }

    /// Raw reading of one button, true = pressed
    ///
    /// A failed read counts as released.
    fn read(&mut self, index: usize) -> bool {
        let pin = &mut self.buttons[index];
        let level = if self.config.active_low {
            pin.is_low()
        } else {
            pin.is_high()
        };
        level.unwrap_or(false)
    }

    /// Sample every button once, returning the lowest settled press
    fn sample_all(&mut self, elapsed_ms: u32) -> Option<usize> {
        let mut pressed = None;
        for index in 0..NUM_MOVES {
            let sample = self.read(index);
            if self.debouncers[index].update(sample, elapsed_ms) && pressed.is_none() {
                pressed = Some(index);
            }
        }
        pressed
    }

    /// Block until button `index` has settled released
    fn wait_release(&mut self, index: usize) {
        let poll = self.poll_ms();
        loop {
            self.delay.delay_ms(poll);
            let sample = self.read(index);
            if !self.debouncers[index].update(sample, poll) {
                return;
            }
        }
    }
}

impl<B, D> InputSource for ButtonPad<B, D>
where
    B: InputPin,
    D: DelayNs,
{
    fn wait_for_move(&mut self, timeout_ms: u32) -> Option<Move> {
        let poll = self.poll_ms();
        for debouncer in &mut self.debouncers {
            debouncer.reset();
        }

        let mut waited_ms = 0u32;
        loop {
            if let Some(index) = self.sample_all(poll) {
                self.wait_release(index);
                return Move::from_index(index);
            }
            if waited_ms >= timeout_ms {
                return None;
            }
            self.delay.delay_ms(poll);
            waited_ms = waited_ms.saturating_add(poll);
        }
    }
}
