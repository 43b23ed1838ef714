//! LED bank
//!
//! One LED per move, driven through `embedded-hal` output pins. LED `i`
//! belongs to `Move::from_index(i)`.

use embedded_hal::digital::OutputPin;
use simon_core::{Move, NUM_MOVES};

/// Four move LEDs
pub struct LedBank<L> {
    leds: [L; NUM_MOVES],
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state per LED
    lit: [bool; NUM_MOVES],
}

impl<L: OutputPin> LedBank<L> {
    /// Create a new LED bank
    ///
    /// # Arguments
    /// - `leds`: Pins in move order (green, red, yellow, blue)
    /// - `inverted`: If true, LEDs are ON when the pin is LOW (common-anode wiring)
    pub fn new(leds: [L; NUM_MOVES], inverted: bool) -> Self {
        let mut bank = Self {
            leds,
            inverted,
            lit: [false; NUM_MOVES],
        };
        // Ensure all LEDs start off
        bank.all(false);
        bank
    }

    /// Create a bank with LEDs wired pin-to-ground
    pub fn new_active_high(leds: [L; NUM_MOVES]) -> Self {
        Self::new(leds, false)
    }

    /// Switch the LED for `mv`
    pub fn set(&mut self, mv: Move, on: bool) {
        self.set_index(mv.index(), on);
    }

    /// Switch every LED
    pub fn all(&mut self, on: bool) {
        for index in 0..NUM_MOVES {
            self.set_index(index, on);
        }
    }

    /// Check whether the LED for `mv` is on
    pub fn is_on(&self, mv: Move) -> bool {
        self.lit[mv.index()]
    }

    /// Release the pins
    pub fn release(self) -> [L; NUM_MOVES] {
        self.leds
    }

    fn set_index(&mut self, index: usize, on: bool) {
        self.lit[index] = on;

        let pin = &mut self.leds[index];
        // Pin errors are not actionable mid-game
        let _ = if on != self.inverted {
            pin.set_high()
        } else {
            pin.set_low()
        };
    }
}
