//! PWM piezo buzzer
//!
//! Drives a passive piezo with a 50% duty square wave from one PWM slice.

use embassy_rp::pwm::{Config, Pwm};
use fixed::types::U12F4;
use simon_drivers::ToneOutput;

/// System clock feeding the PWM slices
const SYS_CLK_HZ: u32 = 125_000_000;

/// Integer clock divider; keeps audible frequencies within the 16-bit counter
const PWM_DIVIDER: u32 = 64;

/// Counter rate after the divider
const COUNTER_HZ: u32 = SYS_CLK_HZ / PWM_DIVIDER;

/// Counter wrap value for a tone, None if out of range
pub fn top_for(freq_hz: u32) -> Option<u16> {
    if freq_hz == 0 {
        return None;
    }
    let top = (COUNTER_HZ / freq_hz).checked_sub(1)?;
    u16::try_from(top).ok()
}

/// Buzzer on PWM channel B
pub struct PwmBuzzer<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> PwmBuzzer<'d> {
    /// Wrap a PWM slice with its B output attached to the buzzer
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut config = Config::default();
        config.divider = U12F4::from_num(PWM_DIVIDER);
        config.compare_b = 0;
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl ToneOutput for PwmBuzzer<'_> {
    fn start(&mut self, freq_hz: u32) {
        let Some(top) = top_for(freq_hz) else {
            defmt::warn!("Tone {} Hz out of range", freq_hz);
            self.stop();
            return;
        };
        self.config.top = top;
        self.config.compare_b = top / 2;
        self.pwm.set_config(&self.config);
    }

    fn stop(&mut self) {
        self.config.compare_b = 0;
        self.pwm.set_config(&self.config);
    }
}
