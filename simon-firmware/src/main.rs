//! Simon - Memory Game Firmware
//!
//! Main firmware binary for RP2040-based Simon boards: four buttons, four
//! LEDs, a piezo buzzer and an optional 16x2 status LCD.
//!
//! The game loop is fully blocking and runs inside the single embassy main
//! task, using `embassy_time::Delay` for every pause.
//!
//! Wiring:
//! - Buttons (to ground, internal pull-ups): GPIO2-5 green, red, yellow, blue
//! - LEDs (active-high): GPIO6-9 green, red, yellow, blue
//! - Buzzer: GPIO15 (PWM slice 7, channel B)
//! - LCD backpack: I2C0, SDA GPIO20, SCL GPIO21

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{self, Pwm};
use embassy_time::Delay;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use {defmt_rtt as _, panic_probe as _};

use simon_core::traits::InputSource;
use simon_core::{GameBoard, SequenceEngine};
use simon_display::{Hd44780, StatusScreen};
use simon_drivers::{ButtonConfig, ButtonPad, Console, ConsoleConfig, LedBank};

use crate::buzzer::PwmBuzzer;
use crate::config::{BUTTON_DEBOUNCE_MS, DISPLAY_ENABLED, GAME_CONFIG, LCD_ADDRESS};

mod buzzer;
mod config;

/// How long the idle screen waits for a press before sweeping the LEDs
const ATTRACT_SWEEP_MS: u32 = 10_000;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Simon firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Game config: {} levels, {}ms entry limit, {}ms move, {}ms gap",
        GAME_CONFIG.levels_to_complete,
        GAME_CONFIG.entry_time_limit_ms,
        GAME_CONFIG.move_time_ms,
        GAME_CONFIG.move_gap_ms
    );

    // Buttons
    let buttons = [
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
    ];
    let pad = ButtonPad::new(
        buttons,
        Delay,
        ButtonConfig {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            ..Default::default()
        },
    );

    // LEDs
    let leds = LedBank::new_active_high([
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
    ]);

    // Buzzer
    let pwm = Pwm::new_output_b(p.PWM_SLICE7, p.PIN_15, pwm::Config::default());
    let buzzer = PwmBuzzer::new(pwm);

    // Status display
    let bus = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c::Config::default());
    let mut lcd = Hd44780::with_address(bus, Delay, LCD_ADDRESS);
    if DISPLAY_ENABLED {
        match lcd.init() {
            Ok(()) => info!("LCD initialized at {=u8:#x}", LCD_ADDRESS),
            Err(e) => warn!("LCD init failed: {:?}, continuing without display", e),
        }
    }

    let mut rng = RoscRng;
    let console = Console::new(
        leds,
        buzzer,
        Delay,
        StatusScreen::new(lcd),
        ConsoleConfig::for_game(&GAME_CONFIG),
        rng.next_u64(),
    );
    let mut board = GameBoard::new(pad, console);

    let moves = SmallRng::seed_from_u64(rng.next_u64());
    let mut engine = match SequenceEngine::new(GAME_CONFIG, moves) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Invalid game config: {:?}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    };

    info!("Ready");

    loop {
        wait_for_player(&mut board);

        // Fresh sequence for every game
        *engine.moves_mut() = SmallRng::seed_from_u64(rng.next_u64());

        info!("Session started");
        let outcome = engine.play_session(&mut board);

        match engine.last_report() {
            Some(report) => info!(
                "Session finished: {} after round {} ({} cleared), loss: {}",
                outcome,
                report.rounds_reached,
                report.rounds_cleared(),
                report.loss
            ),
            None => info!("Session finished: {}", outcome),
        }
    }
}

/// Attract mode: idle screen until any button is pressed
///
/// The press that starts a game is consumed here and does not count as a
/// move.
fn wait_for_player<I, L, T, D, B>(board: &mut GameBoard<I, Console<L, T, D, B>>)
where
    I: InputSource,
    L: embedded_hal::digital::OutputPin,
    T: simon_drivers::ToneOutput,
    D: embedded_hal::delay::DelayNs,
    B: simon_display::DisplayBackend,
{
    board.output_mut().show_idle();

    loop {
        if let Some(mv) = board.input_mut().wait_for_move(ATTRACT_SWEEP_MS) {
            debug!("Start pressed: {}", mv);
            return;
        }
        board.output_mut().sweep();
    }
}
