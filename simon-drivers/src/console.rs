//! Game console
//!
//! Combines the LED bank, the buzzer and the status display into the
//! output side of a game board. Implements `Playback` for the sequence
//! replay and `Feedback` for the effects around it:
//!
//! - Start: LEDs sweep forward then backward
//! - Round start: all LEDs blink (from round 2 on), status text
//! - Player turn: status text
//! - Loss: the expected move blinks, a low buzz, all LEDs blink more the
//!   further the player got
//! - Win: victory melody with random LEDs, then confetti blinks

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use simon_core::config::GameConfig;
use simon_core::state::{GameOutcome, LossCause};
use simon_core::traits::{Feedback, Playback};
use simon_core::{Move, NUM_MOVES};
use simon_display::{DisplayBackend, StatusScreen};

use crate::buzzer::{Note, ToneOutput, LOSS_BUZZ, VICTORY_MELODY};
use crate::lights::LedBank;

/// Console effect configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleConfig {
    /// Tone per move (Hz), indexed by `Move::index`
    pub tones_hz: [u32; NUM_MOVES],
    /// Silence before each jingle note (ms)
    pub note_lead_ms: u32,
    /// LED blink time for sweep and confetti (ms)
    pub blink_ms: u32,
    /// Blink time when revealing the expected move (ms)
    pub reveal_blink_ms: u32,
    /// Number of reveal blinks
    pub reveal_blinks: u8,
    /// Number of confetti blinks after the victory melody
    pub confetti_blinks: u8,
    /// Blink time of the all-LED blinks (ms)
    pub all_blink_ms: u32,
    /// All-LED blinks announcing each round after the first
    pub round_blinks: u8,
    /// Pause between the round blinks and the replay (ms)
    pub round_pause_ms: u32,
    /// Minimum number of all-LED loss blinks
    ///
    /// Losing in round `n` blinks `max(loss_blinks, n - 3)` times.
    pub loss_blinks: u8,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            tones_hz: GameConfig::DEFAULT.tones_hz,
            note_lead_ms: 50,
            blink_ms: 100,
            reveal_blink_ms: 200,
            reveal_blinks: 2,
            confetti_blinks: 10,
            all_blink_ms: 300,
            round_blinks: 2,
            round_pause_ms: 200,
            loss_blinks: 2,
        }
    }
}

impl ConsoleConfig {
    /// Default effects with the game's tone table
    pub fn for_game(game: &GameConfig) -> Self {
        Self {
            tones_hz: game.tones_hz,
            ..Default::default()
        }
    }
}

/// LED + buzzer + status display console
pub struct Console<L, T, D, B> {
    leds: LedBank<L>,
    tone: T,
    delay: D,
    status: StatusScreen<B>,
    config: ConsoleConfig,
    rng: SmallRng,
    /// Last LED lit by the confetti effect
    last_confetti: Option<usize>,
    /// Round shown on the status display
    round: u8,
}

impl<L, T, D, B> Console<L, T, D, B>
where
    L: OutputPin,
    T: ToneOutput,
    D: DelayNs,
    B: DisplayBackend,
{
    /// Create a new console
    ///
    /// `seed` only drives the confetti effect.
    pub fn new(
        leds: LedBank<L>,
        tone: T,
        delay: D,
        status: StatusScreen<B>,
        config: ConsoleConfig,
        seed: u64,
    ) -> Self {
        Self {
            leds,
            tone,
            delay,
            status,
            config,
            rng: SmallRng::seed_from_u64(seed),
            last_confetti: None,
            round: 0,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Access the status display
    pub fn status(&self) -> &StatusScreen<B> {
        &self.status
    }

    /// Access the LED bank
    pub fn leds_mut(&mut self) -> &mut LedBank<L> {
        &mut self.leds
    }

    /// Attract mode: idle text, everything dark and silent
    pub fn show_idle(&mut self) {
        self.leds.all(false);
        self.tone.stop();
        let _ = self.status.show_idle();
    }

    /// Blink each LED in order, then in reverse order
    pub fn sweep(&mut self) {
        let blink = self.config.blink_ms;

        for mv in Move::ALL {
            self.blink(mv, blink, 1);
        }
        self.delay.delay_ms(blink);

        for mv in Move::ALL.into_iter().rev() {
            self.blink(mv, blink, 1);
        }
        self.delay.delay_ms(blink);
    }

    /// Blink one LED `times` times, without a trailing pause
    fn blink(&mut self, mv: Move, on_ms: u32, times: u8) {
        for i in 0..times {
            self.leds.set(mv, true);
            self.delay.delay_ms(on_ms);
            self.leds.set(mv, false);

            if i + 1 < times {
                self.delay.delay_ms(on_ms);
            }
        }
    }

    /// Blink all LEDs together `times` times
    fn blink_all(&mut self, on_ms: u32, times: u8) {
        for _ in 0..times {
            self.delay.delay_ms(on_ms);
            self.leds.all(true);
            self.delay.delay_ms(on_ms);
            self.leds.all(false);
        }
    }

    /// Play one jingle note after the lead-in pause
    fn play_note(&mut self, note: Note) {
        self.delay.delay_ms(self.config.note_lead_ms);
        self.tone.start(note.freq_hz);
        self.delay.delay_ms(note.duration_ms);
        self.tone.stop();
    }

    /// Pick a random LED other than the previous confetti LED
    fn next_confetti(&mut self) -> Move {
        let index = match self.last_confetti {
            Some(last) => {
                let pick = self.rng.gen_range(0..NUM_MOVES - 1);
                if pick >= last {
                    pick + 1
                } else {
                    pick
                }
            }
            None => self.rng.gen_range(0..NUM_MOVES),
        };
        self.last_confetti = Some(index);
        Move::ALL[index]
    }

    fn celebrate(&mut self) {
        self.last_confetti = None;

        for note in VICTORY_MELODY {
            let mv = self.next_confetti();
            self.leds.set(mv, true);
            self.play_note(note);
            self.leds.set(mv, false);
        }

        for _ in 0..self.config.confetti_blinks {
            let mv = self.next_confetti();
            self.blink(mv, self.config.blink_ms, 1);
        }
    }

    fn commiserate(&mut self) {
        self.leds.all(true);
        for note in LOSS_BUZZ {
            self.play_note(note);
        }
        self.leds.all(false);

        self.blink_all(self.config.all_blink_ms, self.loss_blink_count());
    }

    /// All-LED loss blinks for the round reached
    fn loss_blink_count(&self) -> u8 {
        self.config.loss_blinks.max(self.round.saturating_sub(3))
    }
}

impl<L, T, D, B> Playback for Console<L, T, D, B>
where
    L: OutputPin,
    T: ToneOutput,
    D: DelayNs,
    B: DisplayBackend,
{
    fn render(&mut self, mv: Move, duration_ms: u32) {
        self.leds.set(mv, true);
        self.tone.start(self.config.tones_hz[mv.index()]);
        self.delay.delay_ms(duration_ms);
        self.tone.stop();
        self.leds.set(mv, false);
    }

    fn rest(&mut self, duration_ms: u32) {
        self.leds.all(false);
        self.tone.stop();
        self.delay.delay_ms(duration_ms);
    }
}

impl<L, T, D, B> Feedback for Console<L, T, D, B>
where
    L: OutputPin,
    T: ToneOutput,
    D: DelayNs,
    B: DisplayBackend,
{
    fn session_started(&mut self) {
        self.round = 0;
        self.sweep();
    }

    fn round_started(&mut self, round: u8, levels: u8) {
        self.round = round;
        let _ = self.status.show_round(round, levels);

        if round > 1 && self.config.round_blinks > 0 {
            self.blink_all(self.config.all_blink_ms, self.config.round_blinks);
            self.delay.delay_ms(self.config.round_pause_ms);
        }
    }

    fn awaiting_input(&mut self) {
        let _ = self.status.show_your_turn();
    }

    fn reveal(&mut self, cause: LossCause) {
        self.blink(
            cause.expected(),
            self.config.reveal_blink_ms,
            self.config.reveal_blinks,
        );
    }

    fn announce(&mut self, outcome: GameOutcome) {
        let _ = self.status.show_result(outcome, self.round);
        match outcome {
            GameOutcome::Won => self.celebrate(),
            GameOutcome::Lost => self.commiserate(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use simon_display::NullDisplay;
    use std::rc::Rc;
    use std::vec;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Ev {
        Led(usize, bool),
        Tone(u32),
        Silence,
        Wait(u32),
    }

    type Trace = Rc<RefCell<Vec<Ev>>>;

    struct TracePin {
        index: usize,
        trace: Trace,
    }

    impl ErrorType for TracePin {
        type Error = Infallible;
    }

    impl OutputPin for TracePin {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push(Ev::Led(self.index, true));
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push(Ev::Led(self.index, false));
            Ok(())
        }
    }

    struct TraceTone(Trace);

    impl ToneOutput for TraceTone {
        fn start(&mut self, freq_hz: u32) {
            self.0.borrow_mut().push(Ev::Tone(freq_hz));
        }

        fn stop(&mut self) {
            self.0.borrow_mut().push(Ev::Silence);
        }
    }

    struct TraceDelay(Trace);

    impl DelayNs for TraceDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Ev::Wait(ms));
        }
    }

    type TestConsole = Console<TracePin, TraceTone, TraceDelay, NullDisplay>;

    fn console() -> (TestConsole, Trace) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let pins = core::array::from_fn(|index| TracePin {
            index,
            trace: trace.clone(),
        });
        let console = Console::new(
            LedBank::new_active_high(pins),
            TraceTone(trace.clone()),
            TraceDelay(trace.clone()),
            StatusScreen::new(NullDisplay),
            ConsoleConfig::default(),
            7,
        );
        trace.borrow_mut().clear();
        (console, trace)
    }

    fn lit_leds(trace: &Trace) -> Vec<usize> {
        trace
            .borrow()
            .iter()
            .filter_map(|ev| match ev {
                Ev::Led(i, true) => Some(*i),
                _ => None,
            })
            .collect()
    }

    fn screen_lines(console: &TestConsole) -> (&str, &str) {
        let screen = console.status().screen();
        (
            screen.get_line(0).unwrap_or_default(),
            screen.get_line(1).unwrap_or_default(),
        )
    }

    #[test]
    fn test_render_sequence() {
        let (mut console, trace) = console();
        console.render(Move::Red, 150);

        assert_eq!(
            *trace.borrow(),
            vec![
                Ev::Led(1, true),
                Ev::Tone(466),
                Ev::Wait(150),
                Ev::Silence,
                Ev::Led(1, false),
            ]
        );
    }

    #[test]
    fn test_render_uses_configured_tones() {
        let (mut console, trace) = console();
        console.config.tones_hz = [100, 200, 300, 400];
        console.render(Move::Blue, 10);

        assert!(trace.borrow().contains(&Ev::Tone(400)));
    }

    #[test]
    fn test_rest_is_dark_and_silent() {
        let (mut console, trace) = console();
        console.rest(1000);

        let trace = trace.borrow();
        assert!(!trace
            .iter()
            .any(|ev| matches!(ev, Ev::Led(_, true) | Ev::Tone(_))));
        assert_eq!(trace.last(), Some(&Ev::Wait(1000)));
    }

    #[test]
    fn test_sweep_order() {
        let (mut console, trace) = console();
        console.sweep();

        assert_eq!(lit_leds(&trace), vec![0, 1, 2, 3, 3, 2, 1, 0]);
    }

    #[test]
    fn test_reveal_blinks_expected_move_twice() {
        let (mut console, trace) = console();
        console.reveal(LossCause::WrongMove {
            expected: Move::Yellow,
            pressed: Move::Green,
        });

        assert_eq!(
            *trace.borrow(),
            vec![
                Ev::Led(2, true),
                Ev::Wait(200),
                Ev::Led(2, false),
                Ev::Wait(200),
                Ev::Led(2, true),
                Ev::Wait(200),
                Ev::Led(2, false),
            ]
        );
    }

    #[test]
    fn test_victory_plays_melody_with_lights() {
        let (mut console, trace) = console();
        console.round_started(10, 10);
        trace.borrow_mut().clear();
        console.announce(GameOutcome::Won);

        let tones: Vec<u32> = trace
            .borrow()
            .iter()
            .filter_map(|ev| match ev {
                Ev::Tone(hz) => Some(*hz),
                _ => None,
            })
            .collect();
        let melody: Vec<u32> = VICTORY_MELODY.iter().map(|n| n.freq_hz).collect();
        assert_eq!(tones, melody);

        // One LED per melody note plus the confetti blinks
        let lit = lit_leds(&trace);
        assert_eq!(lit.len(), VICTORY_MELODY.len() + 10);

        assert_eq!(screen_lines(&console), ("You win!", "10 rounds"));
    }

    #[test]
    fn test_confetti_never_repeats_led() {
        for seed in 0..20 {
            let (mut console, trace) = console();
            console.rng = SmallRng::seed_from_u64(seed);
            console.announce(GameOutcome::Won);

            let lit = lit_leds(&trace);
            assert!(
                lit.windows(2).all(|w| w[0] != w[1]),
                "seed {}: {:?}",
                seed,
                lit
            );
        }
    }

    #[test]
    fn test_loss_buzz_and_blink() {
        let (mut console, trace) = console();
        console.round_started(4, 10);
        trace.borrow_mut().clear();
        console.announce(GameOutcome::Lost);

        let trace_ref = trace.borrow();
        assert!(trace_ref.contains(&Ev::Tone(LOSS_BUZZ[0].freq_hz)));
        // Buzz with all LEDs lit, then two all-LED blinks
        let all_on = trace_ref
            .iter()
            .filter(|ev| matches!(ev, Ev::Led(0, true)))
            .count();
        assert_eq!(all_on, 3);
        drop(trace_ref);

        assert_eq!(screen_lines(&console), ("Game over", "Reached round 4"));
    }

    #[test]
    fn test_loss_blinks_grow_with_progress() {
        let (mut console, trace) = console();
        console.round_started(8, 10);
        trace.borrow_mut().clear();
        console.announce(GameOutcome::Lost);

        // Buzz with all LEDs lit, then max(2, 8 - 3) all-LED blinks
        let all_on = trace
            .borrow()
            .iter()
            .filter(|ev| matches!(ev, Ev::Led(0, true)))
            .count();
        assert_eq!(all_on, 1 + 5);
    }

    #[test]
    fn test_first_round_starts_without_blink() {
        let (mut console, trace) = console();
        console.round_started(1, 10);

        assert!(trace.borrow().is_empty());
    }

    #[test]
    fn test_later_rounds_blink_all_leds() {
        let (mut console, trace) = console();
        console.round_started(2, 10);

        let mut expected = Vec::new();
        for _ in 0..2 {
            expected.push(Ev::Wait(300));
            expected.extend((0..NUM_MOVES).map(|i| Ev::Led(i, true)));
            expected.push(Ev::Wait(300));
            expected.extend((0..NUM_MOVES).map(|i| Ev::Led(i, false)));
        }
        expected.push(Ev::Wait(200));

        assert_eq!(*trace.borrow(), expected);
        assert_eq!(screen_lines(&console), ("Round 2/10", "Watch..."));
    }

    #[test]
    fn test_round_blinks_can_be_disabled() {
        let (mut console, trace) = console();
        console.config.round_blinks = 0;
        console.round_started(5, 10);

        assert!(trace.borrow().is_empty());
    }

    #[test]
    fn test_status_texts_follow_session() {
        let (mut console, _) = console();

        console.show_idle();
        assert_eq!(screen_lines(&console), ("SIMON", "Press any key"));

        console.round_started(3, 10);
        assert_eq!(screen_lines(&console), ("Round 3/10", "Watch..."));

        console.awaiting_input();
        assert_eq!(screen_lines(&console), ("Round 3/10", "Your turn"));
    }
}
