//! Configuration type definitions
//!
//! Game timing and tone settings. The firmware bakes a validated instance
//! in at build time; nothing is persisted.

use crate::sequence::{Move, MAX_LEVELS, NUM_MOVES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounds needed to win
pub const DEFAULT_LEVELS_TO_COMPLETE: u8 = 10;

/// Time allowed for each button press
pub const DEFAULT_ENTRY_TIME_LIMIT_MS: u32 = 3500;

/// How long a move is lit/sounded during replay
pub const DEFAULT_MOVE_TIME_MS: u32 = 150;

/// Dark gap after each replayed move
pub const DEFAULT_MOVE_GAP_MS: u32 = 150;

/// Pause between a cleared round and the next replay
pub const DEFAULT_ROUND_GAP_MS: u32 = 1000;

/// Shortest move time the tempo may reach
pub const DEFAULT_MIN_MOVE_TIME_MS: u32 = 80;

/// Tone per move (Green, Red, Yellow, Blue)
pub const DEFAULT_TONES_HZ: [u32; NUM_MOVES] = [440, 466, 294, 391];

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `levels_to_complete` is zero
    NoLevels,
    /// `levels_to_complete` exceeds the sequence capacity
    TooManyLevels,
    /// `entry_time_limit_ms` is zero
    ZeroEntryTime,
    /// `move_time_ms` or `min_move_time_ms` is zero
    ZeroMoveTime,
    /// A tone frequency is zero
    ZeroTone,
    /// Two moves share a tone
    DuplicateTone,
}

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Rounds to clear for a win (also the final sequence length)
    pub levels_to_complete: u8,
    /// Timeout for each button press during validation
    pub entry_time_limit_ms: u32,
    /// Light + tone duration per move in round 1
    pub move_time_ms: u32,
    /// Silence between replayed moves
    pub move_gap_ms: u32,
    /// Pause after a cleared round
    pub round_gap_ms: u32,
    /// Move time lost per round (0 = fixed tempo)
    pub move_time_step_ms: u32,
    /// Floor for the shrinking move time
    pub min_move_time_ms: u32,
    /// Tone frequency per move, in `Move::index` order
    pub tones_hz: [u32; NUM_MOVES],
}

impl GameConfig {
    /// Default configuration, usable in const context
    pub const DEFAULT: GameConfig = GameConfig {
        levels_to_complete: DEFAULT_LEVELS_TO_COMPLETE,
        entry_time_limit_ms: DEFAULT_ENTRY_TIME_LIMIT_MS,
        move_time_ms: DEFAULT_MOVE_TIME_MS,
        move_gap_ms: DEFAULT_MOVE_GAP_MS,
        round_gap_ms: DEFAULT_ROUND_GAP_MS,
        move_time_step_ms: 0,
        min_move_time_ms: DEFAULT_MIN_MOVE_TIME_MS,
        tones_hz: DEFAULT_TONES_HZ,
    };

    /// Check that the configuration can drive a session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels_to_complete == 0 {
            return Err(ConfigError::NoLevels);
        }
        if usize::from(self.levels_to_complete) > MAX_LEVELS {
            return Err(ConfigError::TooManyLevels);
        }
        if self.entry_time_limit_ms == 0 {
            return Err(ConfigError::ZeroEntryTime);
        }
        if self.move_time_ms == 0 || self.min_move_time_ms == 0 {
            return Err(ConfigError::ZeroMoveTime);
        }

        for (i, &tone) in self.tones_hz.iter().enumerate() {
            if tone == 0 {
                return Err(ConfigError::ZeroTone);
            }
            if self.tones_hz[..i].contains(&tone) {
                return Err(ConfigError::DuplicateTone);
            }
        }

        Ok(())
    }

    /// Move time used while replaying round `round` (1-based)
    ///
    /// Shrinks by `move_time_step_ms` per round but never below
    /// `min_move_time_ms` (or `move_time_ms`, whichever is smaller).
    pub fn move_time_for_round(&self, round: u8) -> u32 {
        let steps = u32::from(round.saturating_sub(1));
        let floor = self.min_move_time_ms.min(self.move_time_ms);

        self.move_time_ms
            .saturating_sub(steps.saturating_mul(self.move_time_step_ms))
            .max(floor)
    }

    /// Tone frequency for a move
    pub fn tone_hz(&self, mv: Move) -> u32 {
        self.tones_hz[mv.index()]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.levels_to_complete, 10);
        assert_eq!(config.entry_time_limit_ms, 3500);
        assert_eq!(config.round_gap_ms, 1000);
    }

    #[test]
    fn test_level_bounds() {
        let mut config = GameConfig::default();

        config.levels_to_complete = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoLevels));

        config.levels_to_complete = MAX_LEVELS as u8 + 1;
        assert_eq!(config.validate(), Err(ConfigError::TooManyLevels));

        config.levels_to_complete = MAX_LEVELS as u8;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_timings_rejected() {
        let config = GameConfig {
            entry_time_limit_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroEntryTime));

        let config = GameConfig {
            move_time_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMoveTime));

        let config = GameConfig {
            min_move_time_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMoveTime));
    }

    #[test]
    fn test_tones_must_be_distinct() {
        let config = GameConfig {
            tones_hz: [440, 466, 440, 391],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DuplicateTone));

        let config = GameConfig {
            tones_hz: [440, 0, 294, 391],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTone));
    }

    #[test]
    fn test_fixed_tempo_by_default() {
        let config = GameConfig::default();
        for round in 1..=10 {
            assert_eq!(config.move_time_for_round(round), DEFAULT_MOVE_TIME_MS);
        }
    }

    #[test]
    fn test_tempo_escalates_to_floor() {
        let config = GameConfig {
            move_time_ms: 150,
            move_time_step_ms: 20,
            min_move_time_ms: 80,
            ..Default::default()
        };

        assert_eq!(config.move_time_for_round(1), 150);
        assert_eq!(config.move_time_for_round(2), 130);
        assert_eq!(config.move_time_for_round(4), 90);
        assert_eq!(config.move_time_for_round(5), 80);
        assert_eq!(config.move_time_for_round(30), 80);
    }

    #[test]
    fn test_tone_lookup() {
        let config = GameConfig::default();
        assert_eq!(config.tone_hz(Move::Green), 440);
        assert_eq!(config.tone_hz(Move::Blue), 391);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_toml() {
        let config: GameConfig = toml::from_str(
            "levels_to_complete = 5\n\
             entry_time_limit_ms = 2000\n\
             tones_hz = [262, 330, 392, 523]\n",
        )
        .unwrap();

        assert_eq!(config.levels_to_complete, 5);
        assert_eq!(config.entry_time_limit_ms, 2000);
        assert_eq!(config.move_time_ms, DEFAULT_MOVE_TIME_MS);
        assert_eq!(config.tones_hz, [262, 330, 392, 523]);
        assert_eq!(config.validate(), Ok(()));
    }
}
