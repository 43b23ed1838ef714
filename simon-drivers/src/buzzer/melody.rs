//! Notes and jingles

/// Note frequencies in Hz
pub mod notes {
    pub const F4: u32 = 349;
    pub const A4: u32 = 440;
    pub const C5: u32 = 523;

    /// Low buzz for a lost game
    pub const BUZZ: u32 = 110;
}

/// One note of a jingle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Frequency in Hz
    pub freq_hz: u32,
    /// Duration in ms
    pub duration_ms: u32,
}

impl Note {
    pub const fn new(freq_hz: u32, duration_ms: u32) -> Self {
        Self {
            freq_hz,
            duration_ms,
        }
    }
}

/// Played after the last round is cleared (opening bars of the Imperial March)
pub const VICTORY_MELODY: [Note; 9] = [
    Note::new(notes::A4, 500),
    Note::new(notes::A4, 500),
    Note::new(notes::A4, 500),
    Note::new(notes::F4, 350),
    Note::new(notes::C5, 150),
    Note::new(notes::A4, 500),
    Note::new(notes::F4, 350),
    Note::new(notes::C5, 150),
    Note::new(notes::A4, 650),
];

/// Played when the player loses
pub const LOSS_BUZZ: [Note; 1] = [Note::new(notes::BUZZ, 600)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_victory_melody_length() {
        let total: u32 = VICTORY_MELODY.iter().map(|n| n.duration_ms).sum();
        assert_eq!(total, 3650);
    }

    #[test]
    fn test_victory_melody_notes() {
        let freqs: [u32; 9] = core::array::from_fn(|i| VICTORY_MELODY[i].freq_hz);
        assert_eq!(freqs, [440, 440, 440, 349, 523, 440, 349, 523, 440]);
    }
}
