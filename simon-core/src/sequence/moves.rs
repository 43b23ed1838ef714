//! Player moves and the random source that produces them

use rand::{Rng, RngCore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of distinct moves (buttons, LEDs and tones)
pub const NUM_MOVES: usize = 4;

/// A single player choice
///
/// Each move owns exactly one LED, one button and one tone. Drivers map a
/// move to hardware through [`Move::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Move {
    Green,
    Red,
    Yellow,
    Blue,
}

impl Move {
    /// All moves in index order
    pub const ALL: [Move; NUM_MOVES] = [Move::Green, Move::Red, Move::Yellow, Move::Blue];

    /// Position of this move's LED/button/tone (0-3)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a move by hardware index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short display name
    pub const fn name(self) -> &'static str {
        match self {
            Move::Green => "Green",
            Move::Red => "Red",
            Move::Yellow => "Yellow",
            Move::Blue => "Blue",
        }
    }
}

/// Source of new sequence entries
///
/// Every [`RngCore`] is a uniform move source; tests substitute a scripted
/// stream to make sessions deterministic.
pub trait MoveSource {
    /// Draw the next move
    fn next_move(&mut self) -> Move;
}

impl<R: RngCore> MoveSource for R {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.gen_range(0..NUM_MOVES)]
    }
}
