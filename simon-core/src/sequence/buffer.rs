//! Fixed-capacity move sequence

use heapless::Vec;

use super::moves::Move;

/// Hard capacity of a sequence (upper bound for `levels_to_complete`)
pub const MAX_LEVELS: usize = 32;

/// Returned when pushing onto a full sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceFull;

/// Ordered, append-only list of moves the player must reproduce
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    moves: Vec<Move, MAX_LEVELS>,
}

impl Sequence {
    /// Create an empty sequence
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Append a move
    pub fn push(&mut self, mv: Move) -> Result<(), SequenceFull> {
        self.moves.push(mv).map_err(|_| SequenceFull)
    }

    /// Drop every move
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move at `position`, if present
    pub fn get(&self, position: usize) -> Option<Move> {
        self.moves.get(position).copied()
    }

    /// Most recently added move
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Sequence {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Sequence[");
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", mv.name());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut seq = Sequence::new();
        seq.push(Move::Blue).unwrap();
        seq.push(Move::Green).unwrap();
        seq.push(Move::Blue).unwrap();

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.as_slice(), &[Move::Blue, Move::Green, Move::Blue]);
        assert_eq!(seq.get(1), Some(Move::Green));
        assert_eq!(seq.last(), Some(Move::Blue));
        assert_eq!(seq.get(3), None);
    }

    #[test]
    fn test_push_past_capacity() {
        let mut seq = Sequence::new();
        for _ in 0..MAX_LEVELS {
            seq.push(Move::Red).unwrap();
        }
        assert_eq!(seq.push(Move::Red), Err(SequenceFull));
        assert_eq!(seq.len(), MAX_LEVELS);
    }

    #[test]
    fn test_clear() {
        let mut seq = Sequence::new();
        seq.push(Move::Yellow).unwrap();
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.last(), None);
    }
}
