//! Time-based switch debouncer
//!
//! A reading only becomes the stable state after it has been seen
//! continuously for the debounce time. Shorter glitches are dropped.

/// Debouncer for a single switch
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Required settle time in ms
    debounce_ms: u32,
    /// Last accepted state (true = pressed)
    stable: bool,
    /// How long the raw reading has differed from `stable`
    pending_ms: u32,
}

impl Debouncer {
    /// Create a debouncer in the released state
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            stable: false,
            pending_ms: 0,
        }
    }

    /// Feed a raw sample taken `elapsed_ms` after the previous one
    ///
    /// Returns the debounced state.
    pub fn update(&mut self, sample: bool, elapsed_ms: u32) -> bool {
        if sample == self.stable {
            self.pending_ms = 0;
            return self.stable;
        }

        self.pending_ms = self.pending_ms.saturating_add(elapsed_ms);
        if self.pending_ms >= self.debounce_ms {
            self.stable = sample;
            self.pending_ms = 0;
        }
        self.stable
    }

    /// Get the debounced state
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Forget any history and return to released
    pub fn reset(&mut self) {
        self.stable = false;
        self.pending_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_after_settle_time() {
        let mut db = Debouncer::new(20);

        for _ in 0..19 {
            assert!(!db.update(true, 1));
        }
        assert!(db.update(true, 1));
        assert!(db.is_pressed());
    }

    #[test]
    fn test_glitch_rejected() {
        let mut db = Debouncer::new(20);

        // 10ms of contact bounce, then open again
        for _ in 0..10 {
            db.update(true, 1);
        }
        assert!(!db.update(false, 1));

        // Bounce history does not carry over
        for _ in 0..19 {
            assert!(!db.update(true, 1));
        }
        assert!(db.update(true, 1));
    }

    #[test]
    fn test_release_also_debounced() {
        let mut db = Debouncer::new(5);
        for _ in 0..5 {
            db.update(true, 1);
        }
        assert!(db.is_pressed());

        for _ in 0..4 {
            assert!(db.update(false, 1));
        }
        assert!(!db.update(false, 1));
    }

    #[test]
    fn test_zero_debounce_is_immediate() {
        let mut db = Debouncer::new(0);
        assert!(db.update(true, 1));
        assert!(!db.update(false, 1));
    }

    #[test]
    fn test_reset() {
        let mut db = Debouncer::new(1);
        db.update(true, 1);
        assert!(db.is_pressed());

        db.reset();
        assert!(!db.is_pressed());
    }
}
