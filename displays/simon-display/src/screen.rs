//! Screen buffer types
//!
//! Provides a character-based screen buffer for the 2x16 status display.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows on the status display
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns on the status display
pub const SCREEN_COLS: usize = 16;

/// Maximum bytes per line
///
/// Sized for the column count; text is cut at the last whole character
/// that fits.
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// Holds the intended content and only pushes it to a backend when
/// something changed since the last render.
#[derive(Clone)]
pub struct Screen {
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Set the content of a specific row
    ///
    /// Rows outside the screen are ignored. Setting the same text again
    /// does not mark the screen dirty.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };

        let text = truncate(text, LINE_LEN);
        if line.as_str() == text {
            return;
        }

        line.clear();
        // Cannot overflow: `text` fits LINE_LEN
        let _ = line.push_str(text);
        self.dirty = true;
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Push the buffer to a backend if anything changed
    ///
    /// The screen stays dirty when the backend fails so the next call
    /// retries.
    pub fn render_to<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<(), DisplayError> {
        if !self.dirty {
            return Ok(());
        }
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        backend.clear()?;
        for (row, line) in self.lines.iter().enumerate() {
            if !line.is_empty() {
                backend.draw_text(row as u8, 0, line)?;
            }
        }
        backend.flush()?;

        self.dirty = false;
        Ok(())
    }
}

/// Cut `text` to at most `max` bytes without splitting a character
fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
