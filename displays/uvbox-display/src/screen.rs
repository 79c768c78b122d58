//! Screen buffer types
//!
//! Provides a character-based screen buffer for text-mode displays.

use heapless::String;

/// Number of character rows (128×32 panel, 8 px font)
pub const SCREEN_ROWS: usize = 4;

/// Number of character columns (128 px wide, 6 px advance)
pub const SCREEN_COLS: usize = 21;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// Two screens with equal lines show the same picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    lines: [String<LINE_LEN>; SCREEN_ROWS],
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
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }

    /// Set the content of a specific row
    ///
    /// Text longer than a row is truncated; rows past the bottom are ignored.
    pub fn set_line(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear();
            for c in text.chars() {
                if line.push(c).is_err() {
                    break;
                }
            }
        }
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
