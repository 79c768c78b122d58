//! Display backend trait
//!
//! Defines the interface for different display types.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering text.
/// Implementations handle the specifics of the attached panel.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}
