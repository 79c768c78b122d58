//! Buzzer trait

use crate::config::BuzzerPattern;

/// Trait for the buzzer
///
/// `play` blocks for the length of the pattern. `Silent` returns
/// immediately.
pub trait Sound {
    fn play(&mut self, pattern: BuzzerPattern);
}
