//! Preset store implementation

use heapless::Vec;

use crate::config::{validate_presets, ConfigError, DEFAULT_PRESETS_S, MAX_PRESETS};
use crate::input::Direction;

/// Preset durations plus the selected index
///
/// The cursor is clamped at both ends rather than wrapping, so stepping
/// past the longest exposure never lands on the shortest one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresetStore {
    /// Durations in display order (seconds)
    durations: Vec<u16, MAX_PRESETS>,
    /// Selected index, always `< durations.len()`
    cursor: usize,
}

impl Default for PresetStore {
    fn default() -> Self {
        Self {
            durations: Vec::from_slice(&DEFAULT_PRESETS_S).unwrap_or_default(),
            cursor: 0,
        }
    }
}

impl PresetStore {
    /// Create a store from a list of durations, cursor on the first entry
    pub fn new(durations: &[u16]) -> Result<Self, ConfigError> {
        validate_presets(durations)?;
        let durations = Vec::from_slice(durations).map_err(|_| ConfigError::TooManyPresets)?;
        Ok(Self {
            durations,
            cursor: 0,
        })
    }

    /// Move the cursor one step
    ///
    /// Returns `true` if the cursor moved, `false` if it was already at
    /// the end in that direction.
    pub fn select(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Prev => self.cursor.saturating_sub(1),
            Direction::Next => (self.cursor + 1).min(self.durations.len() - 1),
        };
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Selected duration (seconds)
    pub fn current(&self) -> u16 {
        self.durations[self.cursor]
    }

    /// Selected index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of presets
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Always false; a store holds at least one preset
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store() {
        let store = PresetStore::default();
        assert_eq!(store.len(), MAX_PRESETS);
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.current(), 10);
    }

    #[test]
    fn test_select_moves_and_clamps() {
        let mut store = PresetStore::new(&[10, 30, 60]).unwrap();

        assert!(!store.select(Direction::Prev));
        assert_eq!(store.cursor(), 0);

        assert!(store.select(Direction::Next));
        assert!(store.select(Direction::Next));
        assert_eq!(store.current(), 60);

        assert!(!store.select(Direction::Next));
        assert_eq!(store.cursor(), 2);

        assert!(store.select(Direction::Prev));
        assert_eq!(store.current(), 30);
    }

    #[test]
    fn test_single_preset() {
        let mut store = PresetStore::new(&[45]).unwrap();
        assert!(!store.select(Direction::Next));
        assert!(!store.select(Direction::Prev));
        assert_eq!(store.current(), 45);
    }

    #[test]
    fn test_rejects_invalid_lists() {
        assert_eq!(PresetStore::new(&[]), Err(ConfigError::NoPresets));
        assert_eq!(
            PresetStore::new(&[10, 0]),
            Err(ConfigError::ZeroDuration { index: 1 })
        );
        assert_eq!(PresetStore::new(&[1; 12]), Err(ConfigError::TooManyPresets));
    }
}
