//! Rising-edge button sampler
//!
//! Each control cycle is the debounce unit: a press is reported once on
//! the cycle where a button goes from released to pressed, and never
//! while it is held or released.

use super::Direction;

/// Front-panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Start / stop / acknowledge
    On,
    /// Previous preset or value
    Prev,
    /// Next preset or value
    Next,
    /// Settings
    Set,
}

impl Button {
    /// All buttons, in the order their presses are dispatched
    pub const ALL: [Button; 4] = [Button::On, Button::Set, Button::Prev, Button::Next];

    /// Direction carried by a Prev/Next press
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Button::Prev => Some(Direction::Prev),
            Button::Next => Some(Direction::Next),
            Button::On | Button::Set => None,
        }
    }

    const fn mask(self) -> u8 {
        match self {
            Button::On => 0b0001,
            Button::Prev => 0b0010,
            Button::Next => 0b0100,
            Button::Set => 0b1000,
        }
    }
}

/// Logical button levels for one cycle (`true` = pressed)
///
/// Wiring polarity is already removed: active-low inputs are inverted
/// by the button driver before they get here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawLevels {
    pub on: bool,
    pub prev: bool,
    pub next: bool,
    pub set: bool,
}

impl RawLevels {
    /// Every button released
    pub const RELEASED: Self = Self {
        on: false,
        prev: false,
        next: false,
        set: false,
    };

    /// Levels with only `button` held
    pub fn only(button: Button) -> Self {
        let mut levels = Self::RELEASED;
        match button {
            Button::On => levels.on = true,
            Button::Prev => levels.prev = true,
            Button::Next => levels.next = true,
            Button::Set => levels.set = true,
        }
        levels
    }

    /// Check if a button is held
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::On => self.on,
            Button::Prev => self.prev,
            Button::Next => self.next,
            Button::Set => self.set,
        }
    }
}

/// A discrete button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Released → pressed edge
    Pressed(Button),
}

/// Set of presses detected in one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvents(u8);

impl ButtonEvents {
    /// No presses
    pub const NONE: Self = Self(0);

    /// A single press
    pub fn pressed(button: Button) -> Self {
        Self(button.mask())
    }

    /// Add a press to the set
    pub fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    /// Check if `button` was pressed this cycle
    pub fn contains(&self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    /// Check if nothing was pressed
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of presses
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Presses in dispatch order (On, Set, Prev, Next)
    pub fn iter(&self) -> impl Iterator<Item = ButtonEvent> + '_ {
        Button::ALL
            .into_iter()
            .filter(|b| self.contains(*b))
            .map(ButtonEvent::Pressed)
    }
}

/// Edge detector over the four buttons
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    /// Levels seen on the previous cycle
    previous: RawLevels,
}

impl InputSampler {
    /// Create a sampler with every button released
    pub fn new() -> Self {
        Self {
            previous: RawLevels::RELEASED,
        }
    }

    /// Sample this cycle's levels and report new presses
    pub fn sample(&mut self, levels: RawLevels) -> ButtonEvents {
        let events = Button::ALL
            .into_iter()
            .filter(|b| levels.is_pressed(*b) && !self.previous.is_pressed(*b))
            .fold(ButtonEvents::NONE, ButtonEvents::with);

        self.previous = levels;
        events
    }
}
