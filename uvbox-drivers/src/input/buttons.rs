//! Button bank
//!
//! Reads the four front-panel buttons. Buttons pull their input to
//! ground when pressed.

use uvbox_core::input::RawLevels;
use uvbox_hal::InputPin;

/// The On, Prev, Next and Set buttons
pub struct ButtonBank<P> {
    on: P,
    prev: P,
    next: P,
    set: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> ButtonBank<P> {
    /// Create a button bank
    ///
    /// # Arguments
    /// - `on`, `prev`, `next`, `set`: button inputs
    /// - `active_low`: if true, a pressed button reads LOW
    pub fn new(on: P, prev: P, next: P, set: P, active_low: bool) -> Self {
        Self {
            on,
            prev,
            next,
            set,
            active_low,
        }
    }

    /// Create a bank for buttons wired to ground with pull-ups
    pub fn new_active_low(on: P, prev: P, next: P, set: P) -> Self {
        Self::new(on, prev, next, set, true)
    }

    fn is_pressed(&self, pin: &P) -> bool {
        pin.is_high() != self.active_low
    }

    /// Sample every button once
    pub fn read(&self) -> RawLevels {
        RawLevels {
            on: self.is_pressed(&self.on),
            prev: self.is_pressed(&self.prev),
            next: self.is_pressed(&self.next),
            set: self.is_pressed(&self.set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use uvbox_core::input::Button;

    /// Input pin whose level the test can change through a shared reference
    struct MockInput<'a>(&'a Cell<bool>);

    impl InputPin for MockInput<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_active_low_buttons() {
        let levels = [Cell::new(true), Cell::new(true), Cell::new(true), Cell::new(true)];
        let bank = ButtonBank::new_active_low(
            MockInput(&levels[0]),
            MockInput(&levels[1]),
            MockInput(&levels[2]),
            MockInput(&levels[3]),
        );

        assert_eq!(bank.read(), RawLevels::RELEASED);

        levels[2].set(false);
        assert_eq!(bank.read(), RawLevels::only(Button::Next));

        levels[2].set(true);
        levels[0].set(false);
        levels[3].set(false);
        let read = bank.read();
        assert!(read.on && read.set);
        assert!(!read.prev && !read.next);
    }

    #[test]
    fn test_active_high_buttons() {
        let levels = [Cell::new(false), Cell::new(true), Cell::new(false), Cell::new(false)];
        let bank = ButtonBank::new(
            MockInput(&levels[0]),
            MockInput(&levels[1]),
            MockInput(&levels[2]),
            MockInput(&levels[3]),
            false,
        );

        assert_eq!(bank.read(), RawLevels::only(Button::Prev));
    }
}
