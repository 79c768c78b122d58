//! Lid switch
//!
//! A reed or microswitch that pulls its input low when the lid is closed.

use uvbox_core::traits::LidSensor;
use uvbox_hal::InputPin;

/// Lid interlock switch
pub struct LidSwitch<P> {
    pin: P,
    /// If true, closed = pin LOW
    closed_low: bool,
}

impl<P: InputPin> LidSwitch<P> {
    /// Create a lid switch
    ///
    /// # Arguments
    /// - `pin`: switch input
    /// - `closed_low`: if true, the lid is closed when the pin reads LOW
    pub fn new(pin: P, closed_low: bool) -> Self {
        Self { pin, closed_low }
    }

    /// Create a lid switch that reads LOW when closed
    pub fn new_closed_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: InputPin> LidSensor for LidSwitch<P> {
    fn is_closed(&mut self) -> bool {
        self.pin.is_high() != self.closed_low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockInput(bool);

    impl InputPin for MockInput {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_closed_low() {
        let mut lid = LidSwitch::new_closed_low(MockInput(false));
        assert!(lid.is_closed());

        lid.pin.0 = true;
        assert!(!lid.is_closed());
    }

    #[test]
    fn test_closed_high() {
        let mut lid = LidSwitch::new(MockInput(true), false);
        assert!(lid.is_closed());
    }
}
