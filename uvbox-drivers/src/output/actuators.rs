//! GPIO actuator outputs
//!
//! Drives the UV lamp, fan and indicator LEDs directly or via a
//! MOSFET/relay. Each channel can be active-high or active-low.

use uvbox_core::controller::ActuatorState;
use uvbox_hal::OutputPin;

/// One switched output
pub struct OutputChannel<P> {
    pin: P,
    /// If true, ON = pin LOW
    inverted: bool,
    /// Current logical state (true = on)
    on: bool,
}

impl<P: OutputPin> OutputChannel<P> {
    /// Create an output channel, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the load is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut channel = Self {
            pin,
            inverted,
            on: false,
        };
        channel.set_on(false);
        channel
    }

    /// Create an active-high output channel
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an active-low output channel
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Switch the load
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
        // on=true, inverted=false -> high; on=true, inverted=true -> low
        self.pin.set_level(on != self.inverted);
    }

    /// Current logical state
    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// All actuator outputs of the box
pub struct ActuatorBank<P> {
    pub lamp: OutputChannel<P>,
    pub fan: OutputChannel<P>,
    pub red_led: OutputChannel<P>,
    pub green_led: OutputChannel<P>,
}

impl<P: OutputPin> ActuatorBank<P> {
    /// Create the bank; every channel starts off
    pub fn new(
        lamp: OutputChannel<P>,
        fan: OutputChannel<P>,
        red_led: OutputChannel<P>,
        green_led: OutputChannel<P>,
    ) -> Self {
        Self {
            lamp,
            fan,
            red_led,
            green_led,
        }
    }

    /// Drive every output to the given state
    pub fn apply(&mut self, state: ActuatorState) {
        // Lamp first so it goes dark before anything else changes
        self.lamp.set_on(state.lamp_on);
        self.fan.set_on(state.fan_on);
        self.red_led.set_on(state.red_led_on);
        self.green_led.set_on(state.green_led_on);
    }

    /// Logical state of every output
    pub fn state(&self) -> ActuatorState {
        ActuatorState {
            lamp_on: self.lamp.is_on(),
            fan_on: self.fan.is_on(),
            red_led_on: self.red_led.is_on(),
            green_led_on: self.green_led.is_on(),
        }
    }
}
