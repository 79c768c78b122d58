//! Derived actuator outputs

use crate::config::{FanPolicy, SafetyConfig};
use crate::state::Mode;

/// Lamp, fan and indicator outputs
///
/// Never stored: always derived from the mode, the settings and whether
/// the fan is held on after a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorState {
    /// UV lamp
    pub lamp_on: bool,
    /// Cooling fan
    pub fan_on: bool,
    /// Red "exposing" indicator
    pub red_led_on: bool,
    /// Green "done" indicator
    pub green_led_on: bool,
}

impl ActuatorState {
    /// Every output off
    pub const OFF: Self = Self {
        lamp_on: false,
        fan_on: false,
        red_led_on: false,
        green_led_on: false,
    };

    /// Outputs for `mode` under `config`
    ///
    /// `fan_held` keeps the fan running outside a session under
    /// `FanPolicy::Always`. It is set when a session starts and cleared when
    /// one is aborted.
    pub fn derive(mode: Mode, config: &SafetyConfig, fan_held: bool) -> Self {
        let lamp_on = mode.lamp_allowed();
        let fan_on = match config.fan_policy {
            FanPolicy::Always => lamp_on || fan_held,
            FanPolicy::TimerOnly => lamp_on,
            FanPolicy::Off => false,
        };

        Self {
            lamp_on,
            fan_on,
            red_led_on: lamp_on,
            green_led_on: matches!(mode, Mode::Done),
        }
    }
}
