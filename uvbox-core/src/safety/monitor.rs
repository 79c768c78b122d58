//! Safety monitor implementation
//!
//! A pure function of the current readings and settings. Lid safety takes
//! precedence over temperature; an implausible temperature reading is
//! treated as over-temperature so a broken sensor fails safe.

use crate::config::SafetyConfig;

/// Lowest temperature a connected thermistor can plausibly report (°C)
pub const SENSOR_MIN_PLAUSIBLE_C: f32 = -20.0;

/// Highest temperature a connected thermistor can plausibly report (°C)
pub const SENSOR_MAX_PLAUSIBLE_C: f32 = 150.0;

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// All interlocks satisfied
    Ok,
    /// Lid interlock enabled and the lid is open
    LidOpen,
    /// Temperature at or above the limit, or the reading is implausible
    OverTemp,
}

impl SafetyStatus {
    /// Check if the lamp may run
    pub fn is_ok(&self) -> bool {
        matches!(self, SafetyStatus::Ok)
    }
}

/// Check if a temperature reading can come from a working sensor
///
/// NaN and readings outside the thermistor's range indicate an open or
/// shorted sensor.
pub fn is_plausible(temperature_c: f32) -> bool {
    (SENSOR_MIN_PLAUSIBLE_C..=SENSOR_MAX_PLAUSIBLE_C).contains(&temperature_c)
}

/// Evaluate the interlocks
///
/// # Arguments
/// - `lid_closed`: lid switch state
/// - `temperature_c`: latest temperature reading (NaN for a failed read)
/// - `config`: current interlock settings
pub fn evaluate(lid_closed: bool, temperature_c: f32, config: &SafetyConfig) -> SafetyStatus {
    if config.lid_required && !lid_closed {
        return SafetyStatus::LidOpen;
    }

    if !is_plausible(temperature_c) {
        return SafetyStatus::OverTemp;
    }

    if temperature_c >= f32::from(config.temperature_limit_c) {
        return SafetyStatus::OverTemp;
    }

    SafetyStatus::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_operation() {
        let config = SafetyConfig::default();
        assert_eq!(evaluate(true, 35.0, &config), SafetyStatus::Ok);
    }

    #[test]
    fn test_lid_open() {
        let config = SafetyConfig::default();
        assert_eq!(evaluate(false, 35.0, &config), SafetyStatus::LidOpen);
    }

    #[test]
    fn test_lid_ignored_when_not_required() {
        let config = SafetyConfig {
            lid_required: false,
            ..Default::default()
        };
        assert_eq!(evaluate(false, 35.0, &config), SafetyStatus::Ok);
    }

    #[test]
    fn test_over_temperature_at_limit() {
        let config = SafetyConfig::default();
        assert_eq!(evaluate(true, 59.9, &config), SafetyStatus::Ok);
        assert_eq!(evaluate(true, 60.0, &config), SafetyStatus::OverTemp);
        assert_eq!(evaluate(true, 75.0, &config), SafetyStatus::OverTemp);
    }

    #[test]
    fn test_lid_takes_precedence() {
        let config = SafetyConfig::default();
        assert_eq!(evaluate(false, 90.0, &config), SafetyStatus::LidOpen);
    }

    #[test]
    fn test_sensor_fault_fails_safe() {
        let config = SafetyConfig::default();
        assert_eq!(evaluate(true, f32::NAN, &config), SafetyStatus::OverTemp);
        assert_eq!(evaluate(true, -273.15, &config), SafetyStatus::OverTemp);
        assert_eq!(evaluate(true, 400.0, &config), SafetyStatus::OverTemp);
        assert_eq!(evaluate(true, f32::INFINITY, &config), SafetyStatus::OverTemp);
    }

    #[test]
    fn test_plausible_range() {
        assert!(is_plausible(-20.0));
        assert!(is_plausible(22.5));
        assert!(is_plausible(150.0));
        assert!(!is_plausible(-20.5));
        assert!(!is_plausible(f32::NAN));
    }
}
