//! Configuration type definitions

use core::fmt;

use heapless::Vec;

use crate::input::Direction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of exposure presets
pub const MAX_PRESETS: usize = 10;

/// Factory exposure presets in seconds
pub const DEFAULT_PRESETS_S: [u16; MAX_PRESETS] = [10, 30, 60, 120, 200, 300, 600, 900, 1200, 1800];

/// Default control cycle period (ms)
pub const DEFAULT_CYCLE_MS: u16 = 50;

/// Accepted control cycle period range (ms)
pub const MIN_CYCLE_MS: u16 = 10;
pub const MAX_CYCLE_MS: u16 = 1000;

/// Default over-temperature limit (°C)
pub const DEFAULT_TEMPERATURE_LIMIT_C: i16 = 60;

/// Temperature limit range and menu step (°C)
pub const TEMPERATURE_LIMIT_MIN_C: i16 = 30;
pub const TEMPERATURE_LIMIT_MAX_C: i16 = 90;
pub const TEMPERATURE_LIMIT_STEP_C: i16 = 5;

/// When the cooling fan may run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FanPolicy {
    /// Fan runs continuously
    Always,
    /// Fan runs only while the lamp is on
    #[default]
    TimerOnly,
    /// Fan never runs
    Off,
}

impl FanPolicy {
    const ORDER: [FanPolicy; 3] = [FanPolicy::Always, FanPolicy::TimerOnly, FanPolicy::Off];

    /// Step to the neighbouring policy, clamped at both ends
    pub fn step(self, direction: Direction) -> Self {
        step_clamped(&Self::ORDER, self, direction)
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            FanPolicy::Always => "Always",
            FanPolicy::TimerOnly => "Timer",
            FanPolicy::Off => "Off",
        }
    }
}

/// Completion sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BuzzerPattern {
    Silent,
    Single,
    Double,
    #[default]
    Triple,
    Long,
    Chirp,
}

impl BuzzerPattern {
    const ORDER: [BuzzerPattern; 6] = [
        BuzzerPattern::Silent,
        BuzzerPattern::Single,
        BuzzerPattern::Double,
        BuzzerPattern::Triple,
        BuzzerPattern::Long,
        BuzzerPattern::Chirp,
    ];

    /// Step to the neighbouring pattern, clamped at both ends
    pub fn step(self, direction: Direction) -> Self {
        step_clamped(&Self::ORDER, self, direction)
    }

    /// Check if this pattern makes no sound
    pub fn is_silent(&self) -> bool {
        matches!(self, BuzzerPattern::Silent)
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            BuzzerPattern::Silent => "Silent",
            BuzzerPattern::Single => "Single",
            BuzzerPattern::Double => "Double",
            BuzzerPattern::Triple => "Triple",
            BuzzerPattern::Long => "Long",
            BuzzerPattern::Chirp => "Chirp",
        }
    }
}

fn step_clamped<T: Copy + PartialEq>(order: &[T], current: T, direction: Direction) -> T {
    let index = order.iter().position(|v| *v == current).unwrap_or(0);
    let next = match direction {
        Direction::Prev => index.saturating_sub(1),
        Direction::Next => (index + 1).min(order.len() - 1),
    };
    order[next]
}

/// Interlock and feedback settings
///
/// Edited from the settings menu; lives for the program lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SafetyConfig {
    /// Abort (and refuse to start) while the lid is open
    pub lid_required: bool,
    /// Abort at or above this temperature (°C)
    pub temperature_limit_c: i16,
    /// Fan behaviour
    pub fan_policy: FanPolicy,
    /// Sound played when an exposure completes
    pub buzzer_pattern: BuzzerPattern,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            lid_required: true,
            temperature_limit_c: DEFAULT_TEMPERATURE_LIMIT_C,
            fan_policy: FanPolicy::TimerOnly,
            buzzer_pattern: BuzzerPattern::Triple,
        }
    }
}

impl SafetyConfig {
    /// Move the temperature limit one menu step, clamped to the valid range
    pub fn step_temperature_limit(&mut self, direction: Direction) {
        let limit = match direction {
            Direction::Prev => self.temperature_limit_c - TEMPERATURE_LIMIT_STEP_C,
            Direction::Next => self.temperature_limit_c + TEMPERATURE_LIMIT_STEP_C,
        };
        self.temperature_limit_c = limit.clamp(TEMPERATURE_LIMIT_MIN_C, TEMPERATURE_LIMIT_MAX_C);
    }
}

/// Complete configuration of one box
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MachineConfig {
    /// Control cycle period (ms)
    pub cycle_ms: u16,
    /// Exposure presets in display order (seconds)
    pub presets: Vec<u16, MAX_PRESETS>,
    /// Interlock and feedback settings at boot
    pub safety: SafetyConfig,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            cycle_ms: DEFAULT_CYCLE_MS,
            presets: Vec::from_slice(&DEFAULT_PRESETS_S).unwrap_or_default(),
            safety: SafetyConfig::default(),
        }
    }
}

impl MachineConfig {
    /// Check the configuration for values the controller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_presets(&self.presets)?;

        let limit = self.safety.temperature_limit_c;
        if !(TEMPERATURE_LIMIT_MIN_C..=TEMPERATURE_LIMIT_MAX_C).contains(&limit) {
            return Err(ConfigError::TemperatureLimitOutOfRange(limit));
        }

        if !(MIN_CYCLE_MS..=MAX_CYCLE_MS).contains(&self.cycle_ms) {
            return Err(ConfigError::CyclePeriodOutOfRange(self.cycle_ms));
        }

        Ok(())
    }
}

/// Check a preset list: 1..=MAX_PRESETS entries, all positive
pub fn validate_presets(presets: &[u16]) -> Result<(), ConfigError> {
    if presets.is_empty() {
        return Err(ConfigError::NoPresets);
    }
    if presets.len() > MAX_PRESETS {
        return Err(ConfigError::TooManyPresets);
    }
    if let Some(index) = presets.iter().position(|&d| d == 0) {
        return Err(ConfigError::ZeroDuration { index: index as u8 });
    }
    Ok(())
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Preset list is empty
    NoPresets,
    /// More than `MAX_PRESETS` presets
    TooManyPresets,
    /// A preset has a zero duration
    ZeroDuration { index: u8 },
    /// Temperature limit outside the accepted range
    TemperatureLimitOutOfRange(i16),
    /// Cycle period outside the accepted range
    CyclePeriodOutOfRange(u16),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoPresets => write!(f, "at least one preset is required"),
            ConfigError::TooManyPresets => write!(f, "at most {} presets are allowed", MAX_PRESETS),
            ConfigError::ZeroDuration { index } => {
                write!(f, "preset {} has a zero duration", index)
            }
            ConfigError::TemperatureLimitOutOfRange(limit) => write!(
                f,
                "temperature limit {} C is outside {}..={} C",
                limit, TEMPERATURE_LIMIT_MIN_C, TEMPERATURE_LIMIT_MAX_C
            ),
            ConfigError::CyclePeriodOutOfRange(ms) => write!(
                f,
                "cycle period {} ms is outside {}..={} ms",
                ms, MIN_CYCLE_MS, MAX_CYCLE_MS
            ),
        }
    }
}
