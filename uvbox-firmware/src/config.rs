//! Embedded machine configuration
//!
//! The constants below are generated from machine.toml by build.rs and
//! validated there, so a bad file never produces a firmware image.

use defmt::*;
use heapless::Vec;
use uvbox_core::config::{BuzzerPattern, FanPolicy, MachineConfig, SafetyConfig};

include!(concat!(env!("OUT_DIR"), "/machine_config.rs"));

/// Build the machine configuration from the embedded constants
pub fn machine_config() -> MachineConfig {
    let presets = match Vec::from_slice(PRESETS_S) {
        Ok(presets) => presets,
        Err(()) => {
            error!("Embedded preset list too long, using defaults");
            return MachineConfig::default();
        }
    };

    MachineConfig {
        cycle_ms: CYCLE_MS,
        presets,
        safety: SAFETY,
    }
}
