//! Display snapshot

use crate::config::SafetyConfig;
use crate::safety::SafetyStatus;
use crate::state::Mode;

/// Everything the status display needs for one frame
///
/// Two equal views render identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusView {
    /// Current mode (carries the selected menu entry)
    pub mode: Mode,
    /// Seconds left while Running
    pub remaining_s: Option<u16>,
    /// Session duration while Running or Done
    pub session_s: Option<u16>,
    /// Selected preset (seconds)
    pub preset_s: u16,
    /// Selected preset index
    pub preset_index: u8,
    /// Number of presets
    pub preset_count: u8,
    /// Current settings
    pub safety: SafetyConfig,
    /// Pending safety alert, shown in Idle
    pub alert: Option<SafetyStatus>,
    /// Latest safety evaluation
    pub status: SafetyStatus,
    /// Latest plausible temperature, whole degrees
    pub temperature_c: Option<i16>,
}
