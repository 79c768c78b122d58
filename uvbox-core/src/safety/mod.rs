//! Safety monitoring
//!
//! Evaluates the lid and temperature interlocks every control cycle.

pub mod monitor;

pub use monitor::{evaluate, is_plausible, SafetyStatus};
