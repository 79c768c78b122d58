//! Configuration types
//!
//! Board-agnostic settings for one exposure box. The firmware bakes a
//! `MachineConfig` in at build time; nothing is persisted at run time.

pub mod types;

pub use types::*;
