//! Board-agnostic control logic for the UV exposure box
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Input sampling (button edge detection)
//! - Safety monitoring (lid and temperature interlocks)
//! - Exposure timer
//! - Preset store
//! - State machine and the per-cycle controller
//! - Collaborator traits (display, sound, sensors)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod presets;
pub mod safety;
pub mod state;
pub mod timer;
pub mod traits;
