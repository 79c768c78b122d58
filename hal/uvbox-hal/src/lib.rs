//! UV Box Hardware Abstraction Layer
//!
//! Digital I/O traits implemented by the board crate and consumed by
//! `uvbox-drivers`. Keeping them here lets the drivers and their tests
//! run on the host without any chip HAL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  uvbox-drivers (buttons, lid, outputs)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  uvbox-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  uvbox-firmware (embassy-rp pin types)  │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{InputPin, OutputPin};
