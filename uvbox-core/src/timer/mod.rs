//! Exposure timer
//!
//! Polled once per control cycle; there is no interrupt-driven timer.

pub mod session;

pub use session::{is_expired, remaining, RunSession};
