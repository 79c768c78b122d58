//! Button input
//!
//! Turns the raw button levels sampled each control cycle into discrete
//! press events.

pub mod sampler;

pub use sampler::{Button, ButtonEvent, ButtonEvents, InputSampler, RawLevels};

/// Direction of a Prev/Next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Prev,
    Next,
}
