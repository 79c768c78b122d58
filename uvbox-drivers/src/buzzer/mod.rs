//! Buzzer melodies
//!
//! Each `BuzzerPattern` is a short list of tones played on a PWM
//! output. Playback blocks; the control loop runs it after the outputs
//! and display have been updated.

pub mod pattern;
pub mod player;

pub use pattern::{pattern_duration_ms, tones, Tone};
pub use player::{Buzzer, ToneOutput};
