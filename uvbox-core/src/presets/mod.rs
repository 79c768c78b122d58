//! Exposure presets
//!
//! Ordered, fixed-capacity list of durations with a selection cursor.

pub mod store;

pub use store::PresetStore;
