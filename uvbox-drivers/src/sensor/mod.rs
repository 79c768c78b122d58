//! Temperature sensor implementations

pub mod ntc10k;

pub use ntc10k::{AdcReader, Ntc10kSensor};
