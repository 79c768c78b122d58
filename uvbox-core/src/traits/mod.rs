//! Collaborator traits
//!
//! These traits define the interface between the controller and the
//! hardware-specific display, buzzer and sensor implementations.

pub mod display;
pub mod sensor;
pub mod sound;

pub use display::StatusDisplay;
pub use sensor::{LidSensor, SensorError, TemperatureSensor};
pub use sound::Sound;
