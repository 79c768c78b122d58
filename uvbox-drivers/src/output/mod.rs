//! Lamp, fan and indicator outputs

pub mod actuators;

pub use actuators::{ActuatorBank, OutputChannel};
