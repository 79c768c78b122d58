//! Mode controller
//!
//! The single owned `ControllerState` advanced once per control cycle by
//! `tick`. The controller never touches hardware: it returns the outputs
//! to apply and an optional sound to play, and exposes a `StatusView` for
//! the display.

pub mod actuators;
pub mod cycle;
pub mod view;

pub use actuators::ActuatorState;
pub use cycle::{Commands, ControllerState, SensorReadings, Transition};
pub use view::StatusView;
