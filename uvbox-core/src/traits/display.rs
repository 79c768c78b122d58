//! Status display trait

use crate::controller::StatusView;

/// Trait for the status display
///
/// Rendering the same view twice must leave the physical display
/// unchanged; implementations have no other side effects.
pub trait StatusDisplay {
    /// Error raised by the underlying display
    type Error;

    /// Show the given status
    fn render(&mut self, view: &StatusView) -> Result<(), Self::Error>;
}
