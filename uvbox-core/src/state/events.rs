//! Events that trigger state transitions

use crate::input::Button;
use crate::safety::SafetyStatus;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A front-panel button was pressed this cycle
    Pressed(Button),
    /// An interlock is violated (raised only while Running)
    SafetyFault(SafetyStatus),
    /// The session's exposure time is used up (raised only while Running)
    TimerExpired,
}

impl Event {
    /// Check if this event is user-initiated
    pub fn is_user_event(&self) -> bool {
        matches!(self, Event::Pressed(_))
    }
}
