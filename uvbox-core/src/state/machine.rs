//! State machine definition
//!
//! All lamp, fan, LED and sound behavior is a function of the current
//! mode and an event.

use super::events::Event;
use crate::input::{Button, Direction};
use crate::safety::SafetyStatus;

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Ready; preset selection visible
    #[default]
    Idle,
    /// Lamp on, exposure timer counting down
    Running,
    /// Exposure completed; waiting for acknowledgement
    Done,
    /// Preset selection screen of the settings flow
    Edit,
    /// Settings menu with the selected entry
    Menu(MenuItem),
}

/// Entries of the settings menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Buzzer,
    Lid,
    Fan,
    TemperatureLimit,
}

impl MenuItem {
    /// All entries in display order
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Buzzer,
        MenuItem::Lid,
        MenuItem::Fan,
        MenuItem::TemperatureLimit,
    ];

    /// Entry selected when the menu opens
    pub const FIRST: MenuItem = MenuItem::Buzzer;

    /// The entry after this one, `None` for the last
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Position in the menu
    pub fn index(self) -> usize {
        match self {
            MenuItem::Buzzer => 0,
            MenuItem::Lid => 1,
            MenuItem::Fan => 2,
            MenuItem::TemperatureLimit => 3,
        }
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Buzzer => "Buzzer",
            MenuItem::Lid => "Lid",
            MenuItem::Fan => "Fan",
            MenuItem::TemperatureLimit => "Limit",
        }
    }
}

/// Why a session ended early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AbortReason {
    /// On pressed while running
    User,
    /// Interlock violated while running
    Interlock(SafetyStatus),
}

/// What the controller does in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Start a session with the selected preset
    StartSession,
    /// Start requested while an interlock is violated
    StartRefused(SafetyStatus),
    /// End the session early, lamp off, no sound
    Abort(AbortReason),
    /// Exposure finished; play the completion sound
    Complete,
    /// Leave the Done screen
    Acknowledge,
    /// Open the preset selection screen
    EnterEdit,
    /// Open the settings menu at its first entry
    EnterMenu,
    /// Move to the given menu entry
    NextMenuItem(MenuItem),
    /// Leave the settings flow
    ExitSettings,
    /// Move the preset cursor
    MoveCursor(Direction),
    /// Change the value of a menu entry
    AdjustSetting(MenuItem, Direction),
    /// Event has no effect in this mode
    Ignore,
}

impl Action {
    /// Mode the controller is in after applying this action from `from`
    pub fn next_mode(self, from: Mode) -> Mode {
        match self {
            Action::StartSession => Mode::Running,
            Action::Abort(_) | Action::Acknowledge | Action::ExitSettings => Mode::Idle,
            Action::Complete => Mode::Done,
            Action::EnterEdit => Mode::Edit,
            Action::EnterMenu => Mode::Menu(MenuItem::FIRST),
            Action::NextMenuItem(item) => Mode::Menu(item),
            Action::StartRefused(_)
            | Action::MoveCursor(_)
            | Action::AdjustSetting(..)
            | Action::Ignore => from,
        }
    }
}

impl Mode {
    /// Check if the UV lamp may be on in this mode
    pub fn lamp_allowed(&self) -> bool {
        matches!(self, Mode::Running)
    }

    /// Check if a run session exists in this mode
    pub fn has_session(&self) -> bool {
        matches!(self, Mode::Running | Mode::Done)
    }

    /// Resolve the action for an event
    ///
    /// This is the transition table. `status` is this cycle's safety
    /// evaluation and guards session start.
    pub fn action(self, event: Event, status: SafetyStatus) -> Action {
        use Button::*;
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Idle transitions
            (Idle, Pressed(On)) if status.is_ok() => Action::StartSession,
            (Idle, Pressed(On)) => Action::StartRefused(status),
            (Idle, Pressed(Set)) => Action::EnterEdit,
            (Idle | Edit, Pressed(button @ (Prev | Next))) => match button.direction() {
                Some(direction) => Action::MoveCursor(direction),
                None => Action::Ignore,
            },

            // Running transitions
            (Running, SafetyFault(fault)) if !fault.is_ok() => {
                Action::Abort(AbortReason::Interlock(fault))
            }
            (Running, Pressed(On)) => Action::Abort(AbortReason::User),
            (Running, TimerExpired) => Action::Complete,

            // Done transitions
            (Done, Pressed(On)) => Action::Acknowledge,

            // Edit transitions
            (Edit, Pressed(Set)) => Action::EnterMenu,
            (Edit, Pressed(On)) => Action::ExitSettings,

            // Menu transitions
            (Menu(item), Pressed(button @ (Prev | Next))) => match button.direction() {
                Some(direction) => Action::AdjustSetting(item, direction),
                None => Action::Ignore,
            },
            (Menu(item), Pressed(Set)) => match item.next() {
                Some(next) => Action::NextMenuItem(next),
                None => Action::ExitSettings,
            },
            (Menu(_), Pressed(On)) => Action::ExitSettings,

            // Default: no effect
            _ => Action::Ignore,
        }
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: Event, status: SafetyStatus) -> Self {
        self.action(event, status).next_mode(self)
    }
}
