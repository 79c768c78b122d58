//! Per-cycle controller
//!
//! One call to `tick` is one control cycle: evaluate the interlocks,
//! queue this cycle's events, apply at most one mode transition and
//! derive the outputs.

use heapless::Vec;

use super::actuators::ActuatorState;
use super::view::StatusView;
use crate::config::{BuzzerPattern, ConfigError, MachineConfig, SafetyConfig};
use crate::input::{ButtonEvent, ButtonEvents, Direction};
use crate::presets::PresetStore;
use crate::safety::{self, SafetyStatus};
use crate::state::{AbortReason, Action, Event, MenuItem, Mode};
use crate::timer::RunSession;

/// Upper bound on events in one cycle: a fault, four presses, expiry
const MAX_CYCLE_EVENTS: usize = 6;

/// Sensor readings taken this cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReadings {
    /// Lid switch state
    pub lid_closed: bool,
    /// Temperature (°C), `None` if the sensor read failed
    pub temperature_c: Option<f32>,
}

impl SensorReadings {
    pub fn new(lid_closed: bool, temperature_c: Option<f32>) -> Self {
        Self {
            lid_closed,
            temperature_c,
        }
    }
}

/// A mode change taken during a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
    pub action: Action,
}

/// Output of one control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Commands {
    /// Outputs to drive
    pub actuators: ActuatorState,
    /// Sound to play after the outputs and display are updated
    pub sound: Option<BuzzerPattern>,
    /// Mode change taken this cycle, if any
    pub transition: Option<Transition>,
    /// Interlock that refused a start this cycle
    pub refused: Option<SafetyStatus>,
    /// This cycle's safety evaluation
    pub status: SafetyStatus,
}

/// Controller state owned by the control loop
#[derive(Debug, Clone)]
pub struct ControllerState {
    /// Current mode
    mode: Mode,
    /// Active session (Running and Done only)
    session: Option<RunSession>,
    /// Presets and selection cursor
    presets: PresetStore,
    /// Interlock and feedback settings
    safety: SafetyConfig,
    /// Latest safety evaluation
    status: SafetyStatus,
    /// Abort or refused-start reason shown until the next press
    alert: Option<SafetyStatus>,
    /// Latest temperature reading
    temperature_c: Option<f32>,
    /// Fan kept on after a completed session (Always policy)
    fan_held: bool,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new(PresetStore::default(), SafetyConfig::default())
    }
}

impl ControllerState {
    /// Create a controller in Idle with the cursor on the first preset
    pub fn new(presets: PresetStore, safety: SafetyConfig) -> Self {
        Self {
            mode: Mode::Idle,
            session: None,
            presets,
            safety,
            status: SafetyStatus::Ok,
            alert: None,
            temperature_c: None,
            fan_held: false,
        }
    }

    /// Create a controller from a machine configuration
    pub fn from_config(config: &MachineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let presets = PresetStore::new(&config.presets)?;
        Ok(Self::new(presets, config.safety))
    }

    /// Run one control cycle
    ///
    /// # Arguments
    /// - `events`: presses reported by the input sampler this cycle
    /// - `readings`: lid and temperature readings
    /// - `now_ms`: monotonic time (ms since boot)
    pub fn tick(&mut self, events: ButtonEvents, readings: SensorReadings, now_ms: u32) -> Commands {
        let temperature_c = readings.temperature_c.unwrap_or(f32::NAN);
        let status = safety::evaluate(readings.lid_closed, temperature_c, &self.safety);
        self.status = status;
        self.temperature_c = readings.temperature_c;

        let mut transition = None;
        let mut refused = None;
        let mut sound = None;

        for event in self.cycle_events(events, status, now_ms) {
            if event.is_user_event() {
                self.alert = None;
            }

            let from = self.mode;
            let action = from.action(event, status);
            if let Action::StartRefused(fault) = action {
                refused = Some(fault);
            }
            if let Some(pattern) = self.apply(action, now_ms) {
                sound = Some(pattern);
            }

            if self.mode != from {
                transition = Some(Transition {
                    from,
                    to: self.mode,
                    action,
                });
                break;
            }
        }

        Commands {
            actuators: self.actuators(),
            sound,
            transition,
            refused,
            status,
        }
    }

    /// Events for this cycle in priority order
    fn cycle_events(
        &self,
        events: ButtonEvents,
        status: SafetyStatus,
        now_ms: u32,
    ) -> Vec<Event, MAX_CYCLE_EVENTS> {
        let mut queue = Vec::new();
        let running = self.mode == Mode::Running;

        if running && !status.is_ok() {
            let _ = queue.push(Event::SafetyFault(status));
        }

        for ButtonEvent::Pressed(button) in events.iter() {
            let _ = queue.push(Event::Pressed(button));
        }

        if running && self.session.is_some_and(|s| s.is_expired(now_ms)) {
            let _ = queue.push(Event::TimerExpired);
        }

        queue
    }

    /// Apply an action, returning a sound to play
    fn apply(&mut self, action: Action, now_ms: u32) -> Option<BuzzerPattern> {
        let mut sound = None;

        match action {
            Action::StartSession => {
                self.session = Some(RunSession::start(now_ms, self.presets.current()));
                self.fan_held = true;
            }
            Action::StartRefused(status) => self.alert = Some(status),
            Action::Abort(reason) => {
                self.session = None;
                self.fan_held = false;
                if let AbortReason::Interlock(status) = reason {
                    self.alert = Some(status);
                }
            }
            Action::Complete => {
                let pattern = self.safety.buzzer_pattern;
                if !pattern.is_silent() {
                    sound = Some(pattern);
                }
            }
            Action::Acknowledge => self.session = None,
            Action::MoveCursor(direction) => {
                self.presets.select(direction);
            }
            Action::AdjustSetting(item, direction) => self.adjust(item, direction),
            Action::EnterEdit
            | Action::EnterMenu
            | Action::NextMenuItem(_)
            | Action::ExitSettings
            | Action::Ignore => {}
        }

        self.mode = action.next_mode(self.mode);
        sound
    }

    /// Change one setting from the menu
    fn adjust(&mut self, item: MenuItem, direction: Direction) {
        match item {
            MenuItem::Buzzer => {
                self.safety.buzzer_pattern = self.safety.buzzer_pattern.step(direction);
            }
            MenuItem::Lid => self.safety.lid_required = direction == Direction::Next,
            MenuItem::Fan => self.safety.fan_policy = self.safety.fan_policy.step(direction),
            MenuItem::TemperatureLimit => self.safety.step_temperature_limit(direction),
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Active session, if any
    pub fn session(&self) -> Option<&RunSession> {
        self.session.as_ref()
    }

    /// Presets and cursor
    pub fn presets(&self) -> &PresetStore {
        &self.presets
    }

    /// Current settings
    pub fn safety(&self) -> &SafetyConfig {
        &self.safety
    }

    /// Latest safety evaluation
    pub fn status(&self) -> SafetyStatus {
        self.status
    }

    /// Pending safety alert
    pub fn alert(&self) -> Option<SafetyStatus> {
        self.alert
    }

    /// Outputs for the current mode
    pub fn actuators(&self) -> ActuatorState {
        ActuatorState::derive(self.mode, &self.safety, self.fan_held)
    }

    /// Snapshot for the status display
    pub fn view(&self, now_ms: u32) -> StatusView {
        let remaining_s = match self.mode {
            Mode::Running => self.session.map(|s| s.remaining_s(now_ms)),
            _ => None,
        };

        StatusView {
            mode: self.mode,
            remaining_s,
            session_s: self.session.map(|s| s.duration_s()),
            preset_s: self.presets.current(),
            preset_index: self.presets.cursor() as u8,
            preset_count: self.presets.len() as u8,
            safety: self.safety,
            alert: self.alert,
            status: self.status,
            temperature_c: self
                .temperature_c
                .filter(|t| safety::is_plausible(*t))
                .map(|t| t as i16),
        }
    }
}
