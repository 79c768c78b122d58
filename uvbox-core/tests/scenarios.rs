//! End-to-end control cycle scenarios

use uvbox_core::config::{BuzzerPattern, FanPolicy, SafetyConfig};
use uvbox_core::controller::{ActuatorState, ControllerState, SensorReadings};
use uvbox_core::input::{Button, InputSampler, RawLevels};
use uvbox_core::presets::PresetStore;
use uvbox_core::safety::SafetyStatus;
use uvbox_core::state::Mode;

const CYCLE_MS: u32 = 50;

/// Drives a controller through the same sampler the firmware uses
struct Harness {
    sampler: InputSampler,
    controller: ControllerState,
    now_ms: u32,
    lid_closed: bool,
    temperature_c: Option<f32>,
}

impl Harness {
    fn new(presets: &[u16]) -> Self {
        Self::with_safety(presets, SafetyConfig::default())
    }

    fn with_safety(presets: &[u16], safety: SafetyConfig) -> Self {
        Self {
            sampler: InputSampler::new(),
            controller: ControllerState::new(PresetStore::new(presets).unwrap(), safety),
            now_ms: 0,
            lid_closed: true,
            temperature_c: Some(25.0),
        }
    }

    fn cycle(&mut self, levels: RawLevels) -> uvbox_core::controller::Commands {
        let events = self.sampler.sample(levels);
        let readings = SensorReadings::new(self.lid_closed, self.temperature_c);
        let cmds = self.controller.tick(events, readings, self.now_ms);
        self.now_ms += CYCLE_MS;
        cmds
    }

    /// Press and release a button over two cycles
    fn press(&mut self, button: Button) {
        self.cycle(RawLevels::only(button));
        self.cycle(RawLevels::RELEASED);
    }

    /// Idle cycles until `until_ms`
    fn run_until(&mut self, until_ms: u32) -> Option<BuzzerPattern> {
        let mut sound = None;
        while self.now_ms <= until_ms {
            if let Some(pattern) = self.cycle(RawLevels::RELEASED).sound {
                sound = Some(pattern);
            }
        }
        sound
    }
}

#[test]
fn test_full_exposure() {
    let mut box_ = Harness::new(&[10, 30, 60]);

    box_.press(Button::On);
    assert_eq!(box_.controller.mode(), Mode::Running);
    assert!(box_.controller.actuators().lamp_on);
    assert!(box_.controller.actuators().fan_on);

    let sound = box_.run_until(9_950);
    assert_eq!(sound, None);
    assert_eq!(box_.controller.mode(), Mode::Running);

    let sound = box_.run_until(10_000);
    assert_eq!(sound, Some(BuzzerPattern::Triple));
    assert_eq!(box_.controller.mode(), Mode::Done);

    let out = box_.controller.actuators();
    assert!(!out.lamp_on);
    assert!(!out.fan_on);
    assert!(out.green_led_on);

    box_.press(Button::On);
    assert_eq!(box_.controller.mode(), Mode::Idle);
    assert_eq!(box_.controller.actuators(), ActuatorState::OFF);
}

#[test]
fn test_lid_opened_mid_exposure() {
    let mut box_ = Harness::new(&[10, 30, 60]);
    box_.press(Button::Next);
    box_.press(Button::Next);
    assert_eq!(box_.controller.presets().current(), 60);

    box_.press(Button::On);
    let started_ms = box_.now_ms - CYCLE_MS * 2;
    assert_eq!(box_.controller.session().map(|s| s.duration_s()), Some(60));
    box_.run_until(started_ms + 2_950);

    box_.lid_closed = false;
    let cmds = box_.cycle(RawLevels::RELEASED);

    assert_eq!(box_.controller.mode(), Mode::Idle);
    assert_eq!(cmds.actuators, ActuatorState::OFF);
    assert_eq!(cmds.sound, None);
    assert_eq!(box_.controller.alert(), Some(SafetyStatus::LidOpen));

    // Closing the lid does not resume the exposure
    box_.lid_closed = true;
    assert_eq!(box_.run_until(started_ms + 70_000), None);
    assert_eq!(box_.controller.mode(), Mode::Idle);
}

#[test]
fn test_lid_abort_stops_always_on_fan() {
    let safety = SafetyConfig {
        fan_policy: FanPolicy::Always,
        ..Default::default()
    };
    let mut box_ = Harness::with_safety(&[60], safety);
    assert!(!box_.controller.actuators().fan_on);

    box_.press(Button::On);
    assert!(box_.controller.actuators().fan_on);
    box_.run_until(3_000);

    box_.lid_closed = false;
    let cmds = box_.cycle(RawLevels::RELEASED);
    assert_eq!(box_.controller.mode(), Mode::Idle);
    assert_eq!(cmds.actuators, ActuatorState::OFF);
}

#[test]
fn test_over_temperature_mid_exposure() {
    let mut box_ = Harness::new(&[60]);
    box_.press(Button::On);
    box_.run_until(5_000);

    box_.temperature_c = Some(60.0);
    box_.cycle(RawLevels::RELEASED);
    assert_eq!(box_.controller.mode(), Mode::Idle);
    assert_eq!(box_.controller.alert(), Some(SafetyStatus::OverTemp));

    box_.temperature_c = Some(30.0);
    box_.press(Button::Set);
    assert_eq!(box_.controller.alert(), None);
}

#[test]
fn test_cursor_clamps_at_first_preset() {
    let mut box_ = Harness::new(&[10, 30, 60]);
    box_.press(Button::Prev);
    assert_eq!(box_.controller.presets().cursor(), 0);
    assert_eq!(box_.controller.mode(), Mode::Idle);
}

#[test]
fn test_cursor_clamps_at_last_preset() {
    let mut box_ = Harness::new(&[10, 30, 60]);
    for _ in 0..5 {
        box_.press(Button::Next);
    }
    assert_eq!(box_.controller.presets().cursor(), 2);
    assert_eq!(box_.controller.presets().current(), 60);
}

#[test]
fn test_held_button_acts_once() {
    let mut box_ = Harness::new(&[10, 30, 60]);
    for _ in 0..20 {
        box_.cycle(RawLevels::only(Button::Next));
    }
    assert_eq!(box_.controller.presets().cursor(), 1);
}

#[test]
fn test_held_on_does_not_restart() {
    let mut box_ = Harness::new(&[10]);
    box_.cycle(RawLevels::only(Button::On));
    assert_eq!(box_.controller.mode(), Mode::Running);

    // Holding On through the whole exposure neither aborts nor restarts
    while box_.now_ms <= 12_000 {
        box_.cycle(RawLevels::only(Button::On));
    }
    assert_eq!(box_.controller.mode(), Mode::Done);
}

#[test]
fn test_on_in_done_always_returns_to_idle() {
    for wait_ms in [10_000, 60_000, 600_000] {
        let mut box_ = Harness::new(&[10]);
        box_.press(Button::On);
        box_.run_until(wait_ms);
        assert_eq!(box_.controller.mode(), Mode::Done);

        box_.press(Button::On);
        assert_eq!(box_.controller.mode(), Mode::Idle);
    }
}

#[test]
fn test_start_refused_until_lid_closed() {
    let mut box_ = Harness::new(&[10]);
    box_.lid_closed = false;
    box_.press(Button::On);
    assert_eq!(box_.controller.mode(), Mode::Idle);
    assert_eq!(box_.controller.alert(), Some(SafetyStatus::LidOpen));

    box_.lid_closed = true;
    box_.press(Button::On);
    assert_eq!(box_.controller.mode(), Mode::Running);
    assert_eq!(box_.controller.alert(), None);
}

#[test]
fn test_selected_preset_used_for_session() {
    let mut box_ = Harness::new(&[10, 30, 60]);
    box_.press(Button::Next);
    box_.press(Button::Next);
    box_.press(Button::On);

    let session = box_.controller.session().copied();
    assert_eq!(session.map(|s| s.duration_s()), Some(60));
}

#[test]
fn test_settings_round_trip() {
    let mut box_ = Harness::new(&[10, 30, 60]);
    box_.press(Button::Set);
    assert_eq!(box_.controller.mode(), Mode::Edit);
    box_.press(Button::Next);

    // Walk through the whole menu without changing anything
    for _ in 0..5 {
        box_.press(Button::Set);
    }
    assert_eq!(box_.controller.mode(), Mode::Idle);
    assert_eq!(box_.controller.presets().current(), 30);
    assert_eq!(*box_.controller.safety(), SafetyConfig::default());
}
