//! Status screen layout
//!
//! Turns a `StatusView` into four lines of text. Layout per mode:
//!
//! ```text
//! Idle              Running        Done          Edit            Menu
//! Idle Preset: 30s  RUN 26s        DONE 30s      Edit: 30s       Settings:
//! Preset 2/10       of 30s         ON: back      Preset 2/10     > Buzzer: Triple
//! ! LID OPEN        Temp 41C                     SET: settings     Lid: On
//!                                                                  Fan: Timer
//! ```

use core::fmt::Write;

use heapless::String;
use uvbox_core::controller::StatusView;
use uvbox_core::safety::SafetyStatus;
use uvbox_core::state::{MenuItem, Mode};

use crate::screen::{Screen, LINE_LEN, SCREEN_ROWS};

type Line = String<LINE_LEN>;

/// Menu rows visible below the title
const MENU_WINDOW: usize = SCREEN_ROWS - 1;

/// Lay out `view` into `screen`
pub fn render_view(view: &StatusView, screen: &mut Screen) {
    screen.clear();

    match view.mode {
        Mode::Idle => {
            screen.set_line(0, &line(format_args!("Idle Preset: {}s", view.preset_s)));
            screen.set_line(1, &preset_position(view));
            if let Some(alert) = view.alert {
                screen.set_line(2, alert_text(alert));
            }
        }
        Mode::Running => {
            let remaining = view.remaining_s.unwrap_or(0);
            let duration = view.session_s.unwrap_or(view.preset_s);
            screen.set_line(0, &line(format_args!("RUN {}s", remaining)));
            screen.set_line(1, &line(format_args!("of {}s", duration)));
            match view.temperature_c {
                Some(t) => screen.set_line(2, &line(format_args!("Temp {}C", t))),
                None => screen.set_line(2, "Temp --"),
            }
        }
        Mode::Done => {
            let duration = view.session_s.unwrap_or(view.preset_s);
            screen.set_line(0, &line(format_args!("DONE {}s", duration)));
            screen.set_line(1, "ON: back");
        }
        Mode::Edit => {
            screen.set_line(0, &line(format_args!("Edit: {}s", view.preset_s)));
            screen.set_line(1, &preset_position(view));
            screen.set_line(2, "SET: settings");
        }
        Mode::Menu(selected) => {
            screen.set_line(0, "Settings:");
            let first = selected.index().saturating_sub(MENU_WINDOW - 1);
            let visible = MenuItem::ALL.iter().skip(first).take(MENU_WINDOW);
            for (row, item) in visible.enumerate() {
                screen.set_line(row + 1, &menu_entry(view, *item, *item == selected));
            }
        }
    }
}

fn line(args: core::fmt::Arguments<'_>) -> Line {
    let mut out = Line::new();
    // Overflow truncates
    let _ = out.write_fmt(args);
    out
}

fn preset_position(view: &StatusView) -> Line {
    line(format_args!(
        "Preset {}/{}",
        u16::from(view.preset_index) + 1,
        view.preset_count
    ))
}

fn alert_text(alert: SafetyStatus) -> &'static str {
    match alert {
        SafetyStatus::LidOpen => "! LID OPEN",
        SafetyStatus::OverTemp => "! OVER TEMP",
        SafetyStatus::Ok => "",
    }
}

fn menu_entry(view: &StatusView, item: MenuItem, selected: bool) -> Line {
    let marker = if selected { '>' } else { ' ' };
    let safety = &view.safety;
    match item {
        MenuItem::Buzzer => line(format_args!(
            "{} {}: {}",
            marker,
            item.label(),
            safety.buzzer_pattern.label()
        )),
        MenuItem::Lid => line(format_args!(
            "{} {}: {}",
            marker,
            item.label(),
            if safety.lid_required { "On" } else { "Off" }
        )),
        MenuItem::Fan => line(format_args!(
            "{} {}: {}",
            marker,
            item.label(),
            safety.fan_policy.label()
        )),
        MenuItem::TemperatureLimit => line(format_args!(
            "{} {}: {}C",
            marker,
            item.label(),
            safety.temperature_limit_c
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uvbox_core::config::SafetyConfig;

    fn view(mode: Mode) -> StatusView {
        StatusView {
            mode,
            remaining_s: None,
            session_s: None,
            preset_s: 30,
            preset_index: 1,
            preset_count: 10,
            safety: SafetyConfig::default(),
            alert: None,
            status: SafetyStatus::Ok,
            temperature_c: Some(24),
        }
    }

    fn rendered(view: &StatusView) -> Screen {
        let mut screen = Screen::new();
        render_view(view, &mut screen);
        screen
    }

    #[test]
    fn test_idle() {
        let screen = rendered(&view(Mode::Idle));
        assert_eq!(screen.get_line(0), Some("Idle Preset: 30s"));
        assert_eq!(screen.get_line(1), Some("Preset 2/10"));
        assert_eq!(screen.get_line(2), Some(""));
    }

    #[test]
    fn test_idle_alert() {
        let mut v = view(Mode::Idle);
        v.alert = Some(SafetyStatus::LidOpen);
        assert_eq!(rendered(&v).get_line(2), Some("! LID OPEN"));

        v.alert = Some(SafetyStatus::OverTemp);
        assert_eq!(rendered(&v).get_line(2), Some("! OVER TEMP"));
    }

    #[test]
    fn test_running() {
        let mut v = view(Mode::Running);
        v.remaining_s = Some(26);
        v.session_s = Some(30);
        let screen = rendered(&v);
        assert_eq!(screen.get_line(0), Some("RUN 26s"));
        assert_eq!(screen.get_line(1), Some("of 30s"));
        assert_eq!(screen.get_line(2), Some("Temp 24C"));

        v.temperature_c = None;
        assert_eq!(rendered(&v).get_line(2), Some("Temp --"));
    }

    #[test]
    fn test_done() {
        let mut v = view(Mode::Done);
        v.session_s = Some(10);
        let screen = rendered(&v);
        assert_eq!(screen.get_line(0), Some("DONE 10s"));
        assert_eq!(screen.get_line(1), Some("ON: back"));
    }

    #[test]
    fn test_edit() {
        let screen = rendered(&view(Mode::Edit));
        assert_eq!(screen.get_line(0), Some("Edit: 30s"));
        assert_eq!(screen.get_line(1), Some("Preset 2/10"));
        assert_eq!(screen.get_line(2), Some("SET: settings"));
    }

    #[test]
    fn test_menu_first_entry() {
        let screen = rendered(&view(Mode::Menu(MenuItem::Buzzer)));
        assert_eq!(screen.get_line(0), Some("Settings:"));
        assert_eq!(screen.get_line(1), Some("> Buzzer: Triple"));
        assert_eq!(screen.get_line(2), Some("  Lid: On"));
        assert_eq!(screen.get_line(3), Some("  Fan: Timer"));
    }

    #[test]
    fn test_menu_scrolls_to_last_entry() {
        let screen = rendered(&view(Mode::Menu(MenuItem::TemperatureLimit)));
        assert_eq!(screen.get_line(1), Some("  Lid: On"));
        assert_eq!(screen.get_line(2), Some("  Fan: Timer"));
        assert_eq!(screen.get_line(3), Some("> Limit: 60C"));
    }

    #[test]
    fn test_lines_fit() {
        let mut v = view(Mode::Idle);
        v.preset_s = u16::MAX;
        v.preset_index = 9;
        for line in rendered(&v).lines() {
            assert!(line.len() <= LINE_LEN);
        }
    }
}
