//! Control loop task
//!
//! Runs one controller cycle per tick:
//! 1. Sample buttons, lid and thermistor
//! 2. Advance the controller
//! 3. Drive the outputs, then the display
//! 4. Play the completion sound, if any
//!
//! The buzzer blocks; a melody delays the next cycle by its length.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use uvbox_core::controller::{ControllerState, SensorReadings};
use uvbox_core::input::{ButtonEvent, InputSampler};
use uvbox_core::state::{AbortReason, Action};
use uvbox_core::traits::{LidSensor, SensorError, Sound, StatusDisplay, TemperatureSensor};

use crate::board::Board;

/// Control task - owns the controller and every peripheral it drives
#[embassy_executor::task]
pub async fn control_task(mut board: Board, mut controller: ControllerState, cycle_ms: u16) {
    info!("Control task started ({}ms cycle)", cycle_ms);

    let mut sampler = InputSampler::new();
    let mut last_sensor_error: Option<SensorError> = None;
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(cycle_ms)));

    // Boot state: everything off, Idle screen
    board.outputs.apply(controller.actuators());
    if let Err(e) = board.display.render(&controller.view(now_ms())) {
        warn!("Display error: {}", e);
    }

    loop {
        ticker.next().await;
        let now_ms = now_ms();

        let events = sampler.sample(board.buttons.read());
        for ButtonEvent::Pressed(button) in events.iter() {
            debug!("Button pressed: {}", button);
        }

        let temperature_c = match board.thermistor.temperature_c() {
            Ok(t) => {
                if last_sensor_error.take().is_some() {
                    info!("Thermistor recovered");
                }
                Some(t)
            }
            Err(e) => {
                if last_sensor_error != Some(e) {
                    warn!("Thermistor read failed: {}", e);
                    last_sensor_error = Some(e);
                }
                None
            }
        };
        let readings = SensorReadings::new(board.lid.is_closed(), temperature_c);
        trace!("Readings: {}", readings);

        let cmds = controller.tick(events, readings, now_ms);

        if let Some(fault) = cmds.refused {
            warn!("Start refused: {}", fault);
        }
        if let Some(t) = cmds.transition {
            info!("Mode: {} -> {} ({})", t.from, t.to, t.action);
            if let Action::Abort(AbortReason::Interlock(fault)) = t.action {
                warn!("Safety abort: {}", fault);
            }
        }

        board.outputs.apply(cmds.actuators);

        if let Err(e) = board.display.render(&controller.view(now_ms)) {
            warn!("Display error: {}", e);
        }

        if let Some(pattern) = cmds.sound {
            debug!("Playing {}", pattern);
            board.buzzer.play(pattern);
        }
    }
}

fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
