//! UV Box - UV Exposure Box Firmware
//!
//! Main firmware binary for RP2040-based UV exposure and resin curing
//! boxes. A single control task samples the front panel and interlocks,
//! runs the exposure state machine and drives the lamp, fan, LEDs,
//! display and buzzer.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use uvbox_core::config::DEFAULT_CYCLE_MS;
use uvbox_core::controller::ControllerState;
use uvbox_display::TextDisplay;
use uvbox_drivers::buzzer::Buzzer;
use uvbox_drivers::input::{ButtonBank, LidSwitch};
use uvbox_drivers::output::{ActuatorBank, OutputChannel};
use uvbox_drivers::sensor::Ntc10kSensor;

use crate::board::{Board, RpAdc, RpInput, RpOutput, THERMISTOR_PULLUP_OHMS};
use crate::ssd1306::Ssd1306;
use crate::tone::PwmTone;

mod board;
mod config;
mod ssd1306;
mod tasks;
mod tone;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("UV Box firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Outputs first, all off
    let output = |pin| OutputChannel::new_active_high(RpOutput(pin));
    let outputs = ActuatorBank::new(
        output(Output::new(p.PIN_3, Level::Low)),
        output(Output::new(p.PIN_8, Level::Low)),
        output(Output::new(p.PIN_11, Level::Low)),
        output(Output::new(p.PIN_12, Level::Low)),
    );
    info!("Outputs initialized");

    let buttons = ButtonBank::new_active_low(
        RpInput(Input::new(p.PIN_4, Pull::Up)),
        RpInput(Input::new(p.PIN_5, Pull::Up)),
        RpInput(Input::new(p.PIN_6, Pull::Up)),
        RpInput(Input::new(p.PIN_7, Pull::Up)),
    );
    let lid = LidSwitch::new_closed_low(RpInput(Input::new(p.PIN_2, Pull::Up)));

    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let therm_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let thermistor = Ntc10kSensor::new(RpAdc::new(adc, therm_channel), THERMISTOR_PULLUP_OHMS);
    info!("Inputs and ADC initialized");

    let i2c = I2c::new_blocking(p.I2C0, p.PIN_17, p.PIN_16, i2c::Config::default());
    let mut oled = Ssd1306::new(i2c);
    match oled.init() {
        Ok(()) => info!("Display initialized"),
        Err(e) => warn!("Display init failed: {}", e),
    }

    let pwm = Pwm::new_output_b(p.PWM_SLICE4, p.PIN_9, PwmConfig::default());
    let buzzer = Buzzer::new(PwmTone::new(pwm), Delay);

    let machine = config::machine_config();
    let (controller, cycle_ms) = match ControllerState::from_config(&machine) {
        Ok(controller) => (controller, machine.cycle_ms),
        Err(e) => {
            error!("Invalid machine config: {}", e);
            error!("Using default configuration");
            (ControllerState::default(), DEFAULT_CYCLE_MS)
        }
    };
    info!(
        "Configuration loaded: {} presets, {}ms cycle",
        controller.presets().len(),
        cycle_ms
    );

    let board = Board {
        buttons,
        lid,
        thermistor,
        outputs,
        display: TextDisplay::new(oled),
        buzzer,
    };

    spawner.spawn(unwrap!(tasks::control_task(board, controller, cycle_ms)));

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
