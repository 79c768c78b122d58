//! RP2040 board glue
//!
//! Wraps embassy-rp peripherals in the uvbox-hal and driver traits.
//!
//! Pin assignments (reference board):
//! - GPIO2: lid switch (pull-up, LOW = closed)
//! - GPIO3: UV lamp
//! - GPIO4-7: On, Prev, Next, Set buttons (pull-up, active low)
//! - GPIO8: fan
//! - GPIO9: buzzer (PWM slice 4, channel B)
//! - GPIO11/12: red/green LEDs
//! - GPIO16/17: I2C0 SDA/SCL to the SSD1306
//! - GPIO26: thermistor (ADC0)

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;

use uvbox_display::TextDisplay;
use uvbox_drivers::buzzer::Buzzer;
use uvbox_drivers::input::{ButtonBank, LidSwitch};
use uvbox_drivers::output::ActuatorBank;
use uvbox_drivers::sensor::{AdcReader, Ntc10kSensor};
use uvbox_hal::{InputPin, OutputPin};

use crate::ssd1306::Ssd1306;
use crate::tone::PwmTone;

/// Thermistor pull-up (ohms)
pub const THERMISTOR_PULLUP_OHMS: u32 = 10_000;

/// Push-pull GPIO output
pub struct RpOutput(pub Output<'static>);

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// GPIO input
pub struct RpInput(pub Input<'static>);

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// One ADC channel read in blocking mode
pub struct RpAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl RpAdc {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for RpAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.adc.blocking_read(&mut self.channel).map_err(|_| ())
    }
}

/// OLED on I2C0
pub type Oled = Ssd1306<I2c<'static, I2C0, i2c::Blocking>>;

/// Everything the control task drives
pub struct Board {
    pub buttons: ButtonBank<RpInput>,
    pub lid: LidSwitch<RpInput>,
    pub thermistor: Ntc10kSensor<RpAdc>,
    pub outputs: ActuatorBank<RpOutput>,
    pub display: TextDisplay<Oled>,
    pub buzzer: Buzzer<PwmTone, Delay>,
}
