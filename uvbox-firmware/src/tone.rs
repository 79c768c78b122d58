//! PWM tone output for the buzzer

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::traits::ToFixed;

use uvbox_drivers::buzzer::ToneOutput;

/// Clock divider; keeps `top` within 16 bits down to ~30 Hz at 125 MHz
const PWM_DIVIDER: u8 = 64;

/// Square wave on PWM channel B
pub struct PwmTone {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl PwmTone {
    pub fn new(pwm: Pwm<'static>) -> Self {
        let mut config = PwmConfig::default();
        config.divider = PWM_DIVIDER.to_fixed();
        config.compare_b = 0;
        Self { pwm, config }
    }

    /// Counter wrap value for a tone frequency
    fn top_for(freq_hz: u32) -> u16 {
        let counter_hz = clk_sys_freq() / u32::from(PWM_DIVIDER);
        let top = (counter_hz / freq_hz.max(1)).saturating_sub(1);
        top.min(u32::from(u16::MAX)) as u16
    }
}

impl ToneOutput for PwmTone {
    fn start(&mut self, freq_hz: u32) {
        let top = Self::top_for(freq_hz);
        self.config.top = top;
        // 50% duty
        self.config.compare_b = top / 2;
        self.pwm.set_config(&self.config);
    }

    fn stop(&mut self) {
        self.config.compare_b = 0;
        self.pwm.set_config(&self.config);
    }
}
