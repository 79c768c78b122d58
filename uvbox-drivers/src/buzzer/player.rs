//! Blocking pattern player

use embedded_hal::delay::DelayNs;
use uvbox_core::config::BuzzerPattern;
use uvbox_core::traits::Sound;

use super::pattern::tones;

/// Square-wave output driving the buzzer
pub trait ToneOutput {
    /// Start a tone at `freq_hz`
    fn start(&mut self, freq_hz: u32);

    /// Silence the output
    fn stop(&mut self);
}

/// Buzzer playing `BuzzerPattern`s with a blocking delay
pub struct Buzzer<T, D> {
    output: T,
    delay: D,
}

impl<T: ToneOutput, D: DelayNs> Buzzer<T, D> {
    /// Create a buzzer; the output starts silent
    pub fn new(mut output: T, delay: D) -> Self {
        output.stop();
        Self { output, delay }
    }
}

impl<T: ToneOutput, D: DelayNs> Sound for Buzzer<T, D> {
    fn play(&mut self, pattern: BuzzerPattern) {
        for tone in tones(pattern) {
            self.output.start(tone.freq_hz);
            self.delay.delay_ms(tone.on_ms);
            self.output.stop();
            let gap = tone.gap_ms();
            if gap > 0 {
                self.delay.delay_ms(gap);
            }
        }
    }
}
