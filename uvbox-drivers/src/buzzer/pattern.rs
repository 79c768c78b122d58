//! Tone tables

use uvbox_core::config::BuzzerPattern;

/// One step of a melody
///
/// The tone sounds for `on_ms`, then the output is silent until
/// `step_ms` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Tone frequency (Hz)
    pub freq_hz: u32,
    /// Sounding time (ms)
    pub on_ms: u32,
    /// Step period, sounding time included (ms)
    pub step_ms: u32,
}

impl Tone {
    const fn new(freq_hz: u32, on_ms: u32, step_ms: u32) -> Self {
        Self {
            freq_hz,
            on_ms,
            step_ms,
        }
    }

    /// Silent time after the tone (ms)
    pub fn gap_ms(&self) -> u32 {
        self.step_ms.saturating_sub(self.on_ms)
    }
}

const SINGLE: &[Tone] = &[Tone::new(2000, 200, 250)];

const DOUBLE: &[Tone] = &[Tone::new(2000, 200, 300), Tone::new(2000, 200, 300)];

const TRIPLE: &[Tone] = &[
    Tone::new(2000, 150, 250),
    Tone::new(2000, 150, 250),
    Tone::new(2000, 150, 250),
];

const LONG: &[Tone] = &[Tone::new(1500, 800, 900)];

// Rising sweep, 1 kHz to 3 kHz
const CHIRP: &[Tone] = &[
    Tone::new(1000, 80, 100),
    Tone::new(1500, 80, 100),
    Tone::new(2000, 80, 100),
    Tone::new(2500, 80, 100),
    Tone::new(3000, 80, 100),
];

/// Tones making up a pattern, empty for `Silent`
pub fn tones(pattern: BuzzerPattern) -> &'static [Tone] {
    match pattern {
        BuzzerPattern::Silent => &[],
        BuzzerPattern::Single => SINGLE,
        BuzzerPattern::Double => DOUBLE,
        BuzzerPattern::Triple => TRIPLE,
        BuzzerPattern::Long => LONG,
        BuzzerPattern::Chirp => CHIRP,
    }
}

/// Total playback time of a pattern (ms)
pub fn pattern_duration_ms(pattern: BuzzerPattern) -> u32 {
    tones(pattern).iter().map(|t| t.step_ms).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_is_empty() {
        assert!(tones(BuzzerPattern::Silent).is_empty());
        assert_eq!(pattern_duration_ms(BuzzerPattern::Silent), 0);
    }

    #[test]
    fn test_pattern_lengths() {
        assert_eq!(tones(BuzzerPattern::Single).len(), 1);
        assert_eq!(tones(BuzzerPattern::Double).len(), 2);
        assert_eq!(tones(BuzzerPattern::Triple).len(), 3);
        assert_eq!(tones(BuzzerPattern::Chirp).len(), 5);
    }

    #[test]
    fn test_pattern_durations() {
        assert_eq!(pattern_duration_ms(BuzzerPattern::Single), 250);
        assert_eq!(pattern_duration_ms(BuzzerPattern::Double), 600);
        assert_eq!(pattern_duration_ms(BuzzerPattern::Triple), 750);
        assert_eq!(pattern_duration_ms(BuzzerPattern::Long), 900);
        assert_eq!(pattern_duration_ms(BuzzerPattern::Chirp), 500);
    }

    #[test]
    fn test_chirp_rises() {
        let chirp = tones(BuzzerPattern::Chirp);
        assert_eq!(chirp[0].freq_hz, 1000);
        assert_eq!(chirp[4].freq_hz, 3000);
        assert!(chirp.windows(2).all(|w| w[1].freq_hz - w[0].freq_hz == 500));
    }

    #[test]
    fn test_gap() {
        assert_eq!(Tone::new(2000, 150, 250).gap_ms(), 100);
        assert_eq!(Tone::new(2000, 300, 250).gap_ms(), 0);
    }
}
