//! Run session and remaining-time arithmetic

/// Milliseconds per second
const MS_PER_S: u32 = 1000;

/// One activation of the lamp
///
/// Exists while the box is Running or Done. The duration is copied from
/// the selected preset at start and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunSession {
    /// Monotonic timestamp at activation (ms since boot)
    start_ms: u32,
    /// Exposure duration (seconds)
    duration_s: u16,
}

impl RunSession {
    /// Start a session at `now_ms`
    pub fn start(now_ms: u32, duration_s: u16) -> Self {
        Self {
            start_ms: now_ms,
            duration_s,
        }
    }

    /// Activation timestamp (ms)
    pub fn start_ms(&self) -> u32 {
        self.start_ms
    }

    /// Exposure duration (seconds)
    pub fn duration_s(&self) -> u16 {
        self.duration_s
    }

    /// Whole seconds elapsed since activation
    ///
    /// Uses wrapping arithmetic so a millisecond counter wrap does not
    /// disturb a running session.
    pub fn elapsed_s(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.start_ms) / MS_PER_S
    }

    /// Seconds left, floored at zero
    pub fn remaining_s(&self, now_ms: u32) -> u16 {
        let remaining = u32::from(self.duration_s).saturating_sub(self.elapsed_s(now_ms));
        remaining as u16
    }

    /// Check if the exposure time is used up
    pub fn is_expired(&self, now_ms: u32) -> bool {
        self.remaining_s(now_ms) == 0
    }
}

/// Seconds left in `session` at `now_ms`
pub fn remaining(now_ms: u32, session: &RunSession) -> u16 {
    session.remaining_s(now_ms)
}

/// Check if `session` has expired at `now_ms`
pub fn is_expired(now_ms: u32, session: &RunSession) -> bool {
    session.is_expired(now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_counts_down() {
        let session = RunSession::start(1_000, 10);
        assert_eq!(remaining(1_000, &session), 10);
        assert_eq!(remaining(1_999, &session), 10);
        assert_eq!(remaining(2_000, &session), 9);
        assert_eq!(remaining(10_999, &session), 1);
        assert!(!is_expired(10_999, &session));
    }

    #[test]
    fn test_expires_exactly_at_duration() {
        let session = RunSession::start(0, 10);
        assert!(!is_expired(9_999, &session));
        assert!(is_expired(10_000, &session));
        assert_eq!(remaining(10_000, &session), 0);
    }

    #[test]
    fn test_remaining_never_negative() {
        let session = RunSession::start(0, 5);
        assert_eq!(remaining(60_000, &session), 0);
        assert!(is_expired(u32::MAX, &session));
    }

    #[test]
    fn test_counter_wrap() {
        let start = u32::MAX - 1_500;
        let session = RunSession::start(start, 30);
        let now = start.wrapping_add(3_000);
        assert_eq!(session.elapsed_s(now), 3);
        assert_eq!(remaining(now, &session), 27);
    }
}
