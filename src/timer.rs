// SPDX-License-Identifier: MPL-2.0
//! Per-toast countdown with pause/resume accounting.
//!
//! The countdown never reads the wall clock itself: every operation takes
//! an explicit `now`, so tests can drive it with synthetic instants. Elapsed
//! time is computed as `now - started_at - paused_total`, which makes
//! pause/resume cycles compose additively: remaining time only changes by
//! genuinely elapsed unpaused time.

use std::time::{Duration, Instant};

/// Countdown for one toast.
///
/// A zero-duration countdown is inert: it never expires and reports no
/// progress.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: Duration,
    started_at: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
    expired: bool,
}

impl Countdown {
    /// Starts tracking from `now`.
    #[must_use]
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            duration,
            started_at: now,
            paused_at: None,
            paused_total: Duration::ZERO,
            expired: false,
        }
    }

    /// Returns true when this countdown can never expire.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.duration.is_zero()
    }

    /// Returns true while the countdown is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Returns true once the countdown has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    fn elapsed(&self, now: Instant) -> Duration {
        // While paused, accounting is frozen at the pause instant.
        let reference = self.paused_at.unwrap_or(now);
        reference
            .saturating_duration_since(self.started_at)
            .saturating_sub(self.paused_total)
    }

    /// Unpaused time left before expiry. `None` for inert countdowns.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if self.is_inert() {
            return None;
        }
        Some(self.duration.saturating_sub(self.elapsed(now)))
    }

    /// Fraction of the duration left, in `0.0..=1.0`. `None` for inert
    /// countdowns. Frozen while paused.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> Option<f32> {
        let remaining = self.remaining(now)?;
        let fraction = remaining.as_secs_f32() / self.duration.as_secs_f32();
        Some(fraction.clamp(0.0, 1.0))
    }

    /// Advances the countdown; returns true exactly once, on the tick where
    /// the remaining time reaches zero. Inert, paused, and already-expired
    /// countdowns never report expiry.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.expired || self.is_inert() || self.is_paused() {
            return false;
        }
        if self.elapsed(now) >= self.duration {
            self.expired = true;
            return true;
        }
        false
    }

    /// Freezes the accounting at `now`. No-op when already paused, inert,
    /// or expired.
    pub fn pause(&mut self, now: Instant) {
        if self.is_inert() || self.expired || self.paused_at.is_some() {
            return;
        }
        self.paused_at = Some(now);
    }

    /// Resumes from a pause, adding the pause interval to the paused total
    /// so the remaining time is preserved exactly. No-op when not paused.
    pub fn resume(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += now.saturating_duration_since(paused_at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn zero_duration_is_inert() {
        let base = Instant::now();
        let mut countdown = Countdown::start(Duration::ZERO, base);

        assert!(countdown.is_inert());
        assert!(countdown.remaining(base + ms(10_000)).is_none());
        assert!(countdown.remaining_fraction(base + ms(10_000)).is_none());
        assert!(!countdown.tick(base + ms(100_000)));
        assert!(!countdown.is_expired());
    }

    #[test]
    fn expires_exactly_once() {
        let base = Instant::now();
        let mut countdown = Countdown::start(ms(100), base);

        assert!(!countdown.tick(base + ms(99)));
        assert!(countdown.tick(base + ms(100)));
        assert!(countdown.is_expired());
        assert!(!countdown.tick(base + ms(101)));
    }

    #[test]
    fn fraction_decreases_from_one_to_zero() {
        let base = Instant::now();
        let countdown = Countdown::start(ms(1000), base);

        assert_eq!(countdown.remaining_fraction(base), Some(1.0));
        let halfway = countdown.remaining_fraction(base + ms(500)).unwrap();
        assert!((halfway - 0.5).abs() < 0.01);
        assert_eq!(countdown.remaining_fraction(base + ms(2000)), Some(0.0));
    }

    #[test]
    fn pause_freezes_remaining_time() {
        let base = Instant::now();
        let mut countdown = Countdown::start(ms(1000), base);

        countdown.pause(base + ms(400));
        assert!(countdown.is_paused());
        // Wall-clock keeps moving; remaining does not.
        assert_eq!(countdown.remaining(base + ms(5000)), Some(ms(600)));
        assert!(!countdown.tick(base + ms(5000)));
    }

    #[test]
    fn resume_preserves_remaining_exactly() {
        let base = Instant::now();
        let mut countdown = Countdown::start(ms(1000), base);

        countdown.pause(base + ms(400));
        countdown.resume(base + ms(2400));
        assert_eq!(countdown.remaining(base + ms(2400)), Some(ms(600)));

        // Expiry is shifted by the full pause interval.
        assert!(!countdown.tick(base + ms(2999)));
        assert!(countdown.tick(base + ms(3000)));
    }

    #[test]
    fn pause_cycles_compose_additively() {
        let base = Instant::now();
        let mut countdown = Countdown::start(ms(1000), base);

        countdown.pause(base + ms(100));
        countdown.resume(base + ms(600)); // paused 500
        countdown.pause(base + ms(800)); // 300 elapsed total
        countdown.resume(base + ms(1800)); // paused 1500 total

        assert_eq!(countdown.remaining(base + ms(1800)), Some(ms(700)));
        assert!(countdown.tick(base + ms(2500)));
    }

    #[test]
    fn redundant_pause_and_resume_are_no_ops() {
        let base = Instant::now();
        let mut countdown = Countdown::start(ms(1000), base);

        countdown.resume(base + ms(100));
        assert!(!countdown.is_paused());

        countdown.pause(base + ms(200));
        countdown.pause(base + ms(500));
        // Second pause must not move the freeze point.
        assert_eq!(countdown.remaining(base + ms(900)), Some(ms(800)));
    }

    #[test]
    fn pause_after_expiry_is_ignored() {
        let base = Instant::now();
        let mut countdown = Countdown::start(ms(100), base);

        assert!(countdown.tick(base + ms(100)));
        countdown.pause(base + ms(150));
        assert!(!countdown.is_paused());
    }
}
