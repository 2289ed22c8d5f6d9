//! Periodic tick source.
//!
//! The ticker is clock-driven rather than thread-driven: the event loop asks
//! how long until the next tick, waits at most that long for input, then
//! polls. Time is passed in, so tests can step it by hand.

use std::time::{Duration, Instant};

/// Delay between ticks while the timer runs.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// An interval that is either enabled with a fixed delay or disabled.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    delay: Option<Duration>,
    next_due: Option<Instant>,
}

impl Ticker {
    /// A ticker that never fires until enabled.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            delay: None,
            next_due: None,
        }
    }

    /// Enable with `Some(delay)` or disable with `None`.
    ///
    /// Re-applying the current delay keeps the schedule. Any change drops the
    /// pending deadline, so nothing scheduled under the old setting can fire.
    pub fn set_delay(&mut self, delay: Option<Duration>, now: Instant) {
        if delay == self.delay {
            return;
        }
        self.delay = delay.filter(|d| !d.is_zero());
        self.next_due = self.delay.map(|d| now + d);
    }

    /// Whether ticks are currently being produced.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.delay.is_some()
    }

    /// Time left until the next tick, or `None` while disabled.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Report whether a tick is due at `now`, and schedule the next one.
    ///
    /// At most one tick is reported per call. If the caller fell more than a
    /// whole delay behind, the missed ticks are dropped and the schedule
    /// restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let (Some(delay), Some(due)) = (self.delay, self.next_due) else {
            return false;
        };
        if now < due {
            return false;
        }

        let next = due + delay;
        self.next_due = Some(if next <= now { now + delay } else { next });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_disabled_never_fires() {
        let start = Instant::now();
        let mut ticker = Ticker::disabled();
        assert!(!ticker.is_enabled());
        assert!(!ticker.poll(start + secs(100)));
        assert_eq!(ticker.time_until_next(start), None);
    }

    #[test]
    fn test_fires_once_per_delay() {
        let start = Instant::now();
        let mut ticker = Ticker::disabled();
        ticker.set_delay(Some(TICK_INTERVAL), start);

        assert!(!ticker.poll(start + Duration::from_millis(999)));
        assert!(ticker.poll(start + secs(1)));
        assert!(!ticker.poll(start + secs(1)));
        assert!(ticker.poll(start + secs(2)));
        assert_eq!(ticker.time_until_next(start + secs(2)), Some(secs(1)));
    }

    #[test]
    fn test_disable_halts_ticks() {
        let start = Instant::now();
        let mut ticker = Ticker::disabled();
        ticker.set_delay(Some(TICK_INTERVAL), start);
        ticker.set_delay(None, start + Duration::from_millis(500));

        assert!(!ticker.poll(start + secs(1)));
        assert!(!ticker.poll(start + secs(60)));
    }

    #[test]
    fn test_reenable_starts_fresh_schedule() {
        let start = Instant::now();
        let mut ticker = Ticker::disabled();
        ticker.set_delay(Some(TICK_INTERVAL), start);
        ticker.set_delay(None, start + Duration::from_millis(900));

        let resumed = start + secs(5);
        ticker.set_delay(Some(TICK_INTERVAL), resumed);
        assert!(!ticker.poll(resumed + Duration::from_millis(500)));
        assert!(ticker.poll(resumed + secs(1)));
    }

    #[test]
    fn test_same_delay_keeps_schedule() {
        let start = Instant::now();
        let mut ticker = Ticker::disabled();
        ticker.set_delay(Some(TICK_INTERVAL), start);
        ticker.set_delay(Some(TICK_INTERVAL), start + Duration::from_millis(900));
        assert!(ticker.poll(start + secs(1)));
    }

    #[test]
    fn test_missed_ticks_are_dropped() {
        let start = Instant::now();
        let mut ticker = Ticker::disabled();
        ticker.set_delay(Some(TICK_INTERVAL), start);

        let late = start + secs(10);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.time_until_next(late), Some(secs(1)));
    }

    #[test]
    fn test_zero_delay_means_disabled() {
        let start = Instant::now();
        let mut ticker = Ticker::disabled();
        ticker.set_delay(Some(Duration::ZERO), start);
        assert!(!ticker.is_enabled());
        assert!(!ticker.poll(start + secs(1)));
    }
}
