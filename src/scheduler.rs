//! Tick cadence for the runtime loop.
//!
//! The engine only asks for "another tick"; this type turns that request into
//! a deadline one interval away and tells the loop how long it may block on
//! input before the tick is due.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    next: Option<Instant>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    /// Arm the next tick one interval after `now`, replacing any pending one.
    pub fn schedule(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }

    /// Drop the pending tick. Nothing is due until `schedule` is called again.
    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_some_and(|at| now >= at)
    }

    /// Consume the pending tick if it is due.
    ///
    /// The scheduler stays disarmed until the engine asks for the next tick.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.next = None;
            true
        } else {
            false
        }
    }

    /// How long the loop may wait for input before the pending tick is due.
    ///
    /// With nothing scheduled the loop waits one full interval.
    pub fn timeout(&self, now: Instant) -> Duration {
        match self.next {
            Some(at) => at.saturating_duration_since(now),
            None => self.interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(33);

    #[test]
    fn nothing_due_before_first_schedule() {
        let s = TickScheduler::new(INTERVAL);
        let now = Instant::now();
        assert!(!s.is_due(now + INTERVAL * 10));
        assert_eq!(s.timeout(now), INTERVAL);
    }

    #[test]
    fn tick_becomes_due_after_interval() {
        let mut s = TickScheduler::new(INTERVAL);
        let t0 = Instant::now();
        s.schedule(t0);

        assert!(!s.is_due(t0));
        assert!(!s.is_due(t0 + INTERVAL - Duration::from_millis(1)));
        assert!(s.is_due(t0 + INTERVAL));
    }

    #[test]
    fn take_due_fires_once() {
        let mut s = TickScheduler::new(INTERVAL);
        let t0 = Instant::now();
        s.schedule(t0);

        assert!(!s.take_due(t0));
        assert!(s.take_due(t0 + INTERVAL));
        assert!(!s.take_due(t0 + INTERVAL * 2));
        assert_eq!(s.timeout(t0 + INTERVAL * 2), INTERVAL);
    }

    #[test]
    fn timeout_counts_down_to_zero() {
        let mut s = TickScheduler::new(INTERVAL);
        let t0 = Instant::now();
        s.schedule(t0);

        assert_eq!(s.timeout(t0), INTERVAL);
        assert_eq!(s.timeout(t0 + Duration::from_millis(20)), Duration::from_millis(13));
        assert_eq!(s.timeout(t0 + INTERVAL * 3), Duration::ZERO);
    }

    #[test]
    fn cancel_stops_future_ticks() {
        let mut s = TickScheduler::new(INTERVAL);
        let t0 = Instant::now();
        s.schedule(t0);
        s.cancel();
        assert!(!s.is_due(t0 + INTERVAL * 5));
    }
}
