use std::time::{Duration, Instant};

/// Fixed-rate tick schedule. A late tick is not made up for: the next
/// deadline is pushed out from the moment the late tick ran.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_tick: Instant,
}

impl TickClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// How long input may be collected before the next tick.
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Schedules the tick after the one that just ran at `now`.
    pub fn advance(&mut self, now: Instant) {
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(250);

    #[test]
    fn test_first_tick_after_one_interval() {
        let start = Instant::now();
        let clock = TickClock::new(INTERVAL, start);

        assert!(!clock.is_due(start));
        assert_eq!(clock.time_until_tick(start), INTERVAL);
        assert!(clock.is_due(start + INTERVAL));
        assert_eq!(clock.time_until_tick(start + INTERVAL * 2), Duration::ZERO);
    }

    #[test]
    fn test_steady_cadence() {
        let start = Instant::now();
        let mut clock = TickClock::new(INTERVAL, start);

        // Ticking a little late keeps the original grid of deadlines.
        let now = start + INTERVAL + Duration::from_millis(10);
        clock.advance(now);
        assert_eq!(clock.time_until_tick(now), INTERVAL - Duration::from_millis(10));
    }

    #[test]
    fn test_no_catch_up_after_stall() {
        let start = Instant::now();
        let mut clock = TickClock::new(INTERVAL, start);

        let now = start + INTERVAL * 10;
        clock.advance(now);
        assert!(!clock.is_due(now));
        assert_eq!(clock.time_until_tick(now), INTERVAL);
    }
}
