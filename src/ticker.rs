use std::time::{Duration, Instant};

/// Default event-loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get the event-loop poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// A cancellable repeating schedule checked from the event loop.
///
/// Nothing runs in the background: the loop asks `due(now)` how many
/// intervals have elapsed since the last check.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// One tick per second
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Schedule the first tick one interval after `now`
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks that fell due up to `now`; advances the schedule
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_due else {
            return 0;
        };

        let mut count = 0;
        while next <= now {
            count += 1;
            next += self.interval;
        }
        self.next_due = Some(next);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_unarmed_ticker_never_fires() {
        let mut ticker = Ticker::every_second();
        assert_eq!(ticker.due(Instant::now() + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_due_counts_elapsed_intervals() {
        let start = Instant::now();
        let mut ticker = Ticker::every_second();
        ticker.arm(start);

        assert_eq!(ticker.due(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.due(start + Duration::from_secs(1)), 1);
        assert_eq!(ticker.due(start + Duration::from_millis(3500)), 2);
        assert_eq!(ticker.due(start + Duration::from_millis(3900)), 0);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let start = Instant::now();
        let mut ticker = Ticker::every_second();
        ticker.arm(start);
        ticker.cancel();

        assert!(!ticker.is_armed());
        assert_eq!(ticker.due(start + Duration::from_secs(5)), 0);
    }
}
