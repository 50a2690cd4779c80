use std::time::{Duration, Instant};

/// Repeating schedule for automatic advances
///
/// The timer never fires on its own: the host polls it with the current
/// instant from its event loop, and [`cancel`](Self::cancel) drops any
/// pending deadline.
#[derive(Debug, Clone)]
pub struct AutoscrollTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl AutoscrollTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the period; a running schedule restarts from `now`
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.is_running() {
            self.start(now);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedule the first fire one interval after `now`
    pub fn start(&mut self, now: Instant) {
        if self.interval.is_zero() {
            tracing::debug!("Autoscroll interval is zero, not scheduling");
            self.next_due = None;
            return;
        }
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Time left until the next fire
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    /// Returns true once per elapsed period
    ///
    /// Missed periods collapse into a single fire.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(mut due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        while due <= now {
            due += self.interval;
        }
        self.next_due = Some(due);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = AutoscrollTimer::new(Duration::from_secs(5));
        timer.start(start);

        assert!(!timer.poll(start + Duration::from_secs(4)));
        assert!(timer.poll(start + Duration::from_secs(5)));
        assert!(!timer.poll(start + Duration::from_secs(6)));
        assert!(timer.poll(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_missed_periods_collapse() {
        let start = Instant::now();
        let mut timer = AutoscrollTimer::new(Duration::from_secs(5));
        timer.start(start);

        assert!(timer.poll(start + Duration::from_secs(23)));
        assert!(!timer.poll(start + Duration::from_secs(24)));
        assert_eq!(
            timer.remaining(start + Duration::from_secs(24)),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn test_cancel_stops_firing() {
        let start = Instant::now();
        let mut timer = AutoscrollTimer::new(Duration::from_secs(5));
        timer.start(start);
        timer.cancel();
        assert!(!timer.is_running());
        assert!(!timer.poll(start + Duration::from_secs(60)));
    }

    #[test]
    fn test_zero_interval_never_runs() {
        let mut timer = AutoscrollTimer::new(Duration::ZERO);
        timer.start(Instant::now());
        assert!(!timer.is_running());
    }
}
