use std::time::Instant;

/// Wall-clock stopwatch over a monotonic clock.
///
/// One `start`/`elapsed` pair per timed call; pairs must not overlap.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// A timer that is already running.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    /// Seconds since the last [`start`](Self::start).
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_is_monotonic_and_non_negative() {
        let mut t = Timer::new();
        t.start();
        let a = t.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        let b = t.elapsed();
        assert!(a >= 0.0);
        assert!(b >= a);
        assert!(b >= 0.002);
    }

    #[test]
    fn test_restart_resets() {
        let mut t = Timer::new();
        std::thread::sleep(Duration::from_millis(5));
        let before = t.elapsed();
        assert!(before >= 0.005);

        let restarted_at = Instant::now();
        t.start();
        let after = t.elapsed();
        // the timer restarted after `restarted_at`, so it cannot report more
        assert!(after <= restarted_at.elapsed().as_secs_f64());
    }
}
