//! Host clocks.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use weather_reporter_common::traits::Clock;

/// Monotonic loop time from [`Instant`], wall time from [`SystemTime`].
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Default for SystemClock {
    fn default() -> Self { Self::new() }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 { self.start.elapsed().as_millis() as u64 }

    fn unix_time(&self) -> i64 {
        // A clock set before 1970 reads as "not synced"
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() as i64)
    }
}

#[cfg(test)]
mod tests {
    use weather_reporter_common::config::CLOCK_SYNC_MIN_UNIX;

    use super::*;

    #[test]
    fn test_monotonic_and_synced() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.now_ms() >= a + 5);
        assert!(clock.unix_time() > CLOCK_SYNC_MIN_UNIX);
    }
}
