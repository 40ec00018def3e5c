//! Exponential backoff with jitter.

use rand::Rng;
use std::time::Duration;

/// Exponential backoff schedule: `base * 2^(attempt-1)`, capped at `max`,
/// plus up to 10% jitter.
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    base_ms: u64,
    max_ms: u64,
}

impl Backoff {
    /// Create a schedule with the given base and cap in milliseconds.
    pub fn new(base_ms: u64, max_ms: u64) -> Self {
        Self { base_ms, max_ms }
    }

    /// Delay before the given attempt (1-based). Attempt 0 gets no delay.
    pub fn delay(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::from_millis(0);
        }

        let exponential_base = 2u64.saturating_pow(attempt - 1);
        let delay_ms = self.base_ms.saturating_mul(exponential_base);
        let capped_delay = delay_ms.min(self.max_ms);

        // Apply jitter (0 to 10% of the delay)
        let jitter_range = capped_delay / 10;
        let jitter = if jitter_range > 0 {
            rand::thread_rng().gen_range(0..jitter_range)
        } else {
            0
        };

        Duration::from_millis(capped_delay + jitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_double_until_cap() {
        let backoff = Backoff::new(100, 2000);

        let b1 = backoff.delay(1);
        assert!(b1.as_millis() >= 100 && b1.as_millis() <= 110);

        let b2 = backoff.delay(2);
        assert!(b2.as_millis() >= 200 && b2.as_millis() <= 220);

        let capped = backoff.delay(10);
        assert!(capped.as_millis() >= 2000 && capped.as_millis() <= 2200);
    }

    #[test]
    fn test_attempt_zero_has_no_delay() {
        let backoff = Backoff::new(100, 2000);
        assert_eq!(backoff.delay(0), Duration::from_millis(0));
    }

    #[test]
    fn test_zero_base_never_panics() {
        let backoff = Backoff::new(0, 0);
        assert_eq!(backoff.delay(5), Duration::from_millis(0));
    }
}
