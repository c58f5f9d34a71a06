use std::time::{Duration, SystemTime};

/// Timestamp pair driving the two timers of a session: total elapsed
/// time (for the winning-time column) and the per-attempt countdown.
///
/// All operations take `now` explicitly; nothing here reads the wall
/// clock, so tests drive time with plain offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionClock {
    pub started_timestamp: SystemTime,
    pub turn_started_timestamp: SystemTime,
}

impl SessionClock {
    pub fn anchored_at(now: SystemTime) -> Self {
        Self {
            started_timestamp: now,
            turn_started_timestamp: now,
        }
    }

    /// Total session duration so far.
    pub fn elapsed(&self, now: SystemTime) -> Duration {
        now.duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
    }

    /// Whole seconds left on the current attempt. Not clamped; callers
    /// display `max(0, value)`.
    pub fn remaining(&self, now: SystemTime, limit: Duration) -> i64 {
        let turn_elapsed = now
            .duration_since(self.turn_started_timestamp)
            .unwrap_or(Duration::default());
        (limit.as_secs_f64() - turn_elapsed.as_secs_f64()).floor() as i64
    }

    /// Re-anchors the per-attempt countdown. The countdown restarts on
    /// every submitted guess, correct or not.
    pub fn turn_reset(&self, now: SystemTime) -> SessionClock {
        let mut new_clock = self.clone();
        new_clock.turn_started_timestamp = now;
        new_clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_from_start() {
        let now = SystemTime::now();
        let clock = SessionClock::anchored_at(now);

        assert_eq!(
            clock.elapsed(now + Duration::from_secs(12)),
            Duration::from_secs(12)
        );
    }

    #[test]
    fn test_remaining_counts_down_from_limit() {
        let now = SystemTime::now();
        let clock = SessionClock::anchored_at(now);
        let limit = Duration::from_secs(20);

        assert_eq!(clock.remaining(now, limit), 20);
        assert_eq!(clock.remaining(now + Duration::from_secs(7), limit), 13);
        assert_eq!(clock.remaining(now + Duration::from_millis(7500), limit), 12);
    }

    #[test]
    fn test_remaining_goes_negative_after_limit() {
        let now = SystemTime::now();
        let clock = SessionClock::anchored_at(now);

        assert_eq!(
            clock.remaining(now + Duration::from_secs(25), Duration::from_secs(20)),
            -5
        );
    }

    #[test]
    fn test_turn_reset_leaves_session_start_alone() {
        let now = SystemTime::now();
        let clock = SessionClock::anchored_at(now);
        let later = now + Duration::from_secs(15);
        let reset = clock.turn_reset(later);

        assert_eq!(reset.started_timestamp, now);
        assert_eq!(reset.remaining(later, Duration::from_secs(10)), 10);
        assert_eq!(reset.elapsed(later), Duration::from_secs(15));
    }
}
