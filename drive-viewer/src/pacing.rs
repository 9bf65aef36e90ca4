use std::time::{Duration, Instant};

/// Fixed-step accumulator over a monotonic clock.
///
/// Wall time is banked on every `advance`; each full tick in the bank is handed
/// out once. A backlog longer than `max_catch_up` ticks is dropped rather than
/// simulated, so a stalled window does not fast-forward the vehicle.
#[derive(Debug, Clone)]
pub struct TickClock {
    tick: Duration,
    max_catch_up: u32,
    last: Instant,
    lag: Duration,
    dropped: u64,
}

impl TickClock {
    pub fn new(tick: Duration, max_catch_up: u32, now: Instant) -> Self {
        Self {
            tick: tick.max(Duration::from_millis(1)),
            max_catch_up: max_catch_up.max(1),
            last: now,
            lag: Duration::ZERO,
            dropped: 0,
        }
    }

    /// Returns how many ticks to simulate now.
    pub fn advance(&mut self, now: Instant) -> u32 {
        if now > self.last {
            self.lag += now - self.last;
            self.last = now;
        }

        let tick_nanos = self.tick.as_nanos();
        let lag_nanos = self.lag.as_nanos();
        let due = lag_nanos / tick_nanos;
        self.lag = Duration::from_nanos((lag_nanos % tick_nanos) as u64);

        let due = u32::try_from(due).unwrap_or(u32::MAX);
        if due > self.max_catch_up {
            self.dropped += u64::from(due - self.max_catch_up);
            return self.max_catch_up;
        }
        due
    }

    /// When the next tick becomes due.
    pub fn next_deadline(&self) -> Instant {
        self.last + self.tick.saturating_sub(self.lag)
    }

    /// Ticks skipped by the catch-up cap since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
