//! Wall clock to game clock.
//!
//! [`FrameClock`] turns `Instant`s into the whole milliseconds the game is
//! advanced by. The sub-millisecond remainder carries over to the next turn,
//! and a stall longer than [`MAX_CATCH_UP_MS`] is cut short.

use std::time::{Duration, Instant};

/// Longest stretch of wall time fed to the game at once (e.g. after a stall).
pub const MAX_CATCH_UP_MS: u32 = 250;

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Whole milliseconds since the last take, capped at [`MAX_CATCH_UP_MS`].
    pub fn take(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last).as_millis();
        if elapsed > u128::from(MAX_CATCH_UP_MS) {
            log::debug!("clock stalled for {elapsed}ms, dropping the excess");
            self.last = now;
            return MAX_CATCH_UP_MS;
        }
        // Only the whole milliseconds are consumed.
        self.last += Duration::from_millis(elapsed as u64);
        elapsed as u32
    }

    /// Forget any pending time. Called when a new game starts so idle time
    /// on the start or over screen is never replayed as frames.
    pub fn resync(&mut self, now: Instant) {
        self.last = now;
    }

    /// Time left until `period` has passed since the last take.
    pub fn remaining(&self, period: Duration, now: Instant) -> Duration {
        period.saturating_sub(now.saturating_duration_since(self.last))
    }
}
