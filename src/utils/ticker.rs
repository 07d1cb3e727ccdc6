use std::time::{Duration, Instant};

/// Fixed-period task polled from the frame loop.
///
/// The caller passes the current time into every method, so the ticker never sleeps and
/// never reads the clock on its own.
#[derive(Debug, Default)]
pub struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arms the ticker; the first tick is due one `period` after `now`.
    pub fn schedule(&mut self, period: Duration, now: Instant) {
        self.period = period;
        self.deadline = Some(now + period);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Cancels the pending tick and arms the ticker with a new period.
    ///
    /// Does nothing if the ticker is not armed.
    pub fn reschedule(&mut self, period: Duration, now: Instant) {
        if self.deadline.take().is_some() {
            self.schedule(period, now);
        } else {
            self.period = period;
        }
    }

    /// Returns `true` at most once per call if a tick is due.
    ///
    /// Missed periods are skipped instead of being fired in a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let mut next = deadline + self.period;
        if next <= now {
            next = now + self.period;
        }
        self.deadline = Some(next);
        true
    }

    /// Time left until the next tick, `None` if not armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
