use std::time::{Duration, Instant};

/// A repeating timer for the simulation.  It has at most one pending
/// deadline; starting an already-running ticker and cancelling a stopped one
/// are both no-ops.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub(super) fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            deadline: None,
        }
    }

    /// Schedule the next tick one period from now, unless one is already
    /// scheduled
    pub(super) fn start(&mut self) {
        if self.deadline.is_none() {
            self.deadline = Some(Instant::now() + self.period);
        }
    }

    pub(super) fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The next deadline is one period after this call, not after the old
    /// deadline.  A cancelled ticker stays cancelled.
    pub(super) fn reschedule(&mut self) {
        if self.deadline.is_some() {
            self.deadline = Some(Instant::now() + self.period);
        }
    }

    pub(super) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
