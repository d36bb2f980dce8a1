//! Cancellable deadline timers.
//!
//! All timer-driven behavior in the app (toast expiry, carousel
//! auto-advance, the post-review redirect) is deadline state owned by the
//! component that needs it and polled from the event-loop tick, never an
//! ambient timer. Dropping or cancelling the handle is the cancellation.

use std::time::{Duration, Instant};

/// A single-shot or repeating countdown.
#[derive(Debug, Clone)]
pub struct Countdown {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Countdown {
    /// An inactive countdown; call [`Self::start`] to arm it.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the countdown from `now`.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire once if the deadline has passed, disarming.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fire if the deadline has passed and immediately re-arm from `now`,
    /// for repeating timers like the story strip.
    pub fn poll_repeating(&mut self, now: Instant) -> bool {
        if self.poll(now) {
            self.start(now);
            true
        } else {
            false
        }
    }
}
