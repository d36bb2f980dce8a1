//! Debounced text input.
//!
//! Each keystroke restarts the settle window; the pending text is
//! published only once no further input has arrived for the full
//! duration. The debouncer is plain deadline state polled from the event
//! loop tick with an explicit `Instant`, so supersession and teardown are
//! deterministic and tests need no real clock.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Record new input at `now`, superseding any pending value.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now + self.delay));
    }

    /// Publish the pending value if its settle window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(text, _)| text),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending value without publishing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
