#![cfg(feature = "std")]
//! Wall-clock timing of a play session.

use std::time::{Duration, Instant};

/// Start and end instants of a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionTimer {
    started: Instant,
    finished: Option<Instant>,
}

impl SessionTimer {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            finished: None,
        }
    }

    /// Stop the clock and return the session length. Later calls return
    /// the same duration.
    pub fn finish(&mut self) -> Duration {
        let end = *self.finished.get_or_insert_with(Instant::now);
        end.duration_since(self.started)
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Time since the start, or the final length once finished.
    pub fn elapsed(&self) -> Duration {
        match self.finished {
            Some(end) => end.duration_since(self.started),
            None => self.started.elapsed(),
        }
    }
}
