//! Stopwatch used around every timed transfer
//!
//! A thin wrapper over [`std::time::Instant`] with the start/read-and-reset
//! shape the benchmark driver needs. Single-threaded use only.

use std::time::Instant;

/// Monotonic stopwatch with a single active start mark
#[derive(Debug, Default)]
pub struct Timer {
    mark: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current instant, overwriting any previous mark.
    pub fn start(&mut self) {
        self.mark = Some(Instant::now());
    }

    /// Milliseconds elapsed since the last [`start`](Timer::start), clearing
    /// the mark so the timer is ready to be restarted.
    ///
    /// # Panics
    ///
    /// Panics if the timer was never started; the driver always pairs a
    /// start with exactly one read.
    pub fn elapsed_and_reset(&mut self) -> u64 {
        let mark = self.mark.take().expect("Timer read without a prior start");
        mark.elapsed().as_millis() as u64
    }
}
