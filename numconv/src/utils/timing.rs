//! Timing helpers for the elapsed-time line of a report.
//!
//! Elapsed time is reported as fractional seconds, the unit earlier report
//! files used.

use std::time::{Duration, Instant};

/// Measures wall-clock time from construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Render a duration as fractional seconds, e.g. `0.25`.
pub fn seconds(d: Duration) -> String {
    format!("{}", d.as_secs_f64())
}
