use std::{
    fmt,
    time::{Duration, Instant},
};

use tracing::trace;

use crate::{
    clock::{Clock, MonotonicClock},
    Result,
};

pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Measures time elapsed since creation or the last [`Stopwatch::reset`].
///
/// Spans are truncated to whole microseconds before being reported, so
/// sub-microsecond precision is never observable.
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch<C: Clock = MonotonicClock> {
    start_instant: Instant,
    clock: C,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Start a stopwatch on the host's monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            start_instant: clock.now(),
            clock,
        }
    }

    /// Restart the measurement from now, discarding the previous span.
    pub fn reset(&mut self) {
        self.start_instant = self.clock.now();
        trace!("stopwatch reset");
    }

    /// Seconds since the start instant, truncated to the microsecond.
    pub fn elapsed(&self) -> f64 {
        micros_to_seconds(self.elapsed_micros())
    }

    pub fn elapsed_micros(&self) -> u128 {
        self.span_to(self.clock.now()).as_micros()
    }

    /// The truncated span as a signed [`chrono::Duration`].
    pub fn elapsed_duration(&self) -> Result<chrono::Duration> {
        let span = truncate_to_micros(self.span_to(self.clock.now()));
        Ok(chrono::Duration::from_std(span)?)
    }

    /// Read the elapsed seconds and restart from the same instant.
    pub fn lap(&mut self) -> f64 {
        let now = self.clock.now();
        let seconds = micros_to_seconds(self.span_to(now).as_micros());
        self.start_instant = now;
        trace!(seconds, "stopwatch lap");
        seconds
    }

    pub fn start_instant(&self) -> Instant {
        self.start_instant
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn span_to(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start_instant)
    }
}

impl<C: Clock> fmt::Display for Stopwatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}s", self.elapsed())
    }
}

fn micros_to_seconds(micros: u128) -> f64 {
    micros as f64 / MICROS_PER_SECOND
}

fn truncate_to_micros(span: Duration) -> Duration {
    Duration::new(span.as_secs(), span.subsec_micros() * 1_000)
}
