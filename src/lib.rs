//! Monotonic elapsed-time measurement.
//!
//! ```
//! use steady_stopwatch::Stopwatch;
//!
//! let stopwatch = Stopwatch::new();
//! // ... measured region ...
//! assert!(stopwatch.elapsed() >= 0.0);
//! ```

pub mod clock;
pub mod error;
pub mod stopwatch;
pub mod timed;

use std::result;

pub use self::{
    clock::{Clock, ManualClock, MonotonicClock},
    error::Error,
    stopwatch::Stopwatch,
    timed::{time, time_async},
};

pub type Result<T> = result::Result<T, error::Error>;
