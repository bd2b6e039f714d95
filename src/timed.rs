use std::future::Future;

use tracing::debug;

use crate::stopwatch::Stopwatch;

/// Run `f` and return its output with the seconds it took.
pub fn time<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let stopwatch = Stopwatch::new();
    let output = f();
    let seconds = stopwatch.elapsed();
    debug!(seconds, "timed closure");
    (output, seconds)
}

/// Await `fut` and return its output with the seconds between the first poll and completion.
pub async fn time_async<F: Future>(fut: F) -> (F::Output, f64) {
    let stopwatch = Stopwatch::new();
    let output = fut.await;
    let seconds = stopwatch.elapsed();
    debug!(seconds, "timed future");
    (output, seconds)
}
