use std::time::Duration;

use steady_stopwatch::{time_async, ManualClock, Stopwatch};

#[test]
fn test_truncation_with_manual_clock() {
    let clock = ManualClock::new();
    let stopwatch = Stopwatch::with_clock(clock.clone());

    // 1.999us reports 1us, not 2us
    clock.advance(Duration::from_nanos(1_999));
    assert_eq!(stopwatch.elapsed(), 0.000001);

    clock.advance(Duration::from_secs(1));
    assert_eq!(stopwatch.elapsed_micros(), 1_000_001);
}

#[test]
fn test_stopwatches_share_a_manual_clock() {
    let clock = ManualClock::default();
    let mut a = Stopwatch::with_clock(clock.clone());
    clock.advance(Duration::from_millis(10));
    let b = Stopwatch::with_clock(clock.clone());
    clock.advance(Duration::from_millis(5));

    assert_eq!(a.elapsed(), 0.015);
    assert_eq!(b.elapsed(), 0.005);

    a.reset();
    assert_eq!(a.elapsed(), 0.0);
    assert_eq!(b.elapsed(), 0.005);
    assert_eq!(a.clock().offset(), Duration::from_millis(15));
}

#[tokio::test]
async fn test_time_async_returns_future_output() {
    let (values, seconds) = time_async(async { vec![1, 2, 3] }).await;
    assert_eq!(values, vec![1, 2, 3]);
    assert!(seconds >= 0.0);
}
