//! Unit tests for perf module.

use viewport_input::perf::{measure, ScopedTimer};

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping must not warn
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed_ms) = measure(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed_ms >= 0.0);
}
