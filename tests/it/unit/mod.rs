//! Unit tests for viewport-input.

mod perf_tests;
mod snapshot_tests;
mod zoom_tests;
