//! Single test binary entry point.
//!
//! Structure:
//! - integration: Gesture flows across controller, surface and listeners
//! - unit: Single-component tests

mod unit;
