//! Crate-wide constants.
//!
//! Default values for the viewport settings and input conversion, kept in one
//! place so the settings defaults and the tests agree.

// ============================================================================
// Zoom Bounds
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 10.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Multiplicative zoom step for keyboard / button zoom
pub const ZOOM_STEP: f64 = 1.1;

// ============================================================================
// Gesture Sensitivity
// ============================================================================

/// Zoom sensitivity per scrolled pixel
pub const SCROLL_ZOOM_SENSITIVITY: f64 = 0.002;

/// Zoom sensitivity per unit of pinch magnitude
pub const PINCH_ZOOM_SENSITIVITY: f64 = 1.0;

/// Zoom sensitivity per dragged pixel (zoom tool drag)
pub const DRAG_ZOOM_SENSITIVITY: f64 = 0.01;

/// Pixels per scrolled line for line-based scroll deltas
pub const LINE_HEIGHT_PX: f64 = 20.0;

// ============================================================================
// Profiling
// ============================================================================

/// Gesture handling slower than this is reported when profiling
pub const SLOW_GESTURE_MS: f64 = 2.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "viewport-input";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
