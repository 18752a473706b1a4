//! Viewport settings: zoom bounds and gesture sensitivities.
//!
//! Settings are plain JSON. Missing fields fall back to the defaults in
//! [`crate::constants`], so a partial file such as `{"max_scale": 4.0}` is
//! valid.

use crate::constants::{
    DEFAULT_ZOOM, DRAG_ZOOM_SENSITIVITY, LINE_HEIGHT_PX, MAX_ZOOM, MIN_ZOOM,
    PINCH_ZOOM_SENSITIVITY, SCROLL_ZOOM_SENSITIVITY, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
    ZOOM_STEP,
};
use crate::error::{ViewportError, ViewportResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tunable parameters for a [`crate::ViewportInputController`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Lower scale bound
    pub min_scale: f64,
    /// Upper scale bound
    pub max_scale: f64,
    /// Scale the viewport starts at and returns to on reset
    pub initial_scale: f64,
    /// Zoom per scrolled pixel
    pub scroll_zoom_sensitivity: f64,
    /// Zoom per unit of pinch magnitude
    pub pinch_zoom_sensitivity: f64,
    /// Zoom per dragged pixel while the zoom tool is active
    pub drag_zoom_sensitivity: f64,
    /// Pixels per line for line-based scroll deltas
    pub line_height: f64,
    /// Factor applied by `zoom_in` / `zoom_out`
    pub zoom_step: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            min_scale: MIN_ZOOM,
            max_scale: MAX_ZOOM,
            initial_scale: DEFAULT_ZOOM,
            scroll_zoom_sensitivity: SCROLL_ZOOM_SENSITIVITY,
            pinch_zoom_sensitivity: PINCH_ZOOM_SENSITIVITY,
            drag_zoom_sensitivity: DRAG_ZOOM_SENSITIVITY,
            line_height: LINE_HEIGHT_PX,
            zoom_step: ZOOM_STEP,
        }
    }
}

impl ViewportSettings {
    /// Settings with the given scale bounds and defaults elsewhere.
    /// The initial scale is pulled into the bounds.
    pub fn with_bounds(min_scale: f64, max_scale: f64) -> Self {
        Self {
            min_scale,
            max_scale,
            initial_scale: DEFAULT_ZOOM.max(min_scale).min(max_scale),
            ..Self::default()
        }
    }

    /// Check every field. Returns the first problem found.
    pub fn validate(&self) -> ViewportResult<()> {
        let fields = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("initial_scale", self.initial_scale),
            ("scroll_zoom_sensitivity", self.scroll_zoom_sensitivity),
            ("pinch_zoom_sensitivity", self.pinch_zoom_sensitivity),
            ("drag_zoom_sensitivity", self.drag_zoom_sensitivity),
            ("line_height", self.line_height),
            ("zoom_step", self.zoom_step),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewportError::InvalidArgument(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        if self.min_scale > self.max_scale {
            return Err(ViewportError::InvalidArgument(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if !(self.min_scale..=self.max_scale).contains(&self.initial_scale) {
            return Err(ViewportError::InvalidArgument(format!(
                "initial_scale {} outside [{}, {}]",
                self.initial_scale, self.min_scale, self.max_scale
            )));
        }
        if self.zoom_step <= 1.0 {
            return Err(ViewportError::InvalidArgument(format!(
                "zoom_step must be greater than 1, got {}",
                self.zoom_step
            )));
        }
        Ok(())
    }

    /// Clamp a scale into the configured bounds
    #[inline]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }

    /// Parse and validate settings from JSON
    pub fn from_json_str(json: &str) -> ViewportResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a file
    pub fn load(path: &Path) -> ViewportResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(ViewportError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No viewport settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Invalid viewport settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> ViewportResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Platform settings location, e.g. `~/.config/viewport-input/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
