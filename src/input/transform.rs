//! Viewport transform - scale plus translation, and zoom around a pivot.
//!
//! A world point `w` is drawn at `w * scale + translation` in surface-local
//! pixels.

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Scale and translation mapping world content onto the surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub scale: f64,
    pub translation: Point,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportTransform {
    pub const IDENTITY: ViewportTransform = ViewportTransform {
        scale: 1.0,
        translation: Point::ZERO,
    };

    pub fn new(scale: f64, translation: Point) -> Self {
        Self { scale, translation }
    }

    /// Positive finite scale and finite translation
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0 && self.translation.is_finite()
    }

    /// Rescale to `new_scale` keeping the world point under `pivot` fixed.
    ///
    /// `new_scale` must already be clamped; the translation adjustment uses
    /// the ratio of the final scale so no drift accumulates at the bounds.
    /// Returns true if the transform changed.
    pub fn zoom_around(&mut self, new_scale: f64, pivot: Point) -> bool {
        if new_scale == self.scale {
            return false;
        }
        let ratio = new_scale / self.scale;
        self.translation = pivot - (pivot - self.translation) * ratio;
        self.scale = new_scale;
        true
    }

    /// Translate by a surface-local delta. Returns true if the transform changed.
    pub fn pan_by(&mut self, delta: Point) -> bool {
        if delta.is_zero() {
            return false;
        }
        self.translation += delta;
        true
    }
}
