//! Gesture samples raised by a surface.
//!
//! Each event is consumed once by the controller. The conversion helpers
//! map raw input onto the two quantities the controller needs: a zoom
//! exponent and a pan delta.

use crate::settings::ViewportSettings;
use crate::types::Point;

/// Scroll wheel / trackpad delta as reported by the platform
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDelta {
    /// Precise delta in pixels (trackpads)
    Pixels(Point),
    /// Delta in lines (notched wheels)
    Lines(Point),
}

impl ScrollDelta {
    /// Delta in pixels, converting lines with the configured line height
    pub fn to_pixels(self, line_height: f64) -> Point {
        match self {
            ScrollDelta::Pixels(delta) => delta,
            ScrollDelta::Lines(delta) => delta * line_height,
        }
    }
}

/// What kind of pointer input produced the event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureKind {
    /// Wheel or two-finger scroll. Positive `y` zooms in under the zoom tool.
    Scroll(ScrollDelta),
    /// Pinch. Positive magnitude spreads the fingers and zooms in.
    Pinch { magnitude: f64 },
    /// Pointer moved with a button held. Upward drags zoom in under the zoom tool.
    Drag { delta: Point },
}

/// A single gesture sample in surface-local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub position: Point,
}

impl GestureEvent {
    pub fn new(kind: GestureKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub fn scroll_pixels(dx: f64, dy: f64, position: Point) -> Self {
        Self::new(GestureKind::Scroll(ScrollDelta::Pixels(Point::new(dx, dy))), position)
    }

    pub fn scroll_lines(dx: f64, dy: f64, position: Point) -> Self {
        Self::new(GestureKind::Scroll(ScrollDelta::Lines(Point::new(dx, dy))), position)
    }

    pub fn pinch(magnitude: f64, position: Point) -> Self {
        Self::new(GestureKind::Pinch { magnitude }, position)
    }

    pub fn drag(dx: f64, dy: f64, position: Point) -> Self {
        Self::new(GestureKind::Drag { delta: Point::new(dx, dy) }, position)
    }

    /// Signed zoom magnitude scaled by the matching sensitivity.
    /// The zoom factor is `exp` of this value, so 0 means no zoom.
    pub fn zoom_exponent(&self, settings: &ViewportSettings) -> f64 {
        match self.kind {
            GestureKind::Scroll(delta) => {
                delta.to_pixels(settings.line_height).y * settings.scroll_zoom_sensitivity
            }
            GestureKind::Pinch { magnitude } => magnitude * settings.pinch_zoom_sensitivity,
            GestureKind::Drag { delta } => -delta.y * settings.drag_zoom_sensitivity,
        }
    }

    /// Translation to apply under the pan tool. Pinches carry none.
    pub fn pan_delta(&self, settings: &ViewportSettings) -> Point {
        match self.kind {
            GestureKind::Scroll(delta) => delta.to_pixels(settings.line_height),
            GestureKind::Pinch { .. } => Point::ZERO,
            GestureKind::Drag { delta } => delta,
        }
    }

    /// Position and all magnitudes are finite
    pub fn is_finite(&self) -> bool {
        let payload = match self.kind {
            GestureKind::Scroll(ScrollDelta::Pixels(d) | ScrollDelta::Lines(d)) => d.is_finite(),
            GestureKind::Pinch { magnitude } => magnitude.is_finite(),
            GestureKind::Drag { delta } => delta.is_finite(),
        };
        payload && self.position.is_finite()
    }

    /// Short name for logging
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            GestureKind::Scroll(_) => "scroll",
            GestureKind::Pinch { .. } => "pinch",
            GestureKind::Drag { .. } => "drag",
        }
    }
}
