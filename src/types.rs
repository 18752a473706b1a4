//! Core value types shared across the crate.
//!
//! Points in surface-local or world coordinates and the tool modes a host
//! can select.

use crate::error::{ViewportError, ViewportResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point or vector. Surface-local coordinates are in pixels with the
/// origin at the top-left of the clickable content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

// ============================================================================
// Tool Modes
// ============================================================================

/// How pointer input on the surface is currently interpreted.
///
/// The set is closed so that gesture dispatch stays exhaustive. Values coming
/// from outside Rust (numeric codes, config strings) go through
/// [`TryFrom<u8>`] or [`FromStr`], which reject anything unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolMode {
    /// Drag / scroll moves the view
    Pan,
    /// Scroll / pinch / drag changes the scale around the pointer
    Zoom,
    /// Pointer input belongs to item selection, not to the viewport
    #[default]
    Select,
}

impl ToolMode {
    pub const ALL: [ToolMode; 3] = [ToolMode::Pan, ToolMode::Zoom, ToolMode::Select];

    /// Returns true for modes the viewport controller acts on
    pub fn is_navigation(self) -> bool {
        match self {
            ToolMode::Pan | ToolMode::Zoom => true,
            ToolMode::Select => false,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            ToolMode::Pan => "pan",
            ToolMode::Zoom => "zoom",
            ToolMode::Select => "select",
        }
    }

    /// Stable numeric code for hosts that store modes as integers
    pub fn code(self) -> u8 {
        match self {
            ToolMode::Pan => 0,
            ToolMode::Zoom => 1,
            ToolMode::Select => 2,
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for ToolMode {
    type Error = ViewportError;

    fn try_from(code: u8) -> ViewportResult<Self> {
        ToolMode::ALL
            .into_iter()
            .find(|mode| mode.code() == code)
            .ok_or_else(|| ViewportError::OutOfRange(format!("unknown tool mode code {code}")))
    }
}

impl FromStr for ToolMode {
    type Err = ViewportError;

    fn from_str(s: &str) -> ViewportResult<Self> {
        let trimmed = s.trim();
        ToolMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ViewportError::OutOfRange(format!("unknown tool mode {s:?}")))
    }
}
