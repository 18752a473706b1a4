//! Coordinate conversion between surface-local pixels and world space.
//!
//! Centralizes the transform formulas so gesture handling and hosts use the
//! same math.

use crate::input::transform::ViewportTransform;
use crate::types::Point;

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert surface-local position to world position
    #[inline]
    pub fn screen_to_world(screen_pos: Point, transform: &ViewportTransform) -> Point {
        Point::new(
            (screen_pos.x - transform.translation.x) / transform.scale,
            (screen_pos.y - transform.translation.y) / transform.scale,
        )
    }

    /// Convert world position to surface-local position
    #[inline]
    pub fn world_to_screen(world_pos: Point, transform: &ViewportTransform) -> Point {
        Point::new(
            world_pos.x * transform.scale + transform.translation.x,
            world_pos.y * transform.scale + transform.translation.y,
        )
    }

    /// Convert a delta from screen to world (for drag operations)
    #[inline]
    pub fn delta_screen_to_world(delta: Point, scale: f64) -> Point {
        Point::new(delta.x / scale, delta.y / scale)
    }

    /// Convert a delta from world to screen
    #[inline]
    pub fn delta_world_to_screen(delta: Point, scale: f64) -> Point {
        Point::new(delta.x * scale, delta.y * scale)
    }
}
