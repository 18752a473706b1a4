//! Unit tests for apply_zoom: pivot invariance, bounds and no-op rules.

use crate::helpers::{assert_pivot_fixed, assert_scale_in_bounds, TestControllerBuilder};
use viewport_input::{Point, ViewportTransform};

#[test]
fn test_zoom_two_at_fifty_fifty() {
    let mut fx = TestControllerBuilder::new().with_bounds(0.1, 10.0).build();
    let before = fx.controller.transform();

    assert!(fx.controller.apply_zoom(2.0, 50.0, 50.0).unwrap());

    let after = fx.controller.transform();
    assert_eq!(after.scale, 2.0);
    assert_eq!(after.translation, Point::new(-50.0, -50.0));
    assert_pivot_fixed(&before, &after, Point::new(50.0, 50.0));
    assert_eq!(fx.log.count(), 1);
}

#[test]
fn test_repeated_zoom_out_stops_at_floor() {
    let mut fx = TestControllerBuilder::new().with_bounds(0.1, 10.0).build();

    for _ in 0..5 {
        fx.controller.apply_zoom(0.01, 0.0, 0.0).unwrap();
        assert_scale_in_bounds(&fx.controller);
    }

    assert_eq!(fx.controller.transform().scale, 0.1);
    // Only the first call changed anything
    assert_eq!(fx.log.count(), 1);
}

#[test]
fn test_pivot_invariance_across_factors() {
    let factors = [0.5, 0.9, 1.25, 3.0, 7.5];
    let pivots = [
        Point::new(0.0, 0.0),
        Point::new(13.5, 270.25),
        Point::new(-40.0, 900.0),
    ];
    for factor in factors {
        for pivot in pivots {
            let mut fx = TestControllerBuilder::new().with_bounds(0.1, 10.0).build();
            fx.controller.pan_by(35.0, -12.0).unwrap();
            let before = fx.controller.transform();
            fx.controller.apply_zoom(factor, pivot.x, pivot.y).unwrap();
            assert_pivot_fixed(&before, &fx.controller.transform(), pivot);
        }
    }
}

#[test]
fn test_pivot_fixed_when_clamped() {
    let mut fx = TestControllerBuilder::new().with_bounds(0.5, 4.0).build();
    let pivot = Point::new(120.0, 60.0);
    let before = fx.controller.transform();

    fx.controller.apply_zoom(100.0, pivot.x, pivot.y).unwrap();

    let after = fx.controller.transform();
    assert_eq!(after.scale, 4.0);
    assert_pivot_fixed(&before, &after, pivot);
}

#[test]
fn test_zoom_at_bound_does_not_notify() {
    let mut fx = TestControllerBuilder::new().with_bounds(0.5, 2.0).build();
    fx.controller.apply_zoom(2.0, 10.0, 10.0).unwrap();
    let at_max = fx.controller.transform();
    let count = fx.log.count();

    assert!(!fx.controller.apply_zoom(1.5, 30.0, 30.0).unwrap());
    assert_eq!(fx.controller.transform(), at_max);
    assert_eq!(fx.log.count(), count);
}

#[test]
fn test_unit_factor_leaves_everything_unchanged() {
    let mut fx = TestControllerBuilder::new().build();
    assert!(!fx.controller.apply_zoom(1.0, 50.0, 50.0).unwrap());
    assert_eq!(fx.controller.transform(), ViewportTransform::IDENTITY);
    assert_eq!(fx.log.count(), 0);
}

#[test]
fn test_invalid_factor_leaves_transform() {
    let mut fx = TestControllerBuilder::new().build();
    for factor in [0.0, -1.0, f64::INFINITY, f64::NAN] {
        let err = fx.controller.apply_zoom(factor, 0.0, 0.0).unwrap_err();
        assert!(err.is_out_of_range(), "{factor} should be out of range");
    }
    assert_eq!(fx.controller.transform(), ViewportTransform::IDENTITY);
    assert_eq!(fx.log.count(), 0);
}

#[test]
fn test_zoom_in_then_out_round_trips() {
    let mut fx = TestControllerBuilder::new().build();
    let pivot = Point::new(64.0, 48.0);
    fx.controller.zoom_in(pivot).unwrap();
    assert!(fx.controller.transform().scale > 1.0);
    fx.controller.zoom_out(pivot).unwrap();

    let t = fx.controller.transform();
    assert!((t.scale - 1.0).abs() < 1e-12);
    assert!(t.translation.distance(Point::ZERO) < 1e-9);
}

#[test]
fn test_world_screen_round_trip_after_zoom() {
    let mut fx = TestControllerBuilder::new().build();
    fx.controller.apply_zoom(2.5, 10.0, 20.0).unwrap();
    fx.controller.pan_by(-7.0, 3.0).unwrap();

    let screen = Point::new(200.0, 150.0);
    let world = fx.controller.screen_to_world(screen);
    assert!(fx.controller.world_to_screen(world).distance(screen) < 1e-9);
}

#[test]
fn test_bounds_excluding_unit_scale() {
    let fx = TestControllerBuilder::new().with_bounds(2.0, 8.0).build();
    assert_eq!(fx.controller.transform().scale, 2.0);
    assert_scale_in_bounds(&fx.controller);
}

#[test]
fn test_pan_overflow_leaves_transform() {
    let mut fx = TestControllerBuilder::new().build();
    assert!(fx.controller.pan_by(f64::MAX, 0.0).unwrap());
    let before = fx.controller.transform();

    let err = fx.controller.pan_by(f64::MAX, 0.0).unwrap_err();

    assert!(err.is_out_of_range());
    assert_eq!(fx.controller.transform(), before);
    assert_eq!(fx.log.count(), 1);
}

#[test]
fn test_zoom_overflow_leaves_transform() {
    let mut fx = TestControllerBuilder::new().build();
    fx.controller.pan_by(-f64::MAX, 0.0).unwrap();
    let before = fx.controller.transform();

    let err = fx.controller.apply_zoom(2.0, 0.0, 0.0).unwrap_err();

    assert!(err.is_out_of_range());
    assert_eq!(fx.controller.transform(), before);
    assert_eq!(fx.log.count(), 1);
}
