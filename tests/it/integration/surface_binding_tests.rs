//! Surface binding lifecycle.

use crate::helpers::{init_tracing, TestSurface};
use std::rc::Rc;
use viewport_input::{
    ContentHandle, GestureEvent, GestureOutcome, Point, Surface, ToolMode, ViewportInputController,
};

#[test]
fn test_detached_surface_rejected() {
    init_tracing();
    let mut controller = ViewportInputController::with_defaults(ToolMode::Pan);
    let err = controller.bind_surface(&TestSurface::detached()).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(!controller.is_bound());
}

#[test]
fn test_failed_bind_keeps_previous_binding() {
    init_tracing();
    let mut controller = ViewportInputController::with_defaults(ToolMode::Pan);
    let first = TestSurface::attached(7);
    controller.bind_surface(&first).unwrap();

    assert!(controller.bind_surface(&TestSurface::detached()).is_err());
    assert_eq!(controller.bound_content(), Some(ContentHandle(7)));
}

#[test]
fn test_rebind_replaces_without_touching_old_surface() {
    init_tracing();
    let mut controller = ViewportInputController::with_defaults(ToolMode::Pan);
    let first = TestSurface::attached(1);
    let second = TestSurface::attached(2);

    controller.bind_surface(&first).unwrap();
    controller.bind_surface(&second).unwrap();

    assert_eq!(controller.bound_content(), Some(ContentHandle(2)));
    assert_eq!(first.clickable_content(), Some(ContentHandle(1)));
    // Binding is non-owning
    assert_eq!(Rc::strong_count(&first), 1);
    assert_eq!(Rc::strong_count(&second), 1);
}

#[test]
fn test_dropped_surface_reads_unbound() {
    init_tracing();
    let mut controller = ViewportInputController::with_defaults(ToolMode::Pan);
    let surface = TestSurface::attached(3);
    controller.bind_surface(&surface).unwrap();
    assert!(controller.bound_surface().is_some());

    drop(surface);

    assert!(!controller.is_bound());
    assert_eq!(controller.bound_content(), None);
    assert!(controller.bound_surface().is_none());
    let outcome = controller
        .on_gesture(GestureEvent::drag(10.0, 10.0, Point::ZERO))
        .unwrap();
    assert_eq!(outcome, GestureOutcome::Ignored);
}

#[test]
fn test_unbind_surface() {
    init_tracing();
    let mut controller = ViewportInputController::with_defaults(ToolMode::Pan);
    let surface = TestSurface::attached(4);
    controller.bind_surface(&surface).unwrap();

    assert!(controller.unbind_surface());
    assert!(!controller.unbind_surface());
    assert!(!controller.is_bound());
}

#[test]
fn test_surface_detached_after_binding_still_bound() {
    init_tracing();
    let mut controller = ViewportInputController::with_defaults(ToolMode::Pan);
    let surface = TestSurface::attached(5);
    controller.bind_surface(&surface).unwrap();
    surface.detach();

    // The binding was validated when made; later host state does not revoke it
    assert_eq!(controller.bound_content(), Some(ContentHandle(5)));
    assert!(controller.bind_surface(&surface).is_err());
    assert_eq!(controller.bound_content(), Some(ContentHandle(5)));
}

#[test]
fn test_bind_type_erased_surface() {
    init_tracing();
    let mut first_controller = ViewportInputController::with_defaults(ToolMode::Pan);
    let surface = TestSurface::attached(9);
    first_controller.bind_surface(&surface).unwrap();

    let erased = first_controller.bound_surface().unwrap();
    let mut second_controller = ViewportInputController::with_defaults(ToolMode::Pan);
    second_controller.bind_dyn_surface(&erased).unwrap();
    drop(erased);

    assert_eq!(second_controller.bound_content(), Some(ContentHandle(9)));
    assert_eq!(Rc::strong_count(&surface), 1);
}

#[test]
fn test_bind_type_erased_detached_surface_rejected() {
    init_tracing();
    let mut controller = ViewportInputController::with_defaults(ToolMode::Pan);
    let kept = TestSurface::attached(2);
    controller.bind_surface(&kept).unwrap();

    let detached: Rc<dyn Surface> = TestSurface::detached();
    let err = controller.bind_dyn_surface(&detached).unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(controller.bound_content(), Some(ContentHandle(2)));
}
