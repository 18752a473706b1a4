//! Viewport input controller - gesture dispatch keyed on the active tool mode.
//!
//! ```text
//! surface event -> current_mode()
//!     Zoom   -> factor = exp(magnitude * sensitivity) -> apply_zoom(factor, position)
//!     Pan    -> translate by the event delta
//!     Select -> ignored, left for other consumers
//! ```
//!
//! The controller holds no mode state of its own; every transition comes
//! from the host's [`ModeProvider`]. It is the only writer of the
//! [`ViewportTransform`] and notifies listeners after every effective change.

use crate::error::{ViewportError, ViewportResult};
use crate::input::coords::CoordinateConverter;
use crate::input::gesture::GestureEvent;
use crate::input::mode::ModeProvider;
use crate::input::observers::{ListenerId, TransformListeners};
use crate::input::surface::{ContentHandle, Surface, SurfaceBinding};
use crate::input::transform::ViewportTransform;
use crate::profile_scope;
use crate::settings::ViewportSettings;
use crate::types::{Point, ToolMode};
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Result of dispatching one gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Not handled here: non-navigation mode or no bound surface
    Ignored,
    /// Handled, but the transform did not change (zero magnitude, scale at a bound)
    Unchanged,
    /// Scale changed around the event position
    Zoomed { scale: f64 },
    /// Translation changed
    Panned,
}

impl GestureOutcome {
    /// Returns true if the transform changed
    pub fn changed(&self) -> bool {
        matches!(self, Self::Zoomed { .. } | Self::Panned)
    }
}

pub struct ViewportInputController {
    settings: ViewportSettings,
    transform: ViewportTransform,
    mode_provider: Box<dyn ModeProvider>,
    binding: Option<SurfaceBinding>,
    listeners: TransformListeners,
}

impl ViewportInputController {
    /// Create a controller at the settings' initial scale.
    pub fn new(
        settings: ViewportSettings,
        mode_provider: impl ModeProvider + 'static,
    ) -> ViewportResult<Self> {
        settings.validate()?;
        let transform = ViewportTransform::new(settings.initial_scale, Point::ZERO);
        Ok(Self {
            settings,
            transform,
            mode_provider: Box::new(mode_provider),
            binding: None,
            listeners: TransformListeners::default(),
        })
    }

    /// Create a controller with default settings
    pub fn with_defaults(mode_provider: impl ModeProvider + 'static) -> Self {
        let settings = ViewportSettings::default();
        Self {
            transform: ViewportTransform::new(settings.initial_scale, Point::ZERO),
            settings,
            mode_provider: Box::new(mode_provider),
            binding: None,
            listeners: TransformListeners::default(),
        }
    }

    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    /// Current transform (a copy)
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    pub fn current_mode(&self) -> ToolMode {
        self.mode_provider.current_mode()
    }

    // ========================================================================
    // Surface binding
    // ========================================================================

    /// Observe `surface`, replacing any previous binding.
    ///
    /// Fails with `InvalidArgument` if the surface has no clickable content;
    /// the previous binding is kept in that case.
    pub fn bind_surface<S: Surface + 'static>(&mut self, surface: &Rc<S>) -> ViewportResult<()> {
        let surface: Rc<dyn Surface> = Rc::<S>::clone(surface);
        self.bind_dyn_surface(&surface)
    }

    /// [`Self::bind_surface`] for a type-erased handle, such as the one
    /// returned by [`Self::bound_surface`].
    pub fn bind_dyn_surface(&mut self, surface: &Rc<dyn Surface>) -> ViewportResult<()> {
        let binding = SurfaceBinding::new(surface).inspect_err(|e| {
            warn!("Rejected surface binding: {}", e);
        })?;
        let content = binding.content();
        match self.binding.replace(binding) {
            Some(previous) => debug!(from = %previous.content(), to = %content, "Rebound surface"),
            None => debug!(content = %content, "Bound surface"),
        }
        Ok(())
    }

    /// Drop the current binding. Returns true if there was one.
    pub fn unbind_surface(&mut self) -> bool {
        self.binding.take().is_some()
    }

    /// True while a surface is bound and still alive
    pub fn is_bound(&self) -> bool {
        self.binding.as_ref().is_some_and(SurfaceBinding::is_alive)
    }

    /// Content handle of the bound surface, if it is still alive
    pub fn bound_content(&self) -> Option<ContentHandle> {
        self.binding
            .as_ref()
            .filter(|b| b.is_alive())
            .map(SurfaceBinding::content)
    }

    pub fn bound_surface(&self) -> Option<Rc<dyn Surface>> {
        self.binding.as_ref().and_then(SurfaceBinding::upgrade)
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// Call `listener` with the new transform after every change
    pub fn subscribe(&mut self, listener: impl FnMut(&ViewportTransform) + 'static) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ========================================================================
    // Transform operations
    // ========================================================================

    /// Zoom by `factor` keeping the world point under the pivot fixed.
    ///
    /// The new scale is clamped to the configured bounds before the
    /// translation is adjusted. Returns true if the transform changed.
    pub fn apply_zoom(&mut self, factor: f64, pivot_x: f64, pivot_y: f64) -> ViewportResult<bool> {
        if !factor.is_finite() || factor <= 0.0 {
            warn!(factor, "Rejected zoom factor");
            return Err(ViewportError::OutOfRange(format!(
                "zoom factor must be finite and positive, got {factor}"
            )));
        }
        let pivot = Point::new(pivot_x, pivot_y);
        if !pivot.is_finite() {
            return Err(ViewportError::InvalidArgument(format!(
                "zoom pivot must be finite, got ({pivot_x}, {pivot_y})"
            )));
        }
        if factor == 1.0 {
            return Ok(false);
        }

        let requested = self.transform.scale * factor;
        let new_scale = self.settings.clamp_scale(requested);
        if new_scale != requested {
            debug!(requested, clamped = new_scale, "Zoom clamped to bounds");
        }

        let mut next = self.transform;
        if !next.zoom_around(new_scale, pivot) {
            return Ok(false);
        }
        if !next.is_valid() {
            return Err(ViewportError::OutOfRange(
                "zoom would move the translation out of finite range".to_string(),
            ));
        }
        self.commit(next);
        Ok(true)
    }

    /// Translate the view by a surface-local delta. Returns true if it moved.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> ViewportResult<bool> {
        let delta = Point::new(dx, dy);
        if !delta.is_finite() {
            return Err(ViewportError::InvalidArgument(format!(
                "pan delta must be finite, got ({dx}, {dy})"
            )));
        }
        let mut next = self.transform;
        if !next.pan_by(delta) {
            return Ok(false);
        }
        if !next.is_valid() {
            return Err(ViewportError::OutOfRange(
                "pan would move the translation out of finite range".to_string(),
            ));
        }
        self.commit(next);
        Ok(true)
    }

    /// Zoom in one step around `pivot`
    pub fn zoom_in(&mut self, pivot: Point) -> ViewportResult<bool> {
        self.apply_zoom(self.settings.zoom_step, pivot.x, pivot.y)
    }

    /// Zoom out one step around `pivot`
    pub fn zoom_out(&mut self, pivot: Point) -> ViewportResult<bool> {
        self.apply_zoom(1.0 / self.settings.zoom_step, pivot.x, pivot.y)
    }

    /// Return to the initial scale with no translation
    pub fn reset(&mut self) -> bool {
        let initial = ViewportTransform::new(self.settings.initial_scale, Point::ZERO);
        if self.transform == initial {
            return false;
        }
        self.commit(initial);
        true
    }

    pub fn screen_to_world(&self, screen_pos: Point) -> Point {
        CoordinateConverter::screen_to_world(screen_pos, &self.transform)
    }

    pub fn world_to_screen(&self, world_pos: Point) -> Point {
        CoordinateConverter::world_to_screen(world_pos, &self.transform)
    }

    // ========================================================================
    // Gesture dispatch
    // ========================================================================

    /// Interpret one gesture according to the current tool mode.
    pub fn on_gesture(&mut self, event: GestureEvent) -> ViewportResult<GestureOutcome> {
        profile_scope!("on_gesture");

        if !self.is_bound() {
            trace!(kind = event.kind_name(), "Gesture with no bound surface");
            return Ok(GestureOutcome::Ignored);
        }
        let mode = self.current_mode();
        if !mode.is_navigation() {
            trace!(kind = event.kind_name(), mode = %mode, "Gesture left for other consumers");
            return Ok(GestureOutcome::Ignored);
        }
        if !event.is_finite() {
            warn!(kind = event.kind_name(), mode = %mode, "Rejected non-finite gesture");
            return Err(ViewportError::InvalidArgument(format!(
                "gesture carries non-finite values: {event:?}"
            )));
        }
        trace!(kind = event.kind_name(), mode = %mode, x = event.position.x, y = event.position.y, "Gesture");

        let outcome = match mode {
            ToolMode::Zoom => {
                let exponent = event.zoom_exponent(&self.settings);
                if exponent == 0.0 {
                    GestureOutcome::Unchanged
                } else {
                    // exp() saturates to 0 or inf for extreme input; keep it a valid factor
                    let factor = exponent.exp().clamp(f64::MIN_POSITIVE, f64::MAX);
                    if self.apply_zoom(factor, event.position.x, event.position.y)? {
                        GestureOutcome::Zoomed {
                            scale: self.transform.scale,
                        }
                    } else {
                        GestureOutcome::Unchanged
                    }
                }
            }
            ToolMode::Pan => {
                let delta = event.pan_delta(&self.settings);
                if self.pan_by(delta.x, delta.y)? {
                    GestureOutcome::Panned
                } else {
                    GestureOutcome::Unchanged
                }
            }
            ToolMode::Select => GestureOutcome::Ignored,
        };
        Ok(outcome)
    }

    fn commit(&mut self, next: ViewportTransform) {
        debug_assert!(
            (self.settings.min_scale..=self.settings.max_scale).contains(&next.scale),
            "scale {} escaped [{}, {}]",
            next.scale,
            self.settings.min_scale,
            self.settings.max_scale
        );
        debug_assert!(next.translation.is_finite());
        self.transform = next;
        self.listeners.notify(&next);
    }
}
