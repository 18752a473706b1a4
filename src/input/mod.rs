//! Pointer and gesture input handling for an interactive viewport.
//!
//! A host surface pushes gesture events into a [`ViewportInputController`],
//! which resolves the host's current [`crate::ToolMode`] and turns the event
//! into a pan or zoom of the [`ViewportTransform`].
//!
//! ## Modules
//!
//! - `controller` - Mode-keyed gesture dispatch and transform operations
//! - `gesture` - Gesture samples and their zoom/pan interpretation
//! - `transform` - Scale + translation state, zoom around a pivot
//! - `coords` - Screen/world coordinate conversion
//! - `surface` - Host surface contract and non-owning binding
//! - `mode` - Tool mode providers
//! - `observers` - Transform-changed listeners and snapshot publishing

pub mod coords;
mod controller;
mod gesture;
mod mode;
mod observers;
mod surface;
mod transform;

pub use controller::{GestureOutcome, ViewportInputController};
pub use gesture::{GestureEvent, GestureKind, ScrollDelta};
pub use mode::{ModeProvider, SharedMode};
pub use observers::{ListenerId, SharedTransform};
pub use surface::{ContentHandle, Surface};
pub use transform::ViewportTransform;
