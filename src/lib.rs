//! Interactive viewport input: pointer and gesture driven pan/zoom for a
//! canvas owned by a host UI.

pub mod constants;
pub mod error;
pub mod input;
pub mod perf;
pub mod settings;
pub mod types;

pub use error::{ViewportError, ViewportResult};
pub use input::{
    ContentHandle, GestureEvent, GestureKind, GestureOutcome, ListenerId, ModeProvider,
    ScrollDelta, SharedMode, SharedTransform, Surface, ViewportInputController,
    ViewportTransform,
};
pub use settings::{ViewportSettings, default_settings_path};
pub use types::{Point, ToolMode};
