//! Host surface contract.
//!
//! The host UI owns the interactive region; the controller only keeps a
//! non-owning reference to it.

use crate::error::{ViewportError, ViewportResult};
use std::fmt;
use std::rc::{Rc, Weak};

/// Opaque identifier for the clickable content region of a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentHandle(pub u64);

impl fmt::Display for ContentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content#{}", self.0)
    }
}

/// An interactive region that raises gesture events.
///
/// `clickable_content` returns the region pointer input should be observed
/// on, or `None` while the surface is not attached to anything.
pub trait Surface {
    fn clickable_content(&self) -> Option<ContentHandle>;
}

/// A validated, non-owning surface binding
pub(crate) struct SurfaceBinding {
    surface: Weak<dyn Surface>,
    content: ContentHandle,
}

impl SurfaceBinding {
    /// Validate `surface` and downgrade it. Fails if it has no clickable content.
    pub(crate) fn new(surface: &Rc<dyn Surface>) -> ViewportResult<Self> {
        let content = surface.clickable_content().ok_or_else(|| {
            ViewportError::InvalidArgument("surface has no clickable content to bind".to_string())
        })?;
        Ok(Self {
            surface: Rc::downgrade(surface),
            content,
        })
    }

    pub(crate) fn content(&self) -> ContentHandle {
        self.content
    }

    /// The surface if the host still holds it
    pub(crate) fn upgrade(&self) -> Option<Rc<dyn Surface>> {
        self.surface.upgrade()
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.surface.strong_count() > 0
    }
}
