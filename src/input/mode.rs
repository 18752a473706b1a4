//! Tool mode providers.
//!
//! Mode selection is host policy. The controller only reads the current mode
//! on every gesture and never changes it.

use crate::types::ToolMode;
use std::cell::Cell;
use std::rc::Rc;

/// Source of the currently active tool mode
pub trait ModeProvider {
    fn current_mode(&self) -> ToolMode;
}

impl<F> ModeProvider for F
where
    F: Fn() -> ToolMode,
{
    fn current_mode(&self) -> ToolMode {
        self()
    }
}

/// A fixed mode
impl ModeProvider for ToolMode {
    fn current_mode(&self) -> ToolMode {
        *self
    }
}

/// Shared, host-writable mode cell.
///
/// Clones share the same value, so a toolbar can hold one clone and hand
/// another to the controller.
#[derive(Clone, Debug, Default)]
pub struct SharedMode(Rc<Cell<ToolMode>>);

impl SharedMode {
    pub fn new(mode: ToolMode) -> Self {
        Self(Rc::new(Cell::new(mode)))
    }

    pub fn get(&self) -> ToolMode {
        self.0.get()
    }

    pub fn set(&self, mode: ToolMode) {
        self.0.set(mode);
    }
}

impl ModeProvider for SharedMode {
    fn current_mode(&self) -> ToolMode {
        self.get()
    }
}
