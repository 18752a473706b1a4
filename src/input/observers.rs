//! Transform-changed notification.
//!
//! Listeners run synchronously on the event thread, in subscription order.
//! Renderers on another thread read through [`SharedTransform`], which only
//! ever hands out value copies.

use crate::input::transform::ViewportTransform;
use parking_lot::RwLock;
use std::sync::Arc;

/// Identifies a subscription for later removal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ViewportTransform)>;

#[derive(Default)]
pub(crate) struct TransformListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl TransformListeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn notify(&mut self, transform: &ViewportTransform) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(transform);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

/// Thread-safe holder of the latest published transform.
///
/// Subscribe [`SharedTransform::listener`] on the event thread and call
/// [`SharedTransform::snapshot`] from the render thread.
#[derive(Clone, Debug, Default)]
pub struct SharedTransform {
    inner: Arc<RwLock<ViewportTransform>>,
}

impl SharedTransform {
    pub fn new(initial: ViewportTransform) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Copy of the most recently published transform
    pub fn snapshot(&self) -> ViewportTransform {
        *self.inner.read()
    }

    /// Replace the published transform
    pub fn publish(&self, transform: ViewportTransform) {
        *self.inner.write() = transform;
    }

    /// A listener that publishes every change into this holder
    pub fn listener(&self) -> impl FnMut(&ViewportTransform) + use<> {
        let shared = self.clone();
        move |transform| shared.publish(*transform)
    }
}
