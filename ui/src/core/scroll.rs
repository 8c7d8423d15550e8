//! Scroll offset broadcasting between the page's scroll container and the
//! components that style themselves by it.
//!
//! The layout that owns the scrollable element creates one [`ScrollHandle`]
//! and passes it down explicitly. Listeners register with
//! [`ScrollHandle::subscribe`] and stay registered until the returned
//! [`ScrollSubscription`] is cancelled or dropped.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`), like the UI runtime.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Listener = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

#[derive(Default)]
struct Shared {
    offset: Cell<f64>,
    registry: RefCell<Registry>,
}

/// Shared handle to one scrollable container's vertical offset.
#[derive(Clone, Default)]
pub struct ScrollHandle {
    shared: Rc<Shared>,
}

impl ScrollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last offset dispatched (0 before the first scroll).
    pub fn offset(&self) -> f64 {
        self.shared.offset.get()
    }

    pub fn listener_count(&self) -> usize {
        self.shared.registry.borrow().listeners.len()
    }

    pub fn subscribe(&self, listener: impl Fn(f64) + 'static) -> ScrollSubscription {
        let mut registry = self.shared.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        tracing::debug!(id, "scroll listener registered");

        ScrollSubscription {
            id,
            handle: self.clone(),
            active: Cell::new(true),
        }
    }

    /// Record a new offset and notify every registered listener.
    pub fn dispatch(&self, offset: f64) {
        self.shared.offset.set(offset);
        // Snapshot so listeners may subscribe or cancel while being notified.
        let listeners: Vec<Listener> = self
            .shared
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(offset);
        }
    }

    fn remove(&self, id: u64) {
        let mut registry = self.shared.registry.borrow_mut();
        registry.listeners.retain(|(lid, _)| *lid != id);
        tracing::debug!(id, "scroll listener removed");
    }
}

impl PartialEq for ScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl fmt::Debug for ScrollHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollHandle")
            .field("offset", &self.offset())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registration guard returned by [`ScrollHandle::subscribe`].
pub struct ScrollSubscription {
    id: u64,
    handle: ScrollHandle,
    active: Cell<bool>,
}

impl ScrollSubscription {
    /// Deregister the listener. Later calls are no-ops.
    pub fn cancel(&self) {
        if self.active.replace(false) {
            self.handle.remove(self.id);
        }
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
