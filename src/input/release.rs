//! Window-wide release listeners.
//!
//! A drag must end even when the pointer is released outside the matrix.
//! The application shell forwards every mouse up, touch end and touch cancel
//! to a [`ReleaseHub`]; each mounted matrix holds a [`ReleaseSubscription`]
//! for its lifetime and is deregistered when the subscription drops.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tracing::debug;

type Listener = Box<dyn FnMut() + Send>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: HashMap<u64, Listener>,
}

/// Fan-out point for global pointer releases.
#[derive(Clone, Default)]
pub struct ReleaseHub {
    inner: Arc<Mutex<HubInner>>,
}

impl ReleaseHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` until the returned subscription is dropped.
    ///
    /// Listeners run under the hub's lock and must not subscribe or drop
    /// subscriptions themselves.
    pub fn subscribe<F>(&self, listener: F) -> ReleaseSubscription
    where
        F: FnMut() + Send + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, Box::new(listener));
        debug!(id, "release listener registered");

        ReleaseSubscription {
            id,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver a pointer release to every live listener.
    pub fn notify_release(&self) {
        let mut inner = self.inner.lock();
        for listener in inner.listeners.values_mut() {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

/// Registration of one release listener; deregisters on drop.
#[must_use = "dropping the subscription deregisters the listener"]
pub struct ReleaseSubscription {
    id: u64,
    hub: Weak<Mutex<HubInner>>,
}

impl Drop for ReleaseSubscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.lock().listeners.remove(&self.id);
            debug!(id = self.id, "release listener removed");
        }
    }
}
