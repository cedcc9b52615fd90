//! Listener registry and subscription handles.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Zero-argument callback run after every dispatch.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

struct Entry {
    id: u64,
    active: Arc<AtomicBool>,
    callback: Listener,
}

/// Registered listeners, in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

/// One listener captured for a notification round.
pub(crate) struct Pending {
    active: Arc<AtomicBool>,
    callback: Listener,
}

impl Pending {
    /// Run the listener unless it was unsubscribed after the round started.
    pub(crate) fn notify(&self) -> bool {
        if !self.active.load(Ordering::Acquire) {
            return false;
        }
        (self.callback)();
        true
    }
}

impl Listeners {
    pub(crate) fn subscribe(registry: &Arc<Mutex<Self>>, callback: Listener) -> Subscription {
        let active = Arc::new(AtomicBool::new(true));
        let mut listeners = registry.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push(Entry {
            id,
            active: Arc::clone(&active),
            callback,
        });

        Subscription {
            id,
            active,
            registry: Arc::downgrade(registry),
        }
    }

    /// Copy of the current listener list.
    ///
    /// Listeners subscribed after the snapshot are not part of it; listeners
    /// unsubscribed after the snapshot are skipped by [`Pending::notify`].
    pub(crate) fn snapshot(&self) -> Vec<Pending> {
        self.entries
            .iter()
            .map(|entry| Pending {
                active: Arc::clone(&entry.active),
                callback: Arc::clone(&entry.callback),
            })
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

/// Handle returned by [`Store::subscribe`](crate::store::Store::subscribe).
///
/// Dropping the handle does not unsubscribe; call
/// [`unsubscribe`](Subscription::unsubscribe).
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    active: Arc<AtomicBool>,
    registry: Weak<Mutex<Listeners>>,
}

impl Subscription {
    /// Stop notifying this listener.
    ///
    /// Takes effect immediately, including for a notification round that is
    /// currently running and has not reached the listener yet. Calling it
    /// again is a no-op.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().remove(self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}
