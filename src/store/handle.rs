//! The store: owner of the current state.

use super::builder::StoreBuilder;
use super::listeners::{Listeners, Subscription};
use super::middleware::Middleware;
use crate::core::{Action, Reducer};
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};
use uuid::Uuid;

/// Actions waiting to be processed, plus whether a thread is processing them.
struct DispatchQueue<A> {
    draining: bool,
    pending: VecDeque<A>,
}

struct Shared<R: Reducer> {
    id: Uuid,
    state: RwLock<Arc<R::State>>,
    listeners: Arc<Mutex<Listeners>>,
    middleware: Vec<Box<dyn Middleware<R>>>,
    queue: ReentrantMutex<RefCell<DispatchQueue<R::Action>>>,
    _reducer: PhantomData<fn() -> R>,
}

/// Holds one state value and replaces it on every dispatch.
///
/// A `Store` is a cheap handle: clones refer to the same store. There is no
/// global store; every [`Store::new`] creates an independent one.
///
/// # Dispatch
///
/// [`dispatch`](Store::dispatch) is synchronous. It runs the reducer, stores
/// the result, notifies listeners in registration order and then runs
/// middleware, before returning.
///
/// Dispatches are serialized. A dispatch from another thread waits until the
/// one in progress is complete. A dispatch issued from inside a listener or
/// middleware of this store (on the dispatching thread) is queued and
/// processed after the current notification round, before the outermost
/// `dispatch` returns. When that call returns, the state reflects every queued
/// action and the last notification round saw that final state.
///
/// # Example
///
/// ```rust
/// use search_store::search::{SearchAction, SearchReducer, SearchState};
/// use search_store::store::Store;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let store = Store::<SearchReducer>::new();
/// assert_eq!(*store.state(), SearchState::form());
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let subscription = store.subscribe(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// store.dispatch(SearchAction::search("dogs"));
/// assert_eq!(*store.state(), SearchState::loading("dogs"));
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
///
/// subscription.unsubscribe();
/// store.dispatch(SearchAction::search_failure());
/// assert_eq!(*store.state(), SearchState::failed());
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct Store<R: Reducer> {
    shared: Arc<Shared<R>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store seeded with the reducer's initial state.
    pub fn new() -> Self {
        Self::with_state(R::initial_state())
    }

    /// Create a store seeded with `initial`.
    pub fn with_state(initial: R::State) -> Self {
        Self::from_parts(initial, Vec::new())
    }

    pub fn builder() -> StoreBuilder<R> {
        StoreBuilder::new()
    }

    pub(crate) fn from_parts(initial: R::State, middleware: Vec<Box<dyn Middleware<R>>>) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(store = %id, state = ?initial, "store created");

        Self {
            shared: Arc::new(Shared {
                id,
                state: RwLock::new(Arc::new(initial)),
                listeners: Arc::new(Mutex::new(Listeners::default())),
                middleware,
                queue: ReentrantMutex::new(RefCell::new(DispatchQueue {
                    draining: false,
                    pending: VecDeque::new(),
                })),
                _reducer: PhantomData,
            }),
        }
    }

    /// Identifier of this store, used to tell instances apart in logs.
    pub fn id(&self) -> Uuid {
        self.shared.id
    }

    /// Current state, as left by the most recently completed transition.
    pub fn state(&self) -> Arc<R::State> {
        Arc::clone(&*self.shared.state.read())
    }

    /// Apply `action` to the current state and notify listeners.
    pub fn dispatch(&self, action: R::Action) {
        let guard = self.shared.queue.lock();
        {
            let mut queue = guard.borrow_mut();
            queue.pending.push_back(action);
            if queue.draining {
                tracing::trace!(
                    store = %self.shared.id,
                    queued = queue.pending.len(),
                    "re-entrant dispatch queued"
                );
                return;
            }
            queue.draining = true;
        }

        let _reset = DrainReset { queue: &*guard };
        loop {
            let next = guard.borrow_mut().pending.pop_front();
            match next {
                Some(action) => self.process(action),
                None => break,
            }
        }
    }

    /// Register `listener` to run after every dispatch.
    ///
    /// Listeners take no arguments; read the new state with
    /// [`state`](Store::state) through a captured handle. Capture a
    /// [`WeakStore`] to avoid keeping the store alive from its own listener.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        Listeners::subscribe(&self.shared.listeners, Arc::new(listener))
    }

    /// Number of listeners currently subscribed.
    pub fn listener_count(&self) -> usize {
        self.shared.listeners.lock().len()
    }

    pub fn downgrade(&self) -> WeakStore<R> {
        WeakStore {
            shared: Arc::downgrade(&self.shared),
        }
    }

    fn process(&self, action: R::Action) {
        let span = tracing::debug_span!(
            "dispatch",
            store = %self.shared.id,
            action = action.name()
        );
        let _entered = span.enter();

        let (previous, next) = {
            let mut slot = self.shared.state.write();
            let previous = Arc::clone(&*slot);
            let next = Arc::new(R::reduce(&previous, &action));
            *slot = Arc::clone(&next);
            (previous, next)
        };

        let pending = self.shared.listeners.lock().snapshot();
        let notified = pending.iter().filter(|listener| listener.notify()).count();
        tracing::trace!(notified, "listeners notified");

        for middleware in &self.shared.middleware {
            middleware.after_dispatch(&action, &previous, &next);
        }
    }
}

/// Clears the dispatch queue when draining ends, including by panic, so the
/// store keeps accepting dispatches.
struct DrainReset<'a, A> {
    queue: &'a RefCell<DispatchQueue<A>>,
}

impl<A> Drop for DrainReset<'_, A> {
    fn drop(&mut self) {
        let mut queue = self.queue.borrow_mut();
        queue.draining = false;
        queue.pending.clear();
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Reducer> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("id", &self.shared.id)
            .field("state", &self.state())
            .finish()
    }
}

/// Non-owning handle to a [`Store`].
pub struct WeakStore<R: Reducer> {
    shared: Weak<Shared<R>>,
}

impl<R: Reducer> WeakStore<R> {
    /// Returns `None` once every [`Store`] handle was dropped.
    pub fn upgrade(&self) -> Option<Store<R>> {
        self.shared.upgrade().map(|shared| Store { shared })
    }
}

impl<R: Reducer> Clone for WeakStore<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}
