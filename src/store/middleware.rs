//! Observers that see every processed action together with its outcome.

use crate::core::{Action, Reducer, State, StateHistory, StateTransition};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;

/// Hook run by the store once per processed action.
///
/// Middleware runs after the state slot holds the new state and after the
/// listeners were notified, in registration order. It only observes; it
/// cannot alter the action or the resulting state. Dispatching to the same
/// store from middleware is allowed and is queued like a dispatch from a
/// listener.
pub trait Middleware<R: Reducer>: Send + Sync {
    fn after_dispatch(&self, action: &R::Action, previous: &R::State, next: &R::State);
}

/// Logs every dispatch through `tracing`.
///
/// Emits one INFO event per processed action carrying the action and the next
/// state as JSON. An action the current state ignores is logged too, with
/// `changed = false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerMiddleware;

impl<R: Reducer> Middleware<R> for LoggerMiddleware {
    fn after_dispatch(&self, action: &R::Action, previous: &R::State, next: &R::State) {
        tracing::info!(
            action = %to_json(action),
            next_state = %to_json(next),
            previous = previous.name(),
            changed = previous != next,
            pending = next.is_pending(),
            error = next.is_error(),
            "dispatched {}",
            action.name()
        );
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

/// Records every processed action into a [`StateHistory`].
///
/// Clones share the same history, so one clone can be installed into a store
/// while another is kept to inspect what happened.
///
/// # Example
///
/// ```rust
/// use search_store::search::{SearchAction, SearchReducer, SearchState};
/// use search_store::store::{HistoryRecorder, Store};
///
/// let recorder = HistoryRecorder::<SearchState>::new();
/// let store = Store::<SearchReducer>::builder()
///     .middleware(recorder.clone())
///     .build();
///
/// store.dispatch(SearchAction::search("dogs"));
/// store.dispatch(SearchAction::search_failure());
///
/// let history = recorder.history();
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path().last(), Some(&&SearchState::failed()));
/// ```
pub struct HistoryRecorder<S: State> {
    history: Arc<Mutex<StateHistory<S>>>,
    capacity: Option<usize>,
}

impl<S: State> HistoryRecorder<S> {
    /// Recorder that keeps every transition.
    pub fn new() -> Self {
        Self {
            history: Arc::new(Mutex::new(StateHistory::new())),
            capacity: None,
        }
    }

    /// Recorder that keeps only the newest `capacity` transitions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Arc::new(Mutex::new(StateHistory::new())),
            capacity: Some(capacity),
        }
    }

    /// Snapshot of everything recorded so far.
    pub fn history(&self) -> StateHistory<S> {
        self.history.lock().clone()
    }
}

impl<S: State> Default for HistoryRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Clone for HistoryRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            history: Arc::clone(&self.history),
            capacity: self.capacity,
        }
    }
}

impl<R: Reducer> Middleware<R> for HistoryRecorder<R::State> {
    fn after_dispatch(&self, action: &R::Action, previous: &R::State, next: &R::State) {
        let transition = StateTransition {
            from: previous.clone(),
            to: next.clone(),
            action: action.name().to_string(),
            timestamp: Utc::now(),
        };
        self.history.lock().push(transition, self.capacity);
    }
}
