//! Dispatch history tracking.
//!
//! Provides an immutable record of the transitions a store went through,
//! used for diagnostics only. Nothing in the crate feeds a history back into
//! a store.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single processed dispatch.
///
/// Identity transitions (an action the current state ignores) are recorded
/// too, with `from == to`.
///
/// # Example
///
/// ```rust
/// use search_store::core::StateTransition;
/// use search_store::search::SearchState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: SearchState::form(),
///     to: SearchState::loading("dogs"),
///     action: "Search".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_identity());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state before the action was applied
    pub from: S,
    /// The state after the action was applied
    pub to: S,
    /// Tag of the action that caused the transition
    pub action: String,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// True when the action left the state unchanged.
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of transitions.
///
/// History is immutable - `record` returns a new history with the transition
/// appended and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use search_store::core::{StateHistory, StateTransition};
/// use search_store::search::SearchState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: SearchState::form(),
///         to: SearchState::loading("dogs"),
///         action: "Search".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: SearchState::loading("dogs"),
///         to: SearchState::failed(),
///         action: "SearchFailure".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Form -> Loading -> Failed
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// Copies the existing transitions; use [`push`](Self::push) to grow a
    /// history in place.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append `transition` in place, dropping the oldest entries beyond `limit`.
    ///
    /// Unlike [`record`](Self::record) this does not copy the history, so a
    /// long-lived recorder pays amortized O(1) per dispatch.
    pub fn push(&mut self, transition: StateTransition<S>, limit: Option<usize>) {
        self.transitions.push(transition);
        if let Some(limit) = limit {
            let excess = self.transitions.len().saturating_sub(limit);
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the first
    /// transition, then the `to` state of each transition. Identity
    /// transitions show up as repeated entries.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
