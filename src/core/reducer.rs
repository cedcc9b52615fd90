//! Reducer trait: the pure transition function of a store.

use super::action::Action;
use super::state::State;

/// Reducer transforms a state based on an action.
///
/// The reducer is the only place where state transitions happen. It must be a
/// pure function: `(&State, &Action) -> State`, total over every pair of
/// state and action. Pairs that have no meaning return the input state
/// unchanged.
///
/// Reducers are zero-sized marker types; a [`Store`](crate::store::Store) is
/// parameterized by one.
///
/// # Example
///
/// ```rust
/// use search_store::core::{Action, Reducer, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Count(i64);
///
/// impl State for Count {
///     fn name(&self) -> &str { "Count" }
/// }
///
/// #[derive(Clone, Debug, Serialize)]
/// enum Step { Up, Down }
///
/// impl Action for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::Up => "Up",
///             Self::Down => "Down",
///         }
///     }
/// }
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = Count;
///     type Action = Step;
///
///     fn initial_state() -> Count {
///         Count(0)
///     }
///
///     fn reduce(state: &Count, action: &Step) -> Count {
///         match action {
///             Step::Up => Count(state.0 + 1),
///             Step::Down => Count(state.0 - 1),
///         }
///     }
/// }
///
/// let next = Counter::reduce(&Counter::initial_state(), &Step::Up);
/// assert_eq!(next, Count(1));
/// ```
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// The state a fresh store is seeded with.
    fn initial_state() -> Self::State;

    /// Compute the next state.
    ///
    /// Must not mutate anything or depend on anything besides its arguments.
    fn reduce(state: &Self::State, action: &Self::Action) -> Self::State;
}
