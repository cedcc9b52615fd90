//! Core Action trait for dispatched events.

use serde::Serialize;
use std::fmt::Debug;

/// Trait for actions dispatched to a store.
///
/// Actions are immutable descriptions of something that happened. They are
/// built by the caller, handed to the reducer once, and then dropped. The
/// store lends them to middleware by reference, so they only need to be
/// serializable, not deserializable.
///
/// # Example
///
/// ```rust
/// use search_store::core::Action;
/// use serde::Serialize;
///
/// #[derive(Clone, Debug, Serialize)]
/// enum CounterAction {
///     Add { amount: i64 },
///     Reset,
/// }
///
/// impl Action for CounterAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Add { .. } => "Add",
///             Self::Reset => "Reset",
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Add { amount: 2 }.name(), "Add");
/// ```
pub trait Action: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Get the action's tag for display/logging.
    fn name(&self) -> &str;
}
