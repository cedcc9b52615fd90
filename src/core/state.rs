//! Core State trait for store states.
//!
//! Every value held by a [`Store`](crate::store::Store) implements this trait,
//! which provides pure methods for inspecting a state without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for store states.
///
/// All methods are pure - no side effects. States are immutable values that
/// describe the current phase of the machine; a transition always produces a
/// new value.
///
/// # Required Traits
///
/// - `Clone`: reducers return the input state unchanged on no-op transitions
/// - `PartialEq`: states are compared to detect identity transitions
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states are logged as JSON
/// - `Send` + `Sync`: a store may be shared across threads
///
/// # Example
///
/// ```rust
/// use search_store::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum UploadState {
///     Idle,
///     Uploading { file: String },
///     Rejected,
/// }
///
/// impl State for UploadState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Uploading { .. } => "Uploading",
///             Self::Rejected => "Rejected",
///         }
///     }
///
///     fn is_pending(&self) -> bool {
///         matches!(self, Self::Uploading { .. })
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Rejected)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's tag for display/logging.
    fn name(&self) -> &str;

    /// Check if this state is waiting on an outside operation.
    ///
    /// Default implementation returns `false`.
    fn is_pending(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Error states record that the most recent operation failed. They are
    /// not terminal; a later action may move the machine on.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Working { job: u32 },
        Broken,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Working { .. } => "Working",
                Self::Broken => "Broken",
            }
        }

        fn is_pending(&self) -> bool {
            matches!(self, Self::Working { .. })
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Plain;

    impl State for Plain {
        fn name(&self) -> &str {
            "Plain"
        }
    }

    #[test]
    fn state_name_ignores_payload() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Working { job: 1 }.name(), "Working");
        assert_eq!(TestState::Working { job: 2 }.name(), "Working");
        assert_eq!(TestState::Broken.name(), "Broken");
    }

    #[test]
    fn predicates_classify_states() {
        assert!(!TestState::Idle.is_pending());
        assert!(TestState::Working { job: 7 }.is_pending());
        assert!(!TestState::Broken.is_pending());

        assert!(!TestState::Idle.is_error());
        assert!(!TestState::Working { job: 7 }.is_error());
        assert!(TestState::Broken.is_error());
    }

    #[test]
    fn default_predicates_are_false() {
        assert!(!Plain.is_pending());
        assert!(!Plain.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Working { job: 3 };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
