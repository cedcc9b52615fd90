//! Core store types and logic.
//!
//! This module contains the domain-free, pure part of the crate:
//! - State definitions via the `State` trait
//! - Action definitions via the `Action` trait
//! - The `Reducer` trait, a pure `(state, action) -> state` function
//! - Immutable history tracking
//!
//! Nothing in this module has side effects. The [`store`](crate::store)
//! module is the imperative shell that owns a state and runs a reducer.

mod action;
mod history;
mod reducer;
mod state;

pub use action::Action;
pub use history::{StateHistory, StateTransition};
pub use reducer::Reducer;
pub use state::State;
