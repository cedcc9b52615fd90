//! search-store: the lifecycle of a search as a reducer-driven state machine
//!
//! One immutable state value lives in a [`Store`](store::Store). It changes
//! only when an action is dispatched: a pure reducer maps the current state
//! and the action to the next state, the store swaps it in, and every
//! subscribed listener is called.
//!
//! # Modules
//!
//! - [`core`]: domain-free `State`, `Action` and `Reducer` traits, plus
//!   immutable transition history
//! - [`store`]: the store, subscriptions and middleware
//! - [`search`]: the search domain (`Form` → `Loading` → `Gallery`/`Failed`)
//! - [`demo`]: a scripted driver and its configuration
//! - [`logging`]: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use search_store::search::{GalleryItem, SearchAction, SearchReducer, SearchState};
//! use search_store::store::Store;
//!
//! let store = Store::<SearchReducer>::new();
//!
//! store.dispatch(SearchAction::search("dogs"));
//! store.dispatch(SearchAction::search_success(vec![
//!     GalleryItem::new("english-setter"),
//!     GalleryItem::new("irish-setter"),
//! ]));
//! store.dispatch(SearchAction::search("cats"));
//! store.dispatch(SearchAction::search_failure());
//!
//! assert_eq!(*store.state(), SearchState::failed());
//! ```

pub mod core;
pub mod demo;
pub mod logging;
pub mod search;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Action, Reducer, State, StateHistory, StateTransition};
pub use store::{Store, Subscription};
