//! The search lifecycle: actions, states, transition function and rendering.
//!
//! `Search` moves any state to `Loading`; while loading, `SearchSuccess`
//! settles on `Gallery` and `SearchFailure` on `Failed`. Nothing returns to
//! `Form`.
//!
//! # Example
//!
//! ```rust
//! use search_store::search::{self, render, GalleryItem, SearchAction};
//!
//! let store = search::configure_store();
//! assert_eq!(render(&store.state()), "Form");
//!
//! store.dispatch(SearchAction::search("dogs"));
//! store.dispatch(SearchAction::search_success(vec![
//!     GalleryItem::new("english-setter"),
//!     GalleryItem::new("irish-setter"),
//! ]));
//! assert_eq!(render(&store.state()), "Results: 2");
//! ```

mod action;
mod item;
mod reducer;
mod render;
mod state;

pub use action::SearchAction;
pub use item::GalleryItem;
pub use reducer::{transition, SearchReducer};
pub use render::render;
pub use state::SearchState;

use crate::store::{LoggerMiddleware, Store, StoreBuilder};

/// Create a fresh search store with dispatch logging installed.
///
/// Every call returns an independent store.
pub fn configure_store() -> Store<SearchReducer> {
    store_builder().build()
}

/// Builder preloaded with the [`configure_store`] middleware, for callers
/// that want to append their own.
pub fn store_builder() -> StoreBuilder<SearchReducer> {
    Store::builder().middleware(LoggerMiddleware)
}
