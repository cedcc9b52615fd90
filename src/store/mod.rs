//! The imperative shell around a [`Reducer`](crate::core::Reducer).
//!
//! A [`Store`] owns the single current state value. Callers
//! [`dispatch`](Store::dispatch) actions, read the state with
//! [`state`](Store::state) and [`subscribe`](Store::subscribe) zero-argument
//! listeners. [`Middleware`] sees each action with the state before and after
//! it, which is how dispatch logging ([`LoggerMiddleware`]) and history
//! recording ([`HistoryRecorder`]) are attached.
//!
//! ```text
//! dispatch(action) ──→ reduce ──→ state slot ──→ listeners ──→ middleware
//!        ↑                                           │
//!        └────────── queued if re-entrant ───────────┘
//! ```

mod builder;
mod handle;
mod listeners;
mod middleware;

pub use builder::StoreBuilder;
pub use handle::{Store, WeakStore};
pub use listeners::{Listener, Subscription};
pub use middleware::{HistoryRecorder, LoggerMiddleware, Middleware};
