//! Builder for constructing stores.

use super::handle::Store;
use super::middleware::Middleware;
use crate::core::Reducer;

/// Builder for constructing stores with a fluent API.
///
/// The initial state defaults to [`Reducer::initial_state`].
pub struct StoreBuilder<R: Reducer> {
    initial: Option<R::State>,
    middleware: Vec<Box<dyn Middleware<R>>>,
}

impl<R: Reducer> StoreBuilder<R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            middleware: Vec::new(),
        }
    }

    /// Seed the store with `state` instead of the reducer's initial state.
    pub fn initial(mut self, state: R::State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Append a middleware. Middleware runs in the order it was added.
    pub fn middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware<R> + 'static,
    {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Build the store.
    pub fn build(self) -> Store<R> {
        let initial = self.initial.unwrap_or_else(R::initial_state);
        Store::from_parts(initial, self.middleware)
    }
}

impl<R: Reducer> Default for StoreBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
