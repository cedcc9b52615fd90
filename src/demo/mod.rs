//! Scripted driver that plays a fixed sequence of actions against a store.
//!
//! The driver stands in for an application whose searches complete after
//! some time: it waits between dispatches, but the waiting happens here, in
//! the caller. The store itself never sleeps.

mod config;

pub use config::{ConfigError, DemoConfig, MAX_STEP_DELAY_MS};

use crate::core::State;
use crate::search::{SearchReducer, SearchState};
use crate::store::Store;
use std::sync::Arc;

/// Dispatch every step of `config` in order and return the final state.
///
/// There is no delay before the first step; `config.step_delay()` is awaited
/// between consecutive steps.
pub async fn run(store: &Store<SearchReducer>, config: &DemoConfig) -> Arc<SearchState> {
    let initial = store.state();
    tracing::info!(store = %store.id(), state = ?initial, "initial state");

    for (index, action) in config.steps.iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(config.step_delay()).await;
        }
        store.dispatch(action.clone());
    }

    let last = store.state();
    tracing::info!(
        steps = config.steps.len(),
        state = last.name(),
        pending = last.is_pending(),
        error = last.is_error(),
        "script finished"
    );
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{render, SearchAction};
    use parking_lot::Mutex;

    fn instant(steps: Vec<SearchAction>) -> DemoConfig {
        DemoConfig {
            step_delay_ms: 0,
            steps,
        }
    }

    #[tokio::test]
    async fn default_script_ends_failed() {
        let store = Store::<SearchReducer>::new();
        let config = DemoConfig {
            step_delay_ms: 0,
            ..DemoConfig::default()
        };

        let frames = Arc::new(Mutex::new(Vec::new()));
        let weak = store.downgrade();
        let sink = Arc::clone(&frames);
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                sink.lock().push(render(&store.state()));
            }
        });

        let last = run(&store, &config).await;

        assert_eq!(*last, SearchState::failed());
        assert_eq!(
            *frames.lock(),
            vec![
                "Loading results for dogs".to_string(),
                "Results: 2".to_string(),
                "Loading results for cats".to_string(),
                "Failed".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn run_returns_state_after_last_step() {
        let store = Store::<SearchReducer>::new();
        let last = run(&store, &instant(vec![SearchAction::search("only")])).await;
        assert_eq!(*last, SearchState::loading("only"));
        assert_eq!(*store.state(), SearchState::loading("only"));
    }

    #[tokio::test]
    async fn run_waits_between_steps() {
        let store = Store::<SearchReducer>::new();
        let config = DemoConfig {
            step_delay_ms: 20,
            steps: vec![SearchAction::search("a"), SearchAction::search("b")],
        };

        let started = std::time::Instant::now();
        run(&store, &config).await;

        assert!(started.elapsed() >= std::time::Duration::from_millis(20));
        assert_eq!(*store.state(), SearchState::loading("b"));
    }
}
