//! Transition function of the search state machine.

use super::action::SearchAction;
use super::state::SearchState;
use crate::core::Reducer;

/// Compute the state that follows `state` when `action` is applied.
///
/// | current \ action | Search        | SearchSuccess  | SearchFailure |
/// |------------------|---------------|----------------|---------------|
/// | Form             | Loading       | Form           | Form          |
/// | Loading          | Loading (new) | Gallery        | Failed        |
/// | Failed           | Loading       | Failed         | Failed        |
/// | Gallery          | Loading       | Gallery        | Gallery       |
///
/// `Search` always wins, including over a search already in flight. A
/// response that arrives outside `Loading` is stale and leaves the state as
/// it is.
///
/// # Example
///
/// ```rust
/// use search_store::search::{transition, SearchAction, SearchState};
///
/// let state = transition(&SearchState::form(), &SearchAction::search("dogs"));
/// assert_eq!(state, SearchState::loading("dogs"));
///
/// let state = transition(&state, &SearchAction::search_failure());
/// assert_eq!(state, SearchState::failed());
/// ```
pub fn transition(state: &SearchState, action: &SearchAction) -> SearchState {
    match (state, action) {
        (_, SearchAction::Search { query }) => SearchState::loading(query.clone()),

        (SearchState::Loading { .. }, SearchAction::SearchSuccess { items }) => {
            SearchState::gallery(items.clone())
        }
        (SearchState::Loading { .. }, SearchAction::SearchFailure) => SearchState::failed(),

        // Responses are only meaningful while loading.
        (
            SearchState::Form | SearchState::Failed | SearchState::Gallery { .. },
            SearchAction::SearchSuccess { .. } | SearchAction::SearchFailure,
        ) => state.clone(),
    }
}

/// [`Reducer`] for the search store, seeded with [`SearchState::Form`].
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Action = SearchAction;

    fn initial_state() -> SearchState {
        SearchState::form()
    }

    fn reduce(state: &SearchState, action: &SearchAction) -> SearchState {
        transition(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::GalleryItem;

    fn items(ids: &[&str]) -> Vec<GalleryItem> {
        ids.iter().map(|id| GalleryItem::new(*id)).collect()
    }

    fn all_states() -> Vec<SearchState> {
        vec![
            SearchState::form(),
            SearchState::loading("in-flight"),
            SearchState::failed(),
            SearchState::gallery(items(&["a", "b"])),
        ]
    }

    #[test]
    fn initial_state_is_form() {
        assert_eq!(SearchReducer::initial_state(), SearchState::form());
    }

    #[test]
    fn search_from_every_state_starts_loading() {
        for state in all_states() {
            assert_eq!(
                transition(&state, &SearchAction::search("dogs")),
                SearchState::loading("dogs"),
                "from {state:?}"
            );
        }
    }

    #[test]
    fn loading_settles_on_success() {
        let next = transition(
            &SearchState::loading("dogs"),
            &SearchAction::search_success(items(&["x", "y"])),
        );
        assert_eq!(next, SearchState::gallery(items(&["x", "y"])));
    }

    #[test]
    fn loading_settles_on_empty_success() {
        let next = transition(
            &SearchState::loading("nothing"),
            &SearchAction::search_success(vec![]),
        );
        assert_eq!(next, SearchState::gallery(vec![]));
    }

    #[test]
    fn loading_settles_on_failure() {
        let next = transition(&SearchState::loading("dogs"), &SearchAction::search_failure());
        assert_eq!(next, SearchState::failed());
    }

    #[test]
    fn stale_responses_are_ignored() {
        let responses = [
            SearchAction::search_success(items(&["late"])),
            SearchAction::search_failure(),
        ];
        let settled = [
            SearchState::form(),
            SearchState::failed(),
            SearchState::gallery(items(&["a", "b"])),
        ];

        for state in &settled {
            for action in &responses {
                assert_eq!(&transition(state, action), state, "{action:?} on {state:?}");
            }
        }
    }

    #[test]
    fn restart_keeps_last_query() {
        let state = transition(&SearchState::form(), &SearchAction::search("a"));
        let state = transition(&state, &SearchAction::search("b"));
        assert_eq!(state, SearchState::loading("b"));
    }

    #[test]
    fn settle_then_reopen() {
        let state = transition(&SearchState::form(), &SearchAction::search("dogs"));
        let state = transition(&state, &SearchAction::search_success(items(&["x", "y"])));
        match &state {
            SearchState::Gallery { items } => assert_eq!(items.len(), 2),
            other => panic!("expected Gallery, got {other:?}"),
        }

        let state = transition(&state, &SearchAction::search("cats"));
        let state = transition(&state, &SearchAction::search_failure());
        assert_eq!(state, SearchState::failed());
    }

    #[test]
    fn reducer_delegates_to_transition() {
        let state = SearchState::loading("q");
        let action = SearchAction::search_failure();
        assert_eq!(
            SearchReducer::reduce(&state, &action),
            transition(&state, &action)
        );
    }
}
