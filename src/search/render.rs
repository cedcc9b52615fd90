use super::state::SearchState;

/// Text shown for a state.
///
/// ```rust
/// use search_store::search::{render, SearchState};
///
/// assert_eq!(render(&SearchState::loading("dogs")), "Loading results for dogs");
/// ```
pub fn render(state: &SearchState) -> String {
    match state {
        SearchState::Form => "Form".to_string(),
        SearchState::Loading { query } => format!("Loading results for {query}"),
        SearchState::Failed => "Failed".to_string(),
        SearchState::Gallery { items } => format!("Results: {}", items.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::GalleryItem;

    #[test]
    fn renders_every_state() {
        assert_eq!(render(&SearchState::form()), "Form");
        assert_eq!(
            render(&SearchState::loading("cats")),
            "Loading results for cats"
        );
        assert_eq!(render(&SearchState::failed()), "Failed");
        assert_eq!(
            render(&SearchState::gallery(vec![
                GalleryItem::new("english-setter"),
                GalleryItem::new("irish-setter"),
            ])),
            "Results: 2"
        );
    }

    #[test]
    fn renders_empty_gallery_and_empty_query() {
        assert_eq!(render(&SearchState::gallery(vec![])), "Results: 0");
        assert_eq!(render(&SearchState::loading("")), "Loading results for ");
    }
}
