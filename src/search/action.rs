//! Actions accepted by the search store.

use super::item::GalleryItem;
use crate::core::Action;
use serde::{Deserialize, Serialize};

/// Events that drive a search.
///
/// Serialized with an internal `type` tag, e.g.
/// `{"type":"Search","query":"dogs"}`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SearchAction {
    /// A new search request.
    Search { query: String },
    /// Results arrived for the search in flight.
    SearchSuccess { items: Vec<GalleryItem> },
    /// The search in flight failed.
    SearchFailure,
}

impl SearchAction {
    /// No validation is done; an empty query is a legal search.
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search {
            query: query.into(),
        }
    }

    pub fn search_success(items: Vec<GalleryItem>) -> Self {
        Self::SearchSuccess { items }
    }

    pub fn search_failure() -> Self {
        Self::SearchFailure
    }
}

impl Action for SearchAction {
    fn name(&self) -> &str {
        match self {
            Self::Search { .. } => "Search",
            Self::SearchSuccess { .. } => "SearchSuccess",
            Self::SearchFailure => "SearchFailure",
        }
    }
}
