//! States of the search store.

use super::item::GalleryItem;
use crate::core::State;
use serde::{Deserialize, Serialize};

/// Phase of a search.
///
/// `Failed` and `Gallery` keep no trace of the query that produced them.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SearchState {
    /// Idle, waiting for the first query.
    #[default]
    Form,
    /// A search for `query` is in flight.
    Loading { query: String },
    /// The most recent search failed.
    Failed,
    /// The most recent search succeeded. Zero items is a valid result.
    Gallery { items: Vec<GalleryItem> },
}

impl SearchState {
    pub fn form() -> Self {
        Self::Form
    }

    pub fn loading(query: impl Into<String>) -> Self {
        Self::Loading {
            query: query.into(),
        }
    }

    pub fn failed() -> Self {
        Self::Failed
    }

    pub fn gallery(items: Vec<GalleryItem>) -> Self {
        Self::Gallery { items }
    }
}

impl State for SearchState {
    fn name(&self) -> &str {
        match self {
            Self::Form => "Form",
            Self::Loading { .. } => "Loading",
            Self::Failed => "Failed",
            Self::Gallery { .. } => "Gallery",
        }
    }

    fn is_pending(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
