use serde::{Deserialize, Serialize};

/// A single search result.
///
/// The store never looks inside an item; it only carries the sequence from a
/// `SearchSuccess` action into the `Gallery` state.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
}

impl GalleryItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_as_plain_object() {
        let item = GalleryItem::new("irish-setter");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "irish-setter" }));
    }
}
