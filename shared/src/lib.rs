//! Data model shared between the backoffice frontend and catalog tooling.

use serde::{Deserialize, Serialize};

/// A catalog category as served by the backend catalog service.
///
/// The list view holds a transient, read-only copy of these records for the
/// duration of one page visit; they are created and owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable unique identifier. Within one service response ids are
    /// unique, which makes them usable as render keys.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Short display description.
    #[serde(default)]
    pub description: String,
}

/// Request body for creating a new category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CategoryPayload {
    /// Display name. Must be non-empty after trimming.
    pub name: String,
    /// Short display description.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_list_deserializes_in_service_order() {
        let body = r#"[
            {"id": 1, "name": "Books", "description": "All books"},
            {"id": 2, "name": "Toys", "description": "Kids toys"}
        ]"#;

        let categories: Vec<Category> =
            serde_json::from_str(body).expect("deserialize categories");

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].name, "Books");
        assert_eq!(categories[0].description, "All books");
        assert_eq!(categories[1].id, 2);
        assert_eq!(categories[1].name, "Toys");
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let body = r#"{"id": 7, "name": "Misc"}"#;

        let category: Category = serde_json::from_str(body).expect("deserialize category");

        assert_eq!(category.id, 7);
        assert!(category.description.is_empty());
    }

    #[test]
    fn payload_serializes_both_fields() {
        let payload = CategoryPayload {
            name: "Games".to_string(),
            description: "Board and video games".to_string(),
        };

        let json = serde_json::to_value(&payload).expect("serialize payload");

        assert_eq!(json["name"], "Games");
        assert_eq!(json["description"], "Board and video games");
    }
}
