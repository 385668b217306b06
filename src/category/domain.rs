//! The category document and the payload used to create and update it.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{DocumentId, timestamp, validation::ValidationErrors};

/// The name of the collection that holds category records.
pub const CATEGORY_COLLECTION: &str = "categories";
/// The field that holds the category's string identifier.
pub const CATEGORY_ID_FIELD: &str = "category_id";
/// The field that holds the category's display name.
pub const TITLE_FIELD: &str = "title";

/// A label for transactions.
///
/// Categories are stored in their own collection and are also embedded by value in every
/// transaction. The embedded copy is never updated when the stored record changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The document ID. Empty for a category that has never been stored.
    #[serde(rename = "_id", default)]
    pub id: DocumentId,

    /// The display name, which is also used to look up a category by name.
    #[serde(default)]
    pub title: Option<String>,

    /// The document ID in string form, set once when the category is created.
    #[serde(default)]
    pub category_id: String,

    /// When the category was created.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,

    /// When the category was last changed.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Category {
    /// Create a category with a fresh ID and equal creation and update times.
    pub fn new(title: String) -> Self {
        let id = DocumentId::generate();
        let now = timestamp::now();

        Self {
            category_id: id.to_string(),
            id,
            title: Some(title),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// The JSON body for creating or updating a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    /// The display name. Required when creating a category.
    #[serde(default)]
    pub title: Option<String>,
}

impl CategoryData {
    /// Check the payload for creating a category and return its title.
    ///
    /// # Errors
    ///
    /// Returns the violations if the title is missing or empty.
    pub fn validate(self) -> Result<String, ValidationErrors> {
        let mut errors = ValidationErrors::new("Category");
        let title = errors.require(TITLE_FIELD, self.title);

        errors.finish().map(|_| title)
    }
}

#[cfg(test)]
mod category_tests {
    use serde_json::json;
    use time::macros::datetime;

    use crate::DocumentId;

    use super::{Category, CategoryData};

    #[test]
    fn new_category_has_matching_ids_and_timestamps() {
        let category = Category::new("Food".to_owned());

        assert!(!category.id.is_empty());
        assert_eq!(category.category_id, category.id.as_str());
        assert_eq!(category.title.as_deref(), Some("Food"));
        assert!(category.created_at.is_some());
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn new_categories_have_distinct_ids() {
        let first = Category::new("Food".to_owned());
        let second = Category::new("Food".to_owned());

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn serializes_with_document_field_names() {
        let category = Category {
            id: DocumentId::from("abc".to_owned()),
            title: Some("Food".to_owned()),
            category_id: "abc".to_owned(),
            created_at: Some(datetime!(2024-03-01 09:00:00 UTC)),
            updated_at: Some(datetime!(2024-03-02 10:30:00 UTC)),
        };

        let value = serde_json::to_value(&category).unwrap();

        assert_eq!(
            value,
            json!({
                "_id": "abc",
                "title": "Food",
                "category_id": "abc",
                "created_at": "2024-03-01T09:00:00Z",
                "updated_at": "2024-03-02T10:30:00Z",
            })
        );
    }

    #[test]
    fn deserializes_embedded_category_with_only_title() {
        let category: Category = serde_json::from_value(json!({"title": "Food"})).unwrap();

        assert_eq!(
            category,
            Category {
                title: Some("Food".to_owned()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn empty_category_serializes_nulls() {
        let value = serde_json::to_value(Category::default()).unwrap();

        assert_eq!(
            value,
            json!({
                "_id": "",
                "title": null,
                "category_id": "",
                "created_at": null,
                "updated_at": null,
            })
        );
    }

    #[test]
    fn validate_rejects_empty_title() {
        let result = CategoryData {
            title: Some(String::new()),
        }
        .validate();

        let errors = result.unwrap_err();
        assert_eq!(errors.violations().len(), 1);
        assert_eq!(errors.violations()[0].field, "title");
    }

    #[test]
    fn validate_returns_title() {
        let result = CategoryData {
            title: Some("Rent".to_owned()),
        }
        .validate();

        assert_eq!(result, Ok("Rent".to_owned()));
    }
}
