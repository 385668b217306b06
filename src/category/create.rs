//! Endpoint for creating a category.

use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;

use crate::{
    DocumentCollection, Error,
    category::{Category, CategoryData, CategoryState},
    stores::{InsertOneResult, to_document},
};

/// Create a category from the request body and respond with the insert acknowledgment.
///
/// Nothing is written if the title is missing or empty.
pub async fn create_category_endpoint<C>(
    State(state): State<CategoryState<C>>,
    WithRejection(Json(payload), _): WithRejection<Json<CategoryData>, Error>,
) -> Result<Json<InsertOneResult>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    let title = payload.validate()?;
    let category = Category::new(title);

    to_document(&category)
        .and_then(|document| state.categories.insert_one(document))
        .inspect_err(|error| tracing::error!("could not create category: {error}"))
        .map(Json)
        .map_err(|_| Error::OperationFailed("category was not created"))
}

#[cfg(test)]
mod create_category_endpoint_tests {
    use std::marker::PhantomData;

    use axum::{
        Json,
        extract::{FromRef, State},
    };
    use axum_extra::extract::WithRejection;

    use crate::{
        DocumentCollection, Error,
        category::{Category, CategoryData, CategoryState},
        stores::{Filter, from_document},
        test_utils::{count_documents, must_create_test_state},
    };

    use super::create_category_endpoint;

    fn payload(title: Option<&str>) -> WithRejection<Json<CategoryData>, Error> {
        WithRejection(
            Json(CategoryData {
                title: title.map(str::to_owned),
            }),
            PhantomData,
        )
    }

    #[tokio::test]
    async fn creates_category() {
        let state = CategoryState::from_ref(&must_create_test_state());

        let Json(result) = create_category_endpoint(State(state.clone()), payload(Some("Food")))
            .await
            .unwrap();

        let document = state
            .categories
            .find_one(&Filter::eq("_id", result.inserted_id.as_str()))
            .unwrap()
            .expect("Category was not stored");
        let category: Category = from_document(document).unwrap();
        assert!(!category.id.is_empty());
        assert_eq!(category.id, result.inserted_id);
        assert_eq!(category.category_id, category.id.as_str());
        assert_eq!(category.title.as_deref(), Some("Food"));
        assert!(category.created_at.is_some());
        assert_eq!(category.created_at, category.updated_at);
    }

    #[tokio::test]
    async fn rejects_missing_title_without_writing() {
        let state = CategoryState::from_ref(&must_create_test_state());

        let error = create_category_endpoint(State(state.clone()), payload(None))
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Validation(_)));
        assert_eq!(count_documents(&state.categories), 0);
    }

    #[tokio::test]
    async fn rejects_empty_title_without_writing() {
        let state = CategoryState::from_ref(&must_create_test_state());

        let error = create_category_endpoint(State(state.clone()), payload(Some("")))
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Validation(_)));
        assert_eq!(count_documents(&state.categories), 0);
    }
}
