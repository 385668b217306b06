//! Endpoints for listing categories and fetching a single category.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    DocumentCollection, Error,
    category::{CATEGORY_ID_FIELD, Category, CategoryState},
    stores::{Document, Filter, from_document},
};

/// Respond with every stored category, as stored.
pub async fn list_categories_endpoint<C>(
    State(state): State<CategoryState<C>>,
) -> Result<Json<Vec<Document>>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    state
        .categories
        .find_all()
        .inspect_err(|error| tracing::error!("could not list categories: {error}"))
        .map(Json)
        .map_err(|_| Error::OperationFailed("error occurred while listing categories"))
}

/// Respond with the category whose `category_id` matches the path.
pub async fn get_category_endpoint<C>(
    Path(category_id): Path<String>,
    State(state): State<CategoryState<C>>,
) -> Result<Json<Category>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    const FETCH_FAILED: Error = Error::OperationFailed("error occurred while fetching category");

    let filter = Filter::eq(CATEGORY_ID_FIELD, category_id);

    match state.categories.find_one(&filter) {
        Ok(Some(document)) => from_document(document)
            .inspect_err(|error| {
                tracing::error!("could not decode category {}: {error}", filter.value)
            })
            .map(Json)
            .map_err(|_| FETCH_FAILED),
        Ok(None) if state.distinct_not_found => Err(Error::NotFound("category not found")),
        Ok(None) => {
            tracing::debug!("category {} not found", filter.value);
            Err(FETCH_FAILED)
        }
        Err(error) => {
            tracing::error!("could not fetch category {}: {error}", filter.value);
            Err(FETCH_FAILED)
        }
    }
}
