//! Endpoint for deleting a category.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    DocumentCollection, Error,
    category::{CATEGORY_ID_FIELD, CategoryState},
    stores::{DeleteResult, Filter},
};

/// Delete the category with the path's `category_id`.
///
/// Deleting a category that does not exist succeeds with a count of zero. Transactions keep
/// their embedded copy of a deleted category.
pub async fn delete_category_endpoint<C>(
    Path(category_id): Path<String>,
    State(state): State<CategoryState<C>>,
) -> Result<Json<DeleteResult>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    let filter = Filter::eq(CATEGORY_ID_FIELD, category_id);

    state
        .categories
        .delete_one(&filter)
        .inspect_err(|error| {
            tracing::error!("could not delete category {}: {error}", filter.value)
        })
        .map(Json)
        .map_err(|_| Error::OperationFailed("category was not deleted"))
}
