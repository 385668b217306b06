//! Endpoint for updating a category, creating it if it does not exist.

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    DocumentCollection, Error,
    category::{CATEGORY_ID_FIELD, CategoryData, CategoryState, TITLE_FIELD},
    stores::{Filter, UpdateResult, UpdateSet},
    timestamp::{self, UPDATED_AT_FIELD},
};

/// Apply the fields present in the request body to the category with the path's
/// `category_id`.
///
/// The update time is always refreshed. If no category matches, a new one is created with the
/// given `category_id`.
pub async fn update_category_endpoint<C>(
    Path(category_id): Path<String>,
    State(state): State<CategoryState<C>>,
    WithRejection(Json(payload), _): WithRejection<Json<CategoryData>, Error>,
) -> Result<Json<UpdateResult>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    let filter = Filter::eq(CATEGORY_ID_FIELD, category_id);

    build_update(payload)
        .and_then(|update| state.categories.update_one(&filter, update, true))
        .inspect_err(|error| {
            tracing::error!("could not update category {}: {error}", filter.value)
        })
        .map(Json)
        .map_err(|_| Error::OperationFailed("category was not updated"))
}

fn build_update(payload: CategoryData) -> Result<UpdateSet, Error> {
    let mut update = UpdateSet::default();
    update.set_if_present(TITLE_FIELD, payload.title);
    update.set_timestamp(UPDATED_AT_FIELD, timestamp::now())?;

    Ok(update)
}
