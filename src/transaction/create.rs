//! Endpoint for creating a transaction.

use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;

use crate::{
    Category, DocumentCollection, Error,
    category::TITLE_FIELD,
    stores::{Filter, InsertOneResult, from_document, to_document},
    transaction::{Transaction, TransactionData, TransactionState},
};

/// Create a transaction from the request body and respond with the insert acknowledgment.
///
/// The transaction embeds a copy of the stored category with the payload's category title.
/// If there is no such category, one is created first. That category is kept even if the
/// transaction itself cannot be stored.
pub async fn create_transaction_endpoint<C>(
    State(state): State<TransactionState<C>>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionData>, Error>,
) -> Result<Json<InsertOneResult>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    let new_transaction = payload.validate()?;
    let category = find_or_create_category(&state.categories, &new_transaction.category_title)?;
    let transaction = Transaction::new(new_transaction, category);

    to_document(&transaction)
        .and_then(|document| state.transactions.insert_one(document))
        .inspect_err(|error| tracing::error!("could not create transaction: {error}"))
        .map(Json)
        .map_err(|_| Error::OperationFailed("transaction was not created"))
}

/// Get the category titled `title`, creating it if it does not exist.
///
/// A failed lookup is treated the same as a missing category.
fn find_or_create_category<C>(categories: &C, title: &str) -> Result<Category, Error>
where
    C: DocumentCollection,
{
    let found = categories
        .find_one(&Filter::eq(TITLE_FIELD, title))
        .and_then(|document| document.map(from_document::<Category>).transpose());

    match found {
        Ok(Some(category)) => return Ok(category),
        Ok(None) => {}
        Err(error) => tracing::error!("could not look up category \"{title}\": {error}"),
    }

    let category = Category::new(title.to_owned());

    to_document(&category)
        .and_then(|document| categories.insert_one(document))
        .inspect_err(|error| tracing::error!("could not create category \"{title}\": {error}"))
        .map_err(|_| Error::OperationFailed("new category was not created"))?;

    tracing::info!(
        "created category \"{title}\" ({}) for a new transaction",
        category.category_id
    );

    Ok(category)
}
