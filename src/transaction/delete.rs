//! Endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    DocumentCollection, Error,
    stores::{DeleteResult, Filter},
    transaction::{TRANSACTION_ID_FIELD, TransactionState},
};

/// Delete the transaction with the path's `transaction_id`.
///
/// Deleting a transaction that does not exist succeeds with a count of zero.
pub async fn delete_transaction_endpoint<C>(
    Path(transaction_id): Path<String>,
    State(state): State<TransactionState<C>>,
) -> Result<Json<DeleteResult>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    let filter = Filter::eq(TRANSACTION_ID_FIELD, transaction_id);

    state
        .transactions
        .delete_one(&filter)
        .inspect_err(|error| {
            tracing::error!("could not delete transaction {}: {error}", filter.value)
        })
        .map(Json)
        .map_err(|_| Error::OperationFailed("transaction was not deleted"))
}
