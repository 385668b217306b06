//! Endpoints for listing transactions and fetching a single transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    DocumentCollection, Error,
    stores::{Document, Filter, from_document},
    transaction::{TRANSACTION_ID_FIELD, Transaction, TransactionState},
};

/// Respond with every stored transaction, as stored.
pub async fn list_transactions_endpoint<C>(
    State(state): State<TransactionState<C>>,
) -> Result<Json<Vec<Document>>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    state
        .transactions
        .find_all()
        .inspect_err(|error| tracing::error!("could not list transactions: {error}"))
        .map(Json)
        .map_err(|_| Error::OperationFailed("error occurred while listing transactions"))
}

/// Respond with the transaction whose `transaction_id` matches the path.
pub async fn get_transaction_endpoint<C>(
    Path(transaction_id): Path<String>,
    State(state): State<TransactionState<C>>,
) -> Result<Json<Transaction>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    const FETCH_FAILED: Error =
        Error::OperationFailed("error occurred while fetching transaction");

    let filter = Filter::eq(TRANSACTION_ID_FIELD, transaction_id);

    match state.transactions.find_one(&filter) {
        Ok(Some(document)) => from_document(document)
            .inspect_err(|error| {
                tracing::error!("could not decode transaction {}: {error}", filter.value)
            })
            .map(Json)
            .map_err(|_| FETCH_FAILED),
        Ok(None) if state.distinct_not_found => Err(Error::NotFound("transaction not found")),
        Ok(None) => {
            tracing::debug!("transaction {} not found", filter.value);
            Err(FETCH_FAILED)
        }
        Err(error) => {
            tracing::error!("could not fetch transaction {}: {error}", filter.value);
            Err(FETCH_FAILED)
        }
    }
}
