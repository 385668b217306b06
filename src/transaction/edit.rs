//! Endpoint for updating a transaction, creating it if it does not exist.

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    DocumentCollection, Error,
    stores::{Filter, UpdateResult, UpdateSet},
    timestamp::{self, UPDATED_AT_FIELD},
    transaction::{
        CATEGORY_FIELD, TRANSACTION_ID_FIELD, TransactionData, TransactionState,
        domain::{COMMENT_FIELD, DATA_FIELD, NAME_FIELD, PRICE_FIELD, TYPE_OF_TRANSACTION_FIELD},
    },
};

/// Apply the fields present in the request body to the transaction with the path's
/// `transaction_id`.
///
/// The embedded category is always replaced: a request without a category clears it.
/// If no transaction matches, a new one is created with the given `transaction_id`.
pub async fn update_transaction_endpoint<C>(
    Path(transaction_id): Path<String>,
    State(state): State<TransactionState<C>>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionData>, Error>,
) -> Result<Json<UpdateResult>, Error>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    let filter = Filter::eq(TRANSACTION_ID_FIELD, transaction_id);

    build_update(payload)
        .and_then(|update| state.transactions.update_one(&filter, update, true))
        .inspect_err(|error| {
            tracing::error!("could not update transaction {}: {error}", filter.value)
        })
        .map(Json)
        .map_err(|_| Error::OperationFailed("transaction was not updated"))
}

fn build_update(payload: TransactionData) -> Result<UpdateSet, Error> {
    let mut update = UpdateSet::default();
    update.set_if_present(NAME_FIELD, payload.name);
    update.set_if_present(PRICE_FIELD, payload.price);
    update.set_if_present(DATA_FIELD, payload.data);
    update.set_if_present(TYPE_OF_TRANSACTION_FIELD, payload.type_of_transaction);
    update.set_if_present(COMMENT_FIELD, payload.comment);
    update.set(CATEGORY_FIELD, &payload.category.unwrap_or_default())?;
    update.set_timestamp(UPDATED_AT_FIELD, timestamp::now())?;

    Ok(update)
}

#[cfg(test)]
mod update_transaction_endpoint_tests {
    use std::marker::PhantomData;

    use axum::{
        Json,
        extract::{FromRef, Path, State},
    };
    use axum_extra::extract::WithRejection;
    use time::macros::datetime;

    use crate::{
        Category, DocumentCollection, DocumentId, SQLiteCollection,
        stores::{Filter, from_document, to_document},
        test_utils::{count_documents, must_create_test_state},
        transaction::{Transaction, TransactionData, TransactionState},
    };

    use super::{build_update, update_transaction_endpoint};

    fn payload(data: TransactionData) -> WithRejection<Json<TransactionData>, crate::Error> {
        WithRejection(Json(data), PhantomData)
    }

    fn must_insert_old_transaction(state: &TransactionState<SQLiteCollection>) -> Transaction {
        let id = DocumentId::generate();
        let transaction = Transaction {
            transaction_id: id.to_string(),
            id,
            name: Some("coffee".to_owned()),
            price: Some("3.50".to_owned()),
            data: Some("2024-01-01".to_owned()),
            type_of_transaction: Some("expense".to_owned()),
            comment: Some("morning".to_owned()),
            category: Category::new("Food".to_owned()),
            created_at: Some(datetime!(2020-01-01 00:00:00 UTC)),
            updated_at: Some(datetime!(2020-01-01 00:00:00 UTC)),
        };
        state
            .transactions
            .insert_one(to_document(&transaction).unwrap())
            .expect("Could not insert transaction");

        transaction
    }

    fn must_get_transaction(state: &TransactionState<SQLiteCollection>, id: &str) -> Transaction {
        let document = state
            .transactions
            .find_one(&Filter::eq("transaction_id", id))
            .unwrap()
            .expect("Transaction not found");

        from_document(document).unwrap()
    }

    #[test]
    fn update_always_sets_category_and_update_time() {
        let update = build_update(TransactionData {
            price: Some("4.00".to_owned()),
            ..Default::default()
        })
        .unwrap();

        let mut fields: Vec<_> = update.fields().collect();
        fields.sort_unstable();
        assert_eq!(fields, vec!["category", "price", "updated_at"]);
    }

    #[tokio::test]
    async fn update_without_category_clears_embedded_category() {
        let state = TransactionState::from_ref(&must_create_test_state());
        let old = must_insert_old_transaction(&state);

        let Json(result) = update_transaction_endpoint(
            Path(old.transaction_id.clone()),
            State(state.clone()),
            payload(TransactionData {
                price: Some("4.00".to_owned()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(result.matched_count, 1);
        assert_eq!(result.modified_count, 1);
        let new = must_get_transaction(&state, &old.transaction_id);
        assert_eq!(new.category, Category::default());
        assert_eq!(new.price.as_deref(), Some("4.00"));
        assert_eq!(new.name, old.name);
        assert_eq!(new.comment, old.comment);
        assert_eq!(new.created_at, old.created_at);
        assert_ne!(new.updated_at, old.updated_at);
    }

    #[tokio::test]
    async fn update_with_category_replaces_embedded_copy() {
        let state = TransactionState::from_ref(&must_create_test_state());
        let old = must_insert_old_transaction(&state);
        let travel = Category {
            title: Some("Travel".to_owned()),
            ..Default::default()
        };

        update_transaction_endpoint(
            Path(old.transaction_id.clone()),
            State(state.clone()),
            payload(TransactionData {
                category: Some(travel.clone()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        let new = must_get_transaction(&state, &old.transaction_id);
        assert_eq!(new.category, travel);
        assert_eq!(count_documents(&state.categories), 0);
    }

    #[tokio::test]
    async fn update_of_unknown_transaction_upserts() {
        let state = TransactionState::from_ref(&must_create_test_state());

        let Json(result) = update_transaction_endpoint(
            Path("unknown".to_owned()),
            State(state.clone()),
            payload(TransactionData {
                name: Some("rent".to_owned()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(result.upserted_count, 1);
        let transaction = must_get_transaction(&state, "unknown");
        assert_eq!(transaction.name.as_deref(), Some("rent"));
        assert_eq!(Some(&transaction.id), result.upserted_id.as_ref());
    }
}
