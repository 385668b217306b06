use axum::extract::FromRef;

use crate::{AppState, DocumentCollection};

/// The state needed by the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState<C> {
    /// The collection of category records, used to find or create a transaction's category.
    pub categories: C,
    /// The collection of transaction records.
    pub transactions: C,
    /// Whether a missing transaction is reported as 404 rather than 500.
    pub distinct_not_found: bool,
}

impl<C> FromRef<AppState<C>> for TransactionState<C>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<C>) -> Self {
        Self {
            categories: state.categories.clone(),
            transactions: state.transactions.clone(),
            distinct_not_found: state.distinct_not_found,
        }
    }
}
