//! Application router configuration.

use axum::{Router, http::StatusCode, routing::get};
use tower_http::timeout::TimeoutLayer;

use crate::{
    AppState, DocumentCollection,
    category::{
        create_category_endpoint, delete_category_endpoint, get_category_endpoint,
        list_categories_endpoint, update_category_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        list_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Requests that take longer than the state's request timeout are answered with
/// `408 Request Timeout`, and unknown routes with a JSON 404.
pub fn build_router<C>(state: AppState<C>) -> Router
where
    C: DocumentCollection + Clone + Send + Sync + 'static,
{
    let request_timeout = state.request_timeout;

    Router::new()
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint::<C>).post(create_category_endpoint::<C>),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint::<C>)
                .put(update_category_endpoint::<C>)
                .delete(delete_category_endpoint::<C>),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint::<C>).post(create_transaction_endpoint::<C>),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint::<C>)
                .put(update_transaction_endpoint::<C>)
                .delete(delete_transaction_endpoint::<C>),
        )
        .fallback(get_404_not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
