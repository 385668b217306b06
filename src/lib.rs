//! A JSON API for recording financial transactions and the categories they belong to.
//!
//! Transactions and categories are stored as JSON documents in collections. Creating a
//! transaction whose category title has not been seen before also creates that category.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
mod config;
mod db;
mod document_id;
pub mod endpoints;
mod error;
mod logging;
mod not_found;
mod routing;
mod stores;
mod timestamp;
mod transaction;
mod validation;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, CategoryData};
pub use config::Config;
pub use db::initialize as initialize_db;
pub use document_id::DocumentId;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use stores::{
    DeleteResult, Document, DocumentCollection, Filter, InsertOneResult, SQLiteCollection,
    UpdateResult, UpdateSet,
};
pub use transaction::{Transaction, TransactionData};
pub use validation::{FieldViolation, ValidationErrors};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
