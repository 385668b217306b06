//! Implements a struct that holds the state of the REST server.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use rusqlite::Connection;

use crate::{
    Config, Error,
    category::CATEGORY_COLLECTION,
    db::initialize,
    stores::{DocumentCollection, SQLiteCollection},
    transaction::TRANSACTION_COLLECTION,
};

/// The state of the REST server.
///
/// The collections are handed to each route handler through [axum::extract::FromRef], so
/// handlers never reach for a global store handle.
#[derive(Debug, Clone)]
pub struct AppState<C>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    /// The collection of [categories](crate::Category).
    pub categories: C,

    /// The collection of [transactions](crate::Transaction).
    pub transactions: C,

    /// Whether lookups of missing records respond with 404 rather than the generic 500.
    pub distinct_not_found: bool,

    /// The maximum duration of a single request.
    pub request_timeout: Duration,
}

impl<C> AppState<C>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    /// Create a new [AppState] from existing collections with the default options.
    pub fn from_collections(categories: C, transactions: C) -> Self {
        Self {
            categories,
            transactions,
            distinct_not_found: false,
            request_timeout: Duration::from_secs(crate::config::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppState<SQLiteCollection> {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the document table.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, config: &Config) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self {
            categories: SQLiteCollection::new(CATEGORY_COLLECTION, connection.clone()),
            transactions: SQLiteCollection::new(TRANSACTION_COLLECTION, connection),
            distinct_not_found: config.distinct_not_found,
            request_timeout: config.request_timeout(),
        })
    }
}
