use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    AppState, DocumentCollection, Error,
    category::CATEGORY_COLLECTION,
    db::initialize,
    stores::{
        DeleteResult, Document, Filter, InsertOneResult, SQLiteCollection, UpdateResult,
        UpdateSet,
    },
    transaction::TRANSACTION_COLLECTION,
};

fn must_open_test_connection() -> Arc<Mutex<Connection>> {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");

    Arc::new(Mutex::new(connection))
}

/// Create app state backed by a fresh in-memory database.
pub(crate) fn must_create_test_state() -> AppState<SQLiteCollection> {
    let connection = must_open_test_connection();

    AppState::from_collections(
        SQLiteCollection::new(CATEGORY_COLLECTION, connection.clone()),
        SQLiteCollection::new(TRANSACTION_COLLECTION, connection),
    )
}

#[track_caller]
pub(crate) fn count_documents(collection: &impl DocumentCollection) -> usize {
    collection
        .find_all()
        .expect("Could not list documents")
        .len()
}

/// A collection whose inserts can be made to fail while every other operation works.
#[derive(Debug, Clone)]
pub(crate) struct FlakyCollection {
    pub inner: SQLiteCollection,
    pub fail_inserts: bool,
}

impl FlakyCollection {
    /// Create app state where category inserts succeed and transaction inserts fail.
    pub(crate) fn failing_transaction_inserts() -> AppState<FlakyCollection> {
        let connection = must_open_test_connection();

        AppState::from_collections(
            FlakyCollection {
                inner: SQLiteCollection::new(CATEGORY_COLLECTION, connection.clone()),
                fail_inserts: false,
            },
            FlakyCollection {
                inner: SQLiteCollection::new(TRANSACTION_COLLECTION, connection),
                fail_inserts: true,
            },
        )
    }
}

impl DocumentCollection for FlakyCollection {
    fn find_all(&self) -> Result<Vec<Document>, Error> {
        self.inner.find_all()
    }

    fn find_one(&self, filter: &Filter) -> Result<Option<Document>, Error> {
        self.inner.find_one(filter)
    }

    fn insert_one(&self, document: Document) -> Result<InsertOneResult, Error> {
        if self.fail_inserts {
            return Err(Error::DatabaseLockError);
        }

        self.inner.insert_one(document)
    }

    fn update_one(
        &self,
        filter: &Filter,
        update: UpdateSet,
        upsert: bool,
    ) -> Result<UpdateResult, Error> {
        self.inner.update_one(filter, update, upsert)
    }

    fn delete_one(&self, filter: &Filter) -> Result<DeleteResult, Error> {
        self.inner.delete_one(filter)
    }
}
