//! Implements a document collection backed by a SQLite database.
//!
//! Every collection shares the one `document` table, where each row holds the collection name,
//! the document's `_id` and the document body as JSON text. Filters are evaluated with SQLite's
//! `json_extract`.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension};
use serde_json::Value;

use crate::{
    Error,
    document_id::DocumentId,
    stores::{
        DeleteResult, Document, DocumentCollection, Filter, ID_FIELD, InsertOneResult, UpdateResult,
        UpdateSet,
    },
};

/// A named collection of JSON documents stored in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCollection {
    name: &'static str,
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCollection {
    /// Create a handle to the collection `name`.
    ///
    /// The `document` table must already exist, see [create_document_table].
    pub fn new(name: &'static str, connection: Arc<Mutex<Connection>>) -> Self {
        Self { name, connection }
    }

    /// The name of the collection.
    pub fn name(&self) -> &str {
        self.name
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }

    /// Find the row ID and body of the first document matching `filter`.
    fn find_row(
        &self,
        filter: &Filter,
        connection: &Connection,
    ) -> Result<Option<(String, String)>, Error> {
        connection
            .prepare(
                "SELECT id, body FROM document
                 WHERE collection = ?1 AND json_extract(body, ?2) = ?3
                 ORDER BY rowid
                 LIMIT 1;",
            )?
            .query_row(
                (self.name, json_path(filter.field), &filter.value),
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(Error::from)
    }

    fn insert_document(
        &self,
        id: &str,
        document: &Document,
        connection: &Connection,
    ) -> Result<(), Error> {
        let body = serde_json::to_string(document)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        connection
            .execute(
                "INSERT INTO document (collection, id, body) VALUES (?1, ?2, ?3);",
                (self.name, id, body),
            )
            .map_err(|error| match error {
                rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error {
                        code: _,
                        extended_code:
                            rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                            | rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
                    },
                    _,
                ) => Error::DuplicateId(id.to_owned()),
                error => error.into(),
            })?;

        Ok(())
    }
}

impl DocumentCollection for SQLiteCollection {
    fn find_all(&self) -> Result<Vec<Document>, Error> {
        let connection = self.lock()?;

        let bodies = connection
            .prepare("SELECT body FROM document WHERE collection = ?1 ORDER BY rowid;")?
            .query_map([self.name], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        bodies.iter().map(|body| parse_document(body)).collect()
    }

    fn find_one(&self, filter: &Filter) -> Result<Option<Document>, Error> {
        let connection = self.lock()?;

        self.find_row(filter, &connection)?
            .map(|(_, body)| parse_document(&body))
            .transpose()
    }

    fn insert_one(&self, document: Document) -> Result<InsertOneResult, Error> {
        let id = match document.get(ID_FIELD) {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            _ => return Err(Error::MissingDocumentId),
        };

        let connection = self.lock()?;
        self.insert_document(&id, &document, &connection)?;

        Ok(InsertOneResult {
            inserted_id: DocumentId::from(id),
        })
    }

    fn update_one(
        &self,
        filter: &Filter,
        update: UpdateSet,
        upsert: bool,
    ) -> Result<UpdateResult, Error> {
        let connection = self.lock()?;

        match self.find_row(filter, &connection)? {
            Some((id, body)) => {
                let original = parse_document(&body)?;
                let mut document = original.clone();
                update.apply_to(&mut document);

                let modified = document != original;

                if modified {
                    let body = serde_json::to_string(&document)
                        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

                    connection.execute(
                        "UPDATE document SET body = ?1 WHERE collection = ?2 AND id = ?3;",
                        (body, self.name, id),
                    )?;
                }

                Ok(UpdateResult {
                    matched_count: 1,
                    modified_count: u64::from(modified),
                    upserted_count: 0,
                    upserted_id: None,
                })
            }
            None if upsert => {
                let id = DocumentId::generate();

                let mut document = Document::new();
                document.insert(ID_FIELD.to_owned(), Value::String(id.to_string()));
                document.insert(filter.field.to_owned(), Value::String(filter.value.clone()));
                update.apply_to(&mut document);

                self.insert_document(id.as_str(), &document, &connection)?;

                Ok(UpdateResult {
                    matched_count: 0,
                    modified_count: 0,
                    upserted_count: 1,
                    upserted_id: Some(id),
                })
            }
            None => Ok(UpdateResult::default()),
        }
    }

    fn delete_one(&self, filter: &Filter) -> Result<DeleteResult, Error> {
        let connection = self.lock()?;

        let rows_affected = connection.execute(
            "DELETE FROM document WHERE rowid = (
                SELECT rowid FROM document
                WHERE collection = ?1 AND json_extract(body, ?2) = ?3
                ORDER BY rowid
                LIMIT 1
            );",
            (self.name, json_path(filter.field), &filter.value),
        )?;

        Ok(DeleteResult {
            deleted_count: rows_affected as u64,
        })
    }
}

/// Initialize the document table.
pub fn create_document_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS document (
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            body TEXT NOT NULL,
            PRIMARY KEY (collection, id)
        );",
        (),
    )?;

    Ok(())
}

fn json_path(field: &str) -> String {
    format!("$.\"{field}\"")
}

fn parse_document(body: &str) -> Result<Document, Error> {
    serde_json::from_str(body).map_err(|error| Error::InvalidDocument(error.to_string()))
}
