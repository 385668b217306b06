//! Contains the document collection trait and its SQLite implementation.
//!
//! A collection holds JSON documents keyed by their `_id` field. Documents are selected with a
//! [Filter] and modified with an [UpdateSet], and each write returns an acknowledgment that is
//! sent back to the client unchanged.

mod sqlite;

pub use sqlite::{SQLiteCollection, create_document_table};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::{Error, document_id::DocumentId};

/// A JSON document as stored in a collection.
pub type Document = Map<String, Value>;

/// The field that holds a document's primary key.
pub const ID_FIELD: &str = "_id";

/// Handles the storage and retrieval of JSON documents.
///
/// Implementers are responsible for their own concurrency control: every method takes `&self`
/// and may be called from any request handler.
pub trait DocumentCollection {
    /// Retrieve every document in the collection, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidDocument] if a stored document cannot be decoded.
    fn find_all(&self) -> Result<Vec<Document>, Error>;

    /// Retrieve the first document that matches `filter`, or `None` if there is no match.
    fn find_one(&self, filter: &Filter) -> Result<Option<Document>, Error>;

    /// Insert `document`, which must have a non-empty string `_id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingDocumentId] if the document has no usable `_id`, or
    /// [Error::DuplicateId] if the ID is already taken.
    fn insert_one(&self, document: Document) -> Result<InsertOneResult, Error>;

    /// Apply `update` to the first document that matches `filter`.
    ///
    /// If nothing matches and `upsert` is set, a new document is created from the filter's
    /// field, the update's fields and a freshly generated `_id`.
    fn update_one(
        &self,
        filter: &Filter,
        update: UpdateSet,
        upsert: bool,
    ) -> Result<UpdateResult, Error>;

    /// Delete the first document that matches `filter`.
    ///
    /// Deleting a document that does not exist is not an error, the result simply reports that
    /// zero documents were deleted.
    fn delete_one(&self, filter: &Filter) -> Result<DeleteResult, Error>;
}

/// Selects the documents whose top-level `field` is a string equal to `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// The name of the top-level field to compare.
    pub field: &'static str,
    /// The value the field must equal.
    pub value: String,
}

impl Filter {
    /// Match documents where `field` equals `value`.
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// The field assignments applied by [DocumentCollection::update_one].
///
/// Each field replaces any existing value, fields not named are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSet(Document);

impl UpdateSet {
    /// Set `field` to the JSON representation of `value`.
    pub fn set<T: Serialize>(&mut self, field: &str, value: &T) -> Result<(), Error> {
        let value = serde_json::to_value(value)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;
        self.0.insert(field.to_owned(), value);

        Ok(())
    }

    /// Set `field` only if the client supplied a value for it.
    pub fn set_if_present(&mut self, field: &str, value: Option<String>) {
        if let Some(value) = value {
            self.0.insert(field.to_owned(), Value::String(value));
        }
    }

    /// Set `field` to `timestamp` formatted as an RFC 3339 string.
    pub fn set_timestamp(&mut self, field: &str, timestamp: OffsetDateTime) -> Result<(), Error> {
        let value = time::serde::rfc3339::serialize(&timestamp, serde_json::value::Serializer)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;
        self.0.insert(field.to_owned(), value);

        Ok(())
    }

    /// The names of the fields that will be set.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Write every field in the update to `document`.
    pub fn apply_to(&self, document: &mut Document) {
        for (field, value) in &self.0 {
            document.insert(field.clone(), value.clone());
        }
    }
}

/// The acknowledgment for [DocumentCollection::insert_one].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOneResult {
    /// The `_id` of the inserted document.
    #[serde(rename = "InsertedID")]
    pub inserted_id: DocumentId,
}

/// The acknowledgment for [DocumentCollection::update_one].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    /// The number of documents that matched the filter.
    #[serde(rename = "MatchedCount")]
    pub matched_count: u64,
    /// The number of matched documents whose contents changed.
    #[serde(rename = "ModifiedCount")]
    pub modified_count: u64,
    /// The number of documents created because nothing matched.
    #[serde(rename = "UpsertedCount")]
    pub upserted_count: u64,
    /// The `_id` of the document created by an upsert.
    #[serde(rename = "UpsertedID")]
    pub upserted_id: Option<DocumentId>,
}

/// The acknowledgment for [DocumentCollection::delete_one].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    /// The number of documents deleted, either zero or one.
    #[serde(rename = "DeletedCount")]
    pub deleted_count: u64,
}

/// Convert `value` into a document.
///
/// # Errors
///
/// Returns [Error::JSONSerializationError] if `value` does not serialize to a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, Error> {
    match serde_json::to_value(value) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(Error::JSONSerializationError(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(error) => Err(Error::JSONSerializationError(error.to_string())),
    }
}

/// Decode a document into a typed value.
///
/// # Errors
///
/// Returns [Error::InvalidDocument] if the document does not have the shape of `T`.
pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, Error> {
    serde_json::from_value(Value::Object(document))
        .map_err(|error| Error::InvalidDocument(error.to_string()))
}
