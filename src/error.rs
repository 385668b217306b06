//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::validation::ValidationErrors;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body could not be parsed as the expected JSON payload.
    ///
    /// The message comes from the JSON extractor and is shown to the client as is.
    #[error("{0}")]
    MalformedPayload(String),

    /// The payload was well-formed but one or more required fields were missing or empty.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// A request handler could not complete a store operation.
    ///
    /// The message is a fixed description of the failed operation, e.g.
    /// "category was not created". The underlying cause is logged on the server and never
    /// sent to the client.
    #[error("{0}")]
    OperationFailed(&'static str),

    /// The requested resource was not found.
    ///
    /// Lookups only report this when the server is configured to distinguish missing
    /// records from store failures, otherwise they report [Error::OperationFailed].
    #[error("{0}")]
    NotFound(&'static str),

    /// A document was inserted without a non-empty string `_id` field.
    #[error("the document does not have a valid `_id` field")]
    MissingDocumentId,

    /// A document with the same `_id` already exists in the collection.
    #[error("a document with the ID {0} already exists in the collection")]
    DuplicateId(String),

    /// A stored document could not be decoded.
    #[error("could not decode a stored document: {0}")]
    InvalidDocument(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::MalformedPayload(rejection.body_text())
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MalformedPayload(message) => error_response(StatusCode::BAD_REQUEST, &message),
            Error::Validation(errors) => {
                error_response(StatusCode::BAD_REQUEST, &errors.to_string())
            }
            Error::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
            Error::OperationFailed(message) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

/// Build a response with `status` and the JSON body `{"error": message}`.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
