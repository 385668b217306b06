//! The fallback handler for requests that do not match any route.

use axum::response::{IntoResponse, Response};

use crate::Error;

/// Respond with a JSON 404 error.
pub async fn get_404_not_found() -> Response {
    Error::NotFound("the requested resource could not be found").into_response()
}
