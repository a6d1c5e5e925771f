use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{error::SpotifyError, types::ErrorShape, warning};

pub const GENERIC_ERROR_MESSAGE: &str = "Server par kuch galat hua.";

/// Any failure that escapes a handler.
///
/// Rendered as `500` with a fixed message and the underlying error text as
/// `details`.
#[derive(Debug)]
pub struct ApiError(SpotifyError);

impl From<SpotifyError> for ApiError {
    fn from(err: SpotifyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = self.0.to_string();
        warning!("Root handler error: {}", details);

        let body = ErrorShape::new(GENERIC_ERROR_MESSAGE, Some(Value::String(details)));
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
