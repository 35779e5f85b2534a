/**
 * Error Conversion
 *
 * Conversions into `BackendError` from the lower layers (store, credential
 * issuer) and the `IntoResponse` implementation that turns it into an HTTP
 * response.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Json, Response};

use crate::backend::auth::issuer::AuthError;
use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// The error is logged here, inside the request span opened by the trace
    /// layer, so the log line carries the method and route.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists => BackendError::conflict("Record already exists"),
            StoreError::Database(e) => BackendError::Database(e),
            other => BackendError::internal(other.to_string()),
        }
    }
}

/// Body rejections become 400s; serde's own message stays in the logs.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::JsonDataError(_) => "Request body has fields of the wrong type",
            JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON",
            JsonRejection::MissingJsonContentType(_) => {
                "Expected request with Content-Type: application/json"
            }
            _ => "Request body could not be read",
        };

        tracing::debug!(error = %rejection.body_text(), "JSON body rejected");
        BackendError::validation("body", message)
    }
}

impl From<AuthError> for BackendError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(e) => BackendError::SharedError(e),
            AuthError::EmailTaken => BackendError::conflict("Email already registered"),
            AuthError::InvalidCredentials => BackendError::Unauthorized,
            AuthError::Store(e) => e.into(),
            other => BackendError::internal(other.to_string()),
        }
    }
}
