/**
 * Error Conversion
 *
 * Converts `ApiError` into the HTTP response every endpoint shares:
 *
 * ```json
 * {
 *   "status": "error",
 *   "message": "Human-readable description"
 * }
 * ```
 *
 * The HTTP status code carries the machine-readable signal. This is the
 * single top-level error boundary per service: anything a handler did not
 * translate itself lands here as a 500 with a generic message, while the
 * concrete cause goes to the operator log.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        }

        let body = serde_json::json!({
            "status": "error",
            "message": self.public_message(),
        });

        (status, Json(body)).into_response()
    }
}
