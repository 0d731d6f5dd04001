/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for gateway errors so handlers can
 * return `Result<_, GatewayError>` directly.
 *
 * # Response Format
 *
 * Error responses use the JSON shape the broker's browser clients expect:
 *
 * ```json
 * {
 *   "error": "Error message"
 * }
 * ```
 *
 * The status code comes from `GatewayError::status_code()`. Client-side
 * validation failures are logged at `warn`, everything else at `error`.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::GatewayError;

impl IntoResponse for GatewayError {
    /// Convert a gateway error into a JSON HTTP response.
    ///
    /// Every error produces a valid JSON body with a non-2xx status, so a
    /// failing request can never crash the process or leave a client with an
    /// unparsable response.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::BAD_REQUEST {
            tracing::warn!("Request rejected: {}", message);
        } else {
            tracing::error!("Request failed: {}", message);
        }

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
