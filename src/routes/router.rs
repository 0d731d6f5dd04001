/**
 * Router Configuration
 *
 * This module builds the Axum router from the application state.
 *
 * # Routes
 *
 * - `GET /` - embedded demo page
 * - `GET /app.js` - embedded client script
 * - `POST /pusher/auth` - channel-subscription authorization
 * - `GET /trigger` - demo event trigger
 *
 * Unknown paths fall back to a JSON 404 so every response from the
 * gateway, success or failure, is JSON or a known asset.
 */

use axum::{http::StatusCode, routing, Json, Router};

use crate::routes::handlers::{pusher_auth, serve_app_js, serve_index, trigger_demo};
use crate::server::state::AppState;

/// Create the router with all routes configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/", routing::get(serve_index))
        .route("/app.js", routing::get(serve_app_js))
        .route("/pusher/auth", routing::post(pusher_auth))
        .route("/trigger", routing::get(trigger_demo))
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Not found" })),
            )
        })
        .with_state(app_state)
}
