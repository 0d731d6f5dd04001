/**
 * HTTP Request Handlers
 *
 * Handlers for the four routes the gateway exposes:
 *
 * - `GET /` and `GET /app.js` - the embedded demo page and client script
 * - `POST /pusher/auth` - channel-subscription authorization
 * - `GET /trigger` - demo trigger of a fixed event
 *
 * # Authorization Requests
 *
 * The auth endpoint speaks the broker's standard client protocol: a
 * form-encoded body with `socket_id` and `channel_name`, plus an optional
 * `channel_data` field carrying the caller-supplied presence identity as
 * JSON. When a presence channel is requested without `channel_data`, the
 * configured demo identity is substituted so the stock browser demo (whose
 * client library sends only the two standard fields) keeps working.
 *
 * Malformed bodies never crash the process; every failure path produces a
 * JSON error body through `GatewayError`.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

use crate::auth::authorizer::{AuthorizationRequest, AuthorizationResponse, ChannelAuthorizer};
use crate::auth::channel::ChannelKind;
use crate::auth::member::MemberData;
use crate::error::GatewayError;
use crate::routes::assets::read_asset;
use crate::trigger::client::{BrokerClient, TriggerRequest};

/// Form body of a `POST /pusher/auth` request.
#[derive(Debug, Deserialize)]
pub struct AuthRequestBody {
    pub socket_id: String,
    pub channel_name: String,
    /// JSON-encoded [`MemberData`], presence channels only.
    pub channel_data: Option<String>,
}

/// GET / - serve the embedded demo page.
pub async fn serve_index() -> Result<Response, GatewayError> {
    let index = read_asset("index.html")?;
    Ok(([(header::CONTENT_TYPE, "text/html")], index).into_response())
}

/// GET /app.js - serve the embedded client script.
pub async fn serve_app_js() -> Result<Response, GatewayError> {
    let app = read_asset("app.js")?;
    Ok(([(header::CONTENT_TYPE, "text/javascript")], app).into_response())
}

/// POST /pusher/auth - authorize a channel subscription.
///
/// The `Form` rejection is handled explicitly so an unparsable body still
/// yields the gateway's JSON error shape rather than axum's plain-text
/// default.
pub async fn pusher_auth(
    State(authorizer): State<ChannelAuthorizer>,
    State(demo_member): State<Arc<MemberData>>,
    body: Result<Form<AuthRequestBody>, FormRejection>,
) -> Result<Json<AuthorizationResponse>, GatewayError> {
    let Form(body) = body.map_err(|e| GatewayError::malformed(e.body_text()))?;

    tracing::debug!(
        "Authorization request: socket_id={} channel={}",
        body.socket_id,
        body.channel_name
    );

    let member_data = match body.channel_data {
        Some(raw) => Some(serde_json::from_str::<MemberData>(&raw).map_err(|e| {
            GatewayError::malformed(format!("channel_data is not valid member data: {}", e))
        })?),
        None if ChannelKind::of(&body.channel_name).is_presence() => {
            Some(demo_member.as_ref().clone())
        }
        None => None,
    };

    let request = AuthorizationRequest {
        socket_id: body.socket_id,
        channel_name: body.channel_name,
        member_data,
    };

    let response = authorizer.authorize(&request)?;
    tracing::info!(
        "Authorized socket {} for channel {}",
        request.socket_id,
        request.channel_name
    );
    Ok(Json(response))
}

/// GET /trigger - demo endpoint firing a fixed event on a fixed channel.
pub async fn trigger_demo(
    State(broker): State<BrokerClient>,
) -> Result<Json<serde_json::Value>, GatewayError> {
    let request = TriggerRequest::new("private-channel", "event")
        .with_payload("message", "Hello world");

    broker.trigger(&request).await?;

    Ok(Json(serde_json::json!({
        "message": "Event triggered successfully"
    })))
}
