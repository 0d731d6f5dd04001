/**
 * Broker Client
 *
 * This module delivers signed event triggers to the broker's HTTP ingestion
 * endpoint (`POST /apps/{app_id}/events`).
 *
 * # Request Envelope
 *
 * The broker authenticates API callers with a signed query string:
 *
 * - `auth_key` - the app key
 * - `auth_timestamp` - unix seconds at signing time
 * - `auth_version` - always `1.0`
 * - `body_md5` - hex MD5 of the request body
 * - `auth_signature` - hex HMAC-SHA256 of
 *   `"POST\n/apps/{app_id}/events\n<canonical query>"` where the canonical
 *   query lists the four fields above in byte order
 *
 * # Delivery Semantics
 *
 * One best-effort attempt per call, bounded by the configured deadline.
 * There is no retry: the broker owns ordering and the caller only learns
 * success or failure.
 */

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::auth::channel::validate_channel_name;
use crate::auth::credentials::AppCredentials;
use crate::auth::signature::{api_signature, body_checksum};
use crate::error::GatewayError;

/// Maximum length of an event name, per the broker protocol.
pub const MAX_EVENT_NAME_LEN: usize = 200;

/// Maximum size of a serialized event payload in bytes.
pub const MAX_PAYLOAD_SIZE: usize = 10 * 1024;

/// One event to publish on a channel.
#[derive(Debug, Clone)]
pub struct TriggerRequest {
    pub channel_name: String,
    pub event_name: String,
    /// String-to-string payload; a `BTreeMap` keeps the serialized body
    /// (and therefore `body_md5`) deterministic.
    pub payload: BTreeMap<String, String>,
}

impl TriggerRequest {
    pub fn new(channel_name: impl Into<String>, event_name: impl Into<String>) -> Self {
        Self {
            channel_name: channel_name.into(),
            event_name: event_name.into(),
            payload: BTreeMap::new(),
        }
    }

    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }
}

/// Body of a broker `events` API call. `data` is the event payload
/// serialized to a JSON string, as the broker protocol requires.
#[derive(Serialize)]
struct EventBody<'a> {
    name: &'a str,
    channels: [&'a str; 1],
    data: String,
}

/// HTTP client for the broker's ingestion API.
///
/// Cheap to clone; the underlying reqwest client shares its connection
/// pool across clones.
#[derive(Clone)]
pub struct BrokerClient {
    credentials: Arc<AppCredentials>,
    http: reqwest::Client,
    base_url: String,
}

impl BrokerClient {
    /// Create a client for the broker at `host`.
    ///
    /// `secure` selects https. `timeout` bounds the whole delivery attempt,
    /// connect time included.
    pub fn new(
        credentials: Arc<AppCredentials>,
        host: &str,
        secure: bool,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let scheme = if secure { "https" } else { "http" };
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            credentials,
            http,
            base_url: format!("{}://{}", scheme, host),
        })
    }

    /// Deliver one event to the broker. Single attempt, no retry.
    pub async fn trigger(&self, request: &TriggerRequest) -> Result<(), GatewayError> {
        validate_channel_name(&request.channel_name)?;
        if request.event_name.is_empty() || request.event_name.len() > MAX_EVENT_NAME_LEN {
            return Err(GatewayError::InvalidEventName {
                event_name: request.event_name.clone(),
            });
        }

        let body = self.event_body(request)?;
        let timestamp = chrono::Utc::now().timestamp();
        let (path, query) = self.signed_query(&body, timestamp)?;
        let url = format!("{}{}?{}", self.base_url, path, query);

        tracing::debug!(
            "Delivering event {} on channel {} to broker",
            request.event_name,
            request.channel_name
        );

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::DeliveryTimeout
                } else {
                    GatewayError::DeliveryUnreachable {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::DeliveryFailed {
                status: status.as_u16(),
            });
        }

        tracing::info!(
            "Event {} delivered on channel {}",
            request.event_name,
            request.channel_name
        );
        Ok(())
    }

    /// Serialize the request body, enforcing the payload size limit.
    fn event_body(&self, request: &TriggerRequest) -> Result<String, GatewayError> {
        let data = serde_json::to_string(&request.payload)?;
        if data.len() > MAX_PAYLOAD_SIZE {
            return Err(GatewayError::PayloadTooLarge { size: data.len() });
        }
        Ok(serde_json::to_string(&EventBody {
            name: &request.event_name,
            channels: [&request.channel_name],
            data,
        })?)
    }

    /// Build the events path and its signed query string.
    ///
    /// Split out from `trigger` so the envelope can be tested against fixed
    /// timestamps.
    fn signed_query(&self, body: &str, timestamp: i64) -> Result<(String, String), GatewayError> {
        let path = format!("/apps/{}/events", self.credentials.app_id());
        // Keys already in byte order: auth_key < auth_timestamp <
        // auth_version < body_md5.
        let canonical = format!(
            "auth_key={}&auth_timestamp={}&auth_version=1.0&body_md5={}",
            self.credentials.key(),
            timestamp,
            body_checksum(body.as_bytes())
        );
        let signature = api_signature(self.credentials.secret(), "POST", &path, &canonical)?;
        Ok((path, format!("{}&auth_signature={}", canonical, signature)))
    }
}
