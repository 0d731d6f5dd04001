/**
 * Gateway Error Types
 *
 * This module defines the error taxonomy for the gateway. Errors fall into
 * three groups:
 *
 * - Authorization errors - a client asked to subscribe to a channel with a
 *   malformed or inconsistent request (invalid socket id, invalid channel
 *   name, missing or unexpected member data)
 * - Delivery errors - an event trigger could not be delivered to the broker
 *   (non-2xx status, timeout, unreachable host)
 * - Infrastructure errors - configuration problems, serialization failures,
 *   missing embedded assets
 *
 * Every error can be converted to an HTTP response with a JSON body of the
 * shape `{"error": "<message>"}` via the `conversion` module. Error messages
 * never contain secret material - only channel names, socket ids and upstream
 * status codes, all of which the client already knows.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// All errors produced by the gateway.
///
/// Validation errors map to `400 Bad Request`, delivery errors to
/// `502`/`504`, and everything else to `500 Internal Server Error`.
/// See [`GatewayError::status_code`] for the full mapping.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The socket id does not match the broker's `digits.digits` grammar.
    #[error("Invalid socket id: {socket_id}")]
    InvalidSocketId {
        /// The offending socket id as received from the client
        socket_id: String,
    },

    /// The channel name is empty, too long, or contains forbidden characters.
    #[error("Invalid channel name: {channel_name}")]
    InvalidChannelName {
        /// The offending channel name
        channel_name: String,
    },

    /// A presence channel was requested without member data.
    #[error("Presence channel {channel_name} requires member data")]
    MissingMemberData {
        /// The presence channel that was requested
        channel_name: String,
    },

    /// Member data was supplied for a channel that must not carry any.
    #[error("Channel {channel_name} does not accept member data")]
    UnexpectedMemberData {
        /// The non-presence channel that was requested
        channel_name: String,
    },

    /// An encrypted channel was requested but no master key is configured.
    #[error("Channel {channel_name} requires an encryption master key")]
    MissingMasterKey {
        /// The encrypted channel that was requested
        channel_name: String,
    },

    /// The event name exceeds the broker's length limit.
    #[error("Invalid event name: {event_name}")]
    InvalidEventName {
        /// The offending event name
        event_name: String,
    },

    /// The serialized trigger payload exceeds the broker's size limit.
    #[error("Trigger payload of {size} bytes exceeds the broker limit")]
    PayloadTooLarge {
        /// Size of the serialized payload in bytes
        size: usize,
    },

    /// The request body could not be parsed.
    #[error("Malformed request: {message}")]
    MalformedRequest {
        /// What failed to parse
        message: String,
    },

    /// The broker rejected a trigger delivery with a non-2xx status.
    #[error("Broker responded with status {status}")]
    DeliveryFailed {
        /// HTTP status returned by the broker
        status: u16,
    },

    /// A trigger delivery did not complete within the configured deadline.
    #[error("Broker request timed out")]
    DeliveryTimeout,

    /// A trigger delivery failed before a response was received.
    #[error("Broker unreachable: {message}")]
    DeliveryUnreachable {
        /// Transport-level failure description
        message: String,
    },

    /// An embedded asset could not be resolved.
    #[error("Error reading {path}")]
    AssetRead {
        /// Path of the asset that was requested
        path: String,
    },

    /// Invalid configuration detected at startup.
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },

    /// Unexpected internal failure.
    #[error("Internal error: {message}")]
    Internal {
        /// Failure description, free of secret material
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    /// Create an internal error from any displayable cause.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a malformed-request error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// # Status Code Mapping
    ///
    /// - Validation errors (socket id, channel name, member data, event
    ///   name, payload size, malformed body) - 400 Bad Request
    /// - `DeliveryFailed` / `DeliveryUnreachable` - 502 Bad Gateway
    /// - `DeliveryTimeout` - 504 Gateway Timeout
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidSocketId { .. }
            | Self::InvalidChannelName { .. }
            | Self::MissingMemberData { .. }
            | Self::UnexpectedMemberData { .. }
            | Self::InvalidEventName { .. }
            | Self::PayloadTooLarge { .. }
            | Self::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            Self::DeliveryFailed { .. } | Self::DeliveryUnreachable { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Self::DeliveryTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::MissingMasterKey { .. }
            | Self::AssetRead { .. }
            | Self::Config { .. }
            | Self::Internal { .. }
            | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the human-readable error message used in JSON error bodies.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
