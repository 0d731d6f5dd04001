/**
 * Server Configuration
 *
 * This module loads the gateway configuration from environment variables,
 * read once at startup.
 *
 * # Configuration Sources
 *
 * Every value has a default matching the local development setup (a
 * FastSocket broker on `127.0.0.1:6002` with the demo credentials), so the
 * gateway runs with no `.env` at all. Values come from:
 *
 * - `FASTGATE_APP_ID` / `FASTGATE_APP_KEY` / `FASTGATE_APP_SECRET`
 * - `FASTGATE_CLUSTER` - broker cluster identifier
 * - `FASTGATE_BROKER_HOST` - host:port of the broker's HTTP API
 * - `FASTGATE_SECURE` - `true` to reach the broker over https
 * - `FASTGATE_ENCRYPTION_MASTER_KEY` - base64, 32 bytes decoded, optional
 * - `FASTGATE_TRIGGER_TIMEOUT_SECS` - deadline for one trigger delivery
 * - `FASTGATE_DEMO_USER_ID` / `FASTGATE_DEMO_USERNAME` /
 *   `FASTGATE_DEMO_AVATAR` - fallback presence identity for the demo page
 * - `SERVER_PORT` - listening port
 *
 * # Error Handling
 *
 * Malformed values (undecodable master key, wrong key length, unparsable
 * port or timeout) are startup errors. Unlike a missing optional service,
 * a broken credential set would make every request fail, so the process
 * refuses to start instead.
 */

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::auth::credentials::{AppCredentials, MASTER_KEY_LEN};
use crate::auth::member::MemberData;
use crate::error::GatewayError;

/// Complete gateway configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Credentials shared with the broker.
    pub credentials: AppCredentials,
    /// Host:port of the broker's HTTP ingestion API.
    pub broker_host: String,
    /// Reach the broker over https when true.
    pub secure: bool,
    /// Deadline for one outbound trigger delivery.
    pub trigger_timeout: Duration,
    /// Fallback presence identity used when a caller supplies none.
    pub demo_member: MemberData,
    /// Port the gateway listens on.
    pub port: u16,
}

impl GatewayConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for empty credentials, an undecodable
    /// or wrong-length master key, or unparsable numeric values.
    pub fn from_env() -> Result<Self, GatewayError> {
        let mut credentials = AppCredentials::new(
            env_or("FASTGATE_APP_ID", "fastsocket"),
            env_or("FASTGATE_APP_KEY", "fastsocket"),
            env_or("FASTGATE_APP_SECRET", "secret"),
            env_or("FASTGATE_CLUSTER", "ap1"),
        )?;

        if let Ok(encoded) = std::env::var("FASTGATE_ENCRYPTION_MASTER_KEY") {
            credentials = credentials.with_master_key(parse_master_key(&encoded)?);
            tracing::info!("Encryption master key configured");
        } else {
            tracing::info!("No encryption master key; encrypted channels disabled");
        }

        let trigger_timeout = Duration::from_secs(parse_env(
            "FASTGATE_TRIGGER_TIMEOUT_SECS",
            10,
        )?);
        let port = parse_env("SERVER_PORT", 8080)?;

        let demo_member = MemberData::new(env_or("FASTGATE_DEMO_USER_ID", "101"))
            .with_info("username", env_or("FASTGATE_DEMO_USERNAME", "smrockypk"))
            .with_info(
                "avatar",
                env_or(
                    "FASTGATE_DEMO_AVATAR",
                    "https://avatars.githubusercontent.com/u/101?v=4",
                ),
            );

        Ok(Self {
            credentials,
            broker_host: env_or("FASTGATE_BROKER_HOST", "127.0.0.1:6002"),
            secure: env_or("FASTGATE_SECURE", "false") == "true",
            trigger_timeout,
            demo_member,
            port,
        })
    }
}

/// Read an environment variable, falling back to a default.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse a numeric environment variable.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, GatewayError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|_| GatewayError::config(format!("{} is not a valid number: {}", key, value))),
        Err(_) => Ok(default),
    }
}

/// Decode a base64 master key and check its length.
fn parse_master_key(encoded: &str) -> Result<[u8; MASTER_KEY_LEN], GatewayError> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|_| GatewayError::config("encryption master key is not valid base64"))?;
    <[u8; MASTER_KEY_LEN]>::try_from(bytes.as_slice()).map_err(|_| {
        GatewayError::config(format!(
            "encryption master key must decode to {} bytes, got {}",
            MASTER_KEY_LEN,
            bytes.len()
        ))
    })
}
