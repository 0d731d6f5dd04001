/**
 * Signing Primitives
 *
 * This module holds every cryptographic operation in the gateway:
 *
 * - `channel_signature` - HMAC-SHA256 over `socket_id:channel[:channel_data]`,
 *   the token the broker verifies on subscription
 * - `api_signature` - HMAC-SHA256 over `METHOD\npath\ncanonical-query`, the
 *   envelope signature on broker-bound API requests
 * - `shared_secret` - SHA256 of channel name and master key, handed to
 *   clients of private-encrypted channels
 * - `body_checksum` - MD5 digest of an API request body, bound into the
 *   canonical query as `body_md5`
 *
 * All signatures are produced, never verified, here; a future verification
 * path must compare digests in constant time.
 */

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha2::{Digest, Sha256};

use crate::auth::credentials::MASTER_KEY_LEN;
use crate::error::GatewayError;

type HmacSha256 = Hmac<Sha256>;

/// Hex-encoded HMAC-SHA256 of `message` under `secret`.
fn sign(secret: &str, message: &str) -> Result<String, GatewayError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| GatewayError::internal("HMAC key setup failed"))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Compute the subscription-authorization signature.
///
/// The string-to-sign is `socket_id:channel_name` for private channels and
/// `socket_id:channel_name:channel_data` for presence channels, matching
/// what the broker reconstructs when it verifies the token. `channel_data`
/// must be the exact bytes that will be returned to the client.
pub fn channel_signature(
    secret: &str,
    socket_id: &str,
    channel_name: &str,
    channel_data: Option<&str>,
) -> Result<String, GatewayError> {
    let mut message = format!("{}:{}", socket_id, channel_name);
    if let Some(data) = channel_data {
        message.push(':');
        message.push_str(data);
    }
    sign(secret, &message)
}

/// Compute the envelope signature for a broker API request.
///
/// `canonical_query` must list the query parameters in byte order and must
/// not yet contain `auth_signature` itself.
pub fn api_signature(
    secret: &str,
    method: &str,
    path: &str,
    canonical_query: &str,
) -> Result<String, GatewayError> {
    let message = format!("{}\n{}\n{}", method, path, canonical_query);
    sign(secret, &message)
}

/// Derive the per-channel shared secret for a private-encrypted channel:
/// `base64(SHA256(channel_name || master_key))`.
pub fn shared_secret(channel_name: &str, master_key: &[u8; MASTER_KEY_LEN]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(channel_name.as_bytes());
    hasher.update(master_key);
    BASE64.encode(hasher.finalize())
}

/// Hex-encoded MD5 of an API request body, for the `body_md5` query field.
pub fn body_checksum(body: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(body);
    hex::encode(hasher.finalize())
}
