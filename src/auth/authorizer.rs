/**
 * Channel Authorizer
 *
 * This module implements the authorization decision for restricted channel
 * subscriptions: validate the request, compute the signature binding the
 * socket to the channel (and, for presence channels, to the member data),
 * and assemble the response payload the broker will verify.
 *
 * # Validation Order
 *
 * The first failing rule wins:
 *
 * 1. Socket id must match the broker's `digits.digits` grammar
 * 2. Channel name must be non-empty, within the length limit, and drawn
 *    from the broker's channel-name alphabet
 * 3. Presence channels require member data; all other channels reject it
 *
 * # Determinism
 *
 * Authorization is pure computation. Identical inputs always produce the
 * identical `auth` string, and the `channel_data` JSON is serialized once
 * and reused bit-for-bit in both the signature and the response.
 */

use std::sync::Arc;

use serde::Serialize;

use crate::auth::channel::{validate_channel_name, validate_socket_id, ChannelKind};
use crate::auth::credentials::AppCredentials;
use crate::auth::member::MemberData;
use crate::auth::signature::{channel_signature, shared_secret};
use crate::error::GatewayError;

/// One inbound authorization request, as parsed from the HTTP body.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    /// Broker-assigned identifier of the client's connection.
    pub socket_id: String,
    /// Channel the client wants to subscribe to.
    pub channel_name: String,
    /// Claimed identity, present only for presence channels.
    pub member_data: Option<MemberData>,
}

/// The signed authorization payload returned to the client, in the JSON
/// shape the broker's client library expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationResponse {
    /// `"key:signature"` token verified by the broker.
    pub auth: String,
    /// Exact JSON bytes of the member data, presence channels only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<String>,
    /// Per-channel encryption secret, private-encrypted channels only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_secret: Option<String>,
}

/// Signs channel-subscription authorizations.
///
/// Holds only a shared reference to the process credentials; cloning is
/// cheap and every method is safe to call concurrently.
#[derive(Clone)]
pub struct ChannelAuthorizer {
    credentials: Arc<AppCredentials>,
}

impl ChannelAuthorizer {
    pub fn new(credentials: Arc<AppCredentials>) -> Self {
        Self { credentials }
    }

    /// Authorize a request, dispatching on the channel kind.
    ///
    /// This is the strict entry point used by the HTTP surface: presence
    /// channels require member data (`MissingMemberData` otherwise) and all
    /// other channels reject it (`UnexpectedMemberData`).
    pub fn authorize(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<AuthorizationResponse, GatewayError> {
        validate_socket_id(&request.socket_id)?;
        validate_channel_name(&request.channel_name)?;

        let kind = ChannelKind::of(&request.channel_name);
        match (kind.is_presence(), &request.member_data) {
            (true, Some(member)) => {
                self.authorize_presence(&request.socket_id, &request.channel_name, member)
            }
            (true, None) => Err(GatewayError::MissingMemberData {
                channel_name: request.channel_name.clone(),
            }),
            (false, Some(_)) => Err(GatewayError::UnexpectedMemberData {
                channel_name: request.channel_name.clone(),
            }),
            (false, None) => {
                self.authorize_private(&request.socket_id, &request.channel_name)
            }
        }
    }

    /// Authorize a subscription on the private-channel code path.
    ///
    /// This path never involves member data, whatever the channel prefix
    /// says. For `private-encrypted-` channels the response additionally
    /// carries the per-channel shared secret derived from the master key.
    pub fn authorize_private(
        &self,
        socket_id: &str,
        channel_name: &str,
    ) -> Result<AuthorizationResponse, GatewayError> {
        validate_socket_id(socket_id)?;
        validate_channel_name(channel_name)?;

        let shared_secret = self.encryption_secret(channel_name)?;
        let signature =
            channel_signature(self.credentials.secret(), socket_id, channel_name, None)?;

        Ok(AuthorizationResponse {
            auth: format!("{}:{}", self.credentials.key(), signature),
            channel_data: None,
            shared_secret,
        })
    }

    /// Authorize a presence-channel subscription with the given identity.
    ///
    /// The member data is serialized exactly once; the same bytes go into
    /// the signature and into the response `channel_data`.
    pub fn authorize_presence(
        &self,
        socket_id: &str,
        channel_name: &str,
        member: &MemberData,
    ) -> Result<AuthorizationResponse, GatewayError> {
        validate_socket_id(socket_id)?;
        validate_channel_name(channel_name)?;

        let channel_data = member.to_channel_data().map_err(|e| {
            tracing::error!(
                "Failed to serialize member data for channel {}: {}",
                channel_name,
                e
            );
            GatewayError::internal(format!(
                "member data serialization failed for channel {}",
                channel_name
            ))
        })?;

        let signature = channel_signature(
            self.credentials.secret(),
            socket_id,
            channel_name,
            Some(&channel_data),
        )?;

        Ok(AuthorizationResponse {
            auth: format!("{}:{}", self.credentials.key(), signature),
            channel_data: Some(channel_data),
            shared_secret: None,
        })
    }

    /// Shared secret for encrypted channels, `None` for everything else.
    fn encryption_secret(&self, channel_name: &str) -> Result<Option<String>, GatewayError> {
        if ChannelKind::of(channel_name) != ChannelKind::PrivateEncrypted {
            return Ok(None);
        }
        match self.credentials.master_key() {
            Some(master_key) => Ok(Some(shared_secret(channel_name, master_key))),
            None => Err(GatewayError::MissingMasterKey {
                channel_name: channel_name.to_string(),
            }),
        }
    }
}
