/**
 * Channel Names and Socket Ids
 *
 * This module validates the two client-supplied identifiers that end up
 * inside an authorization signature, and classifies channel names into the
 * kinds the broker distinguishes by prefix.
 *
 * # Channel Kinds
 *
 * - `public` - no authorization required (never hits this gateway)
 * - `private-*` - signed authorization, no identity disclosure
 * - `private-encrypted-*` - private plus an end-to-end encryption secret
 * - `presence-*` - signed authorization carrying member data
 *
 * The grammar limits mirror the broker's client library: channel names are
 * at most 200 bytes from `[-a-zA-Z0-9_=@,.;]`, socket ids are
 * `digits "." digits`.
 */

use crate::error::GatewayError;

/// Maximum length of a channel name in bytes.
pub const MAX_CHANNEL_NAME_LEN: usize = 200;

const PRESENCE_PREFIX: &str = "presence-";
const PRIVATE_ENCRYPTED_PREFIX: &str = "private-encrypted-";
const PRIVATE_PREFIX: &str = "private-";

/// The kind of channel a name denotes, as the broker classifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// No prefix - open subscription, no authorization involved.
    Public,
    /// `private-` prefix - requires a signed authorization.
    Private,
    /// `private-encrypted-` prefix - private plus a per-channel shared secret.
    PrivateEncrypted,
    /// `presence-` prefix - requires authorization with member data.
    Presence,
}

impl ChannelKind {
    /// Classify a channel name by its prefix.
    ///
    /// The `private-encrypted-` check runs before the `private-` check since
    /// the former is a refinement of the latter.
    pub fn of(channel_name: &str) -> Self {
        if channel_name.starts_with(PRESENCE_PREFIX) {
            Self::Presence
        } else if channel_name.starts_with(PRIVATE_ENCRYPTED_PREFIX) {
            Self::PrivateEncrypted
        } else if channel_name.starts_with(PRIVATE_PREFIX) {
            Self::Private
        } else {
            Self::Public
        }
    }

    /// Whether subscriptions to this kind carry member data.
    pub fn is_presence(self) -> bool {
        matches!(self, Self::Presence)
    }
}

/// Validate a socket id against the broker's `digits "." digits` grammar.
///
/// The socket id is broker-assigned and bound into the signature to prevent
/// replaying an authorization token on another connection, so anything that
/// does not look like one is rejected before signing.
pub fn validate_socket_id(socket_id: &str) -> Result<(), GatewayError> {
    let invalid = || GatewayError::InvalidSocketId {
        socket_id: socket_id.to_string(),
    };

    let (left, right) = socket_id.split_once('.').ok_or_else(invalid)?;
    if left.is_empty() || right.is_empty() {
        return Err(invalid());
    }
    if !left.bytes().all(|b| b.is_ascii_digit()) || !right.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    Ok(())
}

/// Validate a channel name: non-empty, at most [`MAX_CHANNEL_NAME_LEN`]
/// bytes, characters from `[-a-zA-Z0-9_=@,.;]`.
pub fn validate_channel_name(channel_name: &str) -> Result<(), GatewayError> {
    let valid_byte =
        |b: u8| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'=' | b'@' | b',' | b'.' | b';');

    if channel_name.is_empty()
        || channel_name.len() > MAX_CHANNEL_NAME_LEN
        || !channel_name.bytes().all(valid_byte)
    {
        return Err(GatewayError::InvalidChannelName {
            channel_name: channel_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_kind_classification() {
        assert_eq!(ChannelKind::of("my-channel"), ChannelKind::Public);
        assert_eq!(ChannelKind::of("private-channel"), ChannelKind::Private);
        assert_eq!(
            ChannelKind::of("private-encrypted-room"),
            ChannelKind::PrivateEncrypted
        );
        assert_eq!(ChannelKind::of("presence-lobby"), ChannelKind::Presence);
        // "presence-" wins over any other reading
        assert!(ChannelKind::of("presence-private-x").is_presence());
    }

    #[test]
    fn test_valid_socket_ids() {
        assert!(validate_socket_id("123.456").is_ok());
        assert!(validate_socket_id("1.1").is_ok());
        assert!(validate_socket_id("987654321.123456789").is_ok());
    }

    #[test]
    fn test_invalid_socket_ids() {
        for socket_id in ["", "123", "123.", ".456", "12a.456", "123.45b", "1.2.3", "123 456"] {
            let err = validate_socket_id(socket_id).unwrap_err();
            assert!(
                matches!(err, GatewayError::InvalidSocketId { .. }),
                "expected InvalidSocketId for {:?}",
                socket_id
            );
        }
    }

    #[test]
    fn test_valid_channel_names() {
        assert!(validate_channel_name("private-channel").is_ok());
        assert!(validate_channel_name("presence-lobby").is_ok());
        assert!(validate_channel_name("room=1@shard,2;a.b_c").is_ok());
        assert!(validate_channel_name(&"a".repeat(MAX_CHANNEL_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_invalid_channel_names() {
        assert!(validate_channel_name("").is_err());
        assert!(validate_channel_name("has space").is_err());
        assert!(validate_channel_name("emoji-✨").is_err());
        assert!(validate_channel_name("slash/name").is_err());
        assert!(validate_channel_name(&"a".repeat(MAX_CHANNEL_NAME_LEN + 1)).is_err());
    }
}
