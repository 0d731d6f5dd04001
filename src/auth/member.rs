/**
 * Presence Member Data
 *
 * This module defines the identity a presence-channel subscriber discloses
 * to the other subscribers of the channel. The broker forwards the exact
 * JSON this gateway signs, so serialization happens once and the resulting
 * bytes are reused verbatim - re-serializing elsewhere would risk a byte
 * difference that invalidates the signature.
 */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Identity of a presence-channel member.
///
/// `user_info` uses a `BTreeMap` so serialization is deterministic: the
/// same member always produces the same `channel_data` bytes, which keeps
/// repeated authorizations of one socket idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberData {
    /// Stable identifier of the user, as the caller knows them.
    pub user_id: String,
    /// Arbitrary string attributes shown to other channel members.
    #[serde(default)]
    pub user_info: BTreeMap<String, String>,
}

impl MemberData {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_info: BTreeMap::new(),
        }
    }

    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_info.insert(key.into(), value.into());
        self
    }

    /// Serialize to the `channel_data` JSON string that is both signed and
    /// returned to the client.
    pub fn to_channel_data(&self) -> Result<String, GatewayError> {
        Ok(serde_json::to_string(self)?)
    }
}
