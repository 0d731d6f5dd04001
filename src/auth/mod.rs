//! Channel Authorization Module
//!
//! Everything needed to decide and sign a channel-subscription
//! authorization:
//!
//! - **`credentials`** - the immutable per-app credential set
//! - **`channel`** - channel-name and socket-id grammar, channel kinds
//! - **`member`** - presence-channel member identity
//! - **`signature`** - HMAC-SHA256 / SHA256 / MD5 signing primitives
//! - **`authorizer`** - validation and response assembly
//!
//! The module is pure computation; it performs no I/O and holds no mutable
//! state, so authorizations from concurrent requests never interact.

pub mod authorizer;
pub mod channel;
pub mod credentials;
pub mod member;
pub mod signature;

pub use authorizer::{AuthorizationRequest, AuthorizationResponse, ChannelAuthorizer};
pub use channel::ChannelKind;
pub use credentials::AppCredentials;
pub use member::MemberData;
