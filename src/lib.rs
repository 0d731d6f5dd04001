//! FastGate - Channel Authorization Gateway
//!
//! FastGate is a thin HTTP front-end for a FastSocket-compatible realtime
//! broker. It authorizes browser clients to subscribe to restricted pub/sub
//! channels and can trigger events on those channels, without ever handing
//! the shared application secret to a client.
//!
//! # Overview
//!
//! Two operations carry all the logic:
//!
//! - **Channel authorization** - given a socket id, a channel name and (for
//!   presence channels) a member identity, produce the HMAC-SHA256-signed
//!   token the broker verifies on subscription.
//! - **Event triggering** - wrap an event in the broker's signed HTTP
//!   request envelope and deliver it, best-effort, to the broker's
//!   ingestion API.
//!
//! Everything else is wiring: an Axum server, environment configuration,
//! two embedded demo assets.
//!
//! # Module Structure
//!
//! - **`auth`** - credentials, channel grammar, member data, signing,
//!   and the authorization decision itself (pure computation)
//! - **`trigger`** - the broker client and its request envelope
//! - **`routes`** - HTTP handlers and the route table
//! - **`server`** - configuration, application state, assembly
//! - **`error`** - the error taxonomy and its JSON response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use fastgate::server::{config::GatewayConfig, init::create_app};
//!
//! # fn example() -> Result<(), fastgate::error::GatewayError> {
//! let config = GatewayConfig::from_env()?;
//! let app = create_app(config)?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod routes;
pub mod server;
pub mod trigger;
