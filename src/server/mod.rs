//! Server Module
//!
//! Process-level wiring for the gateway:
//!
//! - **`config`** - environment-driven configuration, read once at startup
//! - **`state`** - the shared application state and its `FromRef` impls
//! - **`init`** - assembly of the Axum application from a configuration

pub mod config;
pub mod init;
pub mod state;

pub use config::GatewayConfig;
pub use init::create_app;
pub use state::AppState;
