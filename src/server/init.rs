/**
 * Server Initialization
 *
 * This module assembles the gateway from its configuration: credentials,
 * authorizer, broker client, application state and router.
 *
 * # Initialization Process
 *
 * 1. Wrap the credentials in an `Arc` shared by both components
 * 2. Build the channel authorizer
 * 3. Build the broker client with the configured host and deadline
 * 4. Create the router with request tracing
 *
 * A broken configuration (the only way any step here can fail) aborts
 * startup; there is no degraded mode, since every endpoint depends on the
 * credentials.
 */

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::authorizer::ChannelAuthorizer;
use crate::error::GatewayError;
use crate::routes::router::create_router;
use crate::server::config::GatewayConfig;
use crate::server::state::AppState;
use crate::trigger::client::BrokerClient;

/// Create the Axum application from a loaded configuration.
pub fn create_app(config: GatewayConfig) -> Result<Router, GatewayError> {
    tracing::info!(
        "Initializing gateway for app {} (broker {})",
        config.credentials.app_id(),
        config.broker_host
    );

    let credentials = Arc::new(config.credentials);
    let authorizer = ChannelAuthorizer::new(credentials.clone());
    let broker = BrokerClient::new(
        credentials.clone(),
        &config.broker_host,
        config.secure,
        config.trigger_timeout,
    )?;

    let app_state = AppState {
        credentials,
        authorizer,
        broker,
        demo_member: Arc::new(config.demo_member),
    };

    Ok(create_router(app_state).layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::AppCredentials;
    use crate::auth::member::MemberData;
    use std::time::Duration;

    #[test]
    fn test_create_app_from_config() {
        let config = GatewayConfig {
            credentials: AppCredentials::new("app", "key", "secret", "ap1").unwrap(),
            broker_host: "127.0.0.1:6002".into(),
            secure: false,
            trigger_timeout: Duration::from_secs(5),
            demo_member: MemberData::new("101"),
            port: 8080,
        };
        assert!(create_app(config).is_ok());
    }
}
