//! Shared fixtures for integration tests.
//!
//! Builds a gateway application from fixture credentials so tests never
//! touch process-wide environment state.

use std::time::Duration;

use axum::Router;
use fastgate::auth::credentials::AppCredentials;
use fastgate::auth::member::MemberData;
use fastgate::server::config::GatewayConfig;
use fastgate::server::init::create_app;

/// The demo identity substituted for presence requests without member data.
pub fn demo_member() -> MemberData {
    MemberData::new("101")
        .with_info("username", "smrockypk")
        .with_info("avatar", "https://avatars.githubusercontent.com/u/101?v=4")
}

/// Fixture configuration pointing at the given broker host.
pub fn test_config(broker_host: &str) -> GatewayConfig {
    GatewayConfig {
        credentials: AppCredentials::new("fastsocket", "fastsocket", "secret", "ap1").unwrap(),
        broker_host: broker_host.to_string(),
        secure: false,
        trigger_timeout: Duration::from_secs(1),
        demo_member: demo_member(),
        port: 0,
    }
}

/// A ready-to-serve gateway wired to the given broker host.
pub fn test_app(broker_host: &str) -> Router {
    create_app(test_config(broker_host)).unwrap()
}

/// Strip the scheme from a wiremock URI so it fits the broker-host config.
pub fn host_of(uri: &str) -> String {
    uri.strip_prefix("http://").unwrap_or(uri).to_string()
}
