/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The process credentials (read-only, shared by all requests)
 * - The channel authorizer
 * - The broker client for trigger deliveries
 * - The fallback presence identity for the demo page
 *
 * # Thread Safety
 *
 * Nothing in the state is mutable after startup. The credentials sit
 * behind an `Arc`, the authorizer and broker client clone cheaply, so
 * request handling never takes a lock.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::authorizer::ChannelAuthorizer;
use crate::auth::credentials::AppCredentials;
use crate::auth::member::MemberData;
use crate::trigger::client::BrokerClient;

/// Application state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide credentials, injected at startup.
    pub credentials: Arc<AppCredentials>,

    /// Signs channel-subscription authorizations.
    pub authorizer: ChannelAuthorizer,

    /// Delivers event triggers to the broker.
    pub broker: BrokerClient,

    /// Presence identity substituted when an auth request carries none.
    pub demo_member: Arc<MemberData>,
}

/// Allows handlers to extract the authorizer directly with
/// `State(authorizer): State<ChannelAuthorizer>`.
impl FromRef<AppState> for ChannelAuthorizer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.authorizer.clone()
    }
}

/// Allows handlers to extract the broker client directly.
impl FromRef<AppState> for BrokerClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.broker.clone()
    }
}

/// Allows handlers to extract the fallback presence identity directly.
impl FromRef<AppState> for Arc<MemberData> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.demo_member.clone()
    }
}
