//! Event Trigger Module
//!
//! Outbound side of the gateway: builds the broker's signed request
//! envelope and delivers event triggers over HTTP. Shares the signing
//! primitives with the authorization module but carries no state of its
//! own beyond the credentials and a reqwest client.

pub mod client;

pub use client::{BrokerClient, TriggerRequest};
