//! Trigger delivery integration tests
//!
//! Runs the gateway against a wiremock broker to verify the signed request
//! envelope, the single-attempt delivery semantics and the error mapping
//! for broker failures.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gateway_for(broker: &MockServer) -> TestServer {
    TestServer::new(common::test_app(&common::host_of(&broker.uri()))).unwrap()
}

#[tokio::test]
async fn test_trigger_delivers_signed_event() {
    let broker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/fastsocket/events"))
        .and(query_param("auth_key", "fastsocket"))
        .and(query_param("auth_version", "1.0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&broker)
        .await;

    let server = gateway_for(&broker).await;
    let response = server.get("/trigger").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Event triggered successfully");

    // Inspect what the broker actually received
    let requests = broker.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    let event: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(event["name"], "event");
    assert_eq!(event["channels"], serde_json::json!(["private-channel"]));
    assert_eq!(event["data"], r#"{"message":"Hello world"}"#);

    // The envelope carries a signature and a body digest, never the secret
    let query = request.url.query().unwrap();
    assert!(query.contains("auth_signature="));
    assert!(query.contains("body_md5="));
    assert!(query.contains("auth_timestamp="));
    assert!(!query.contains("secret"));
}

#[tokio::test]
async fn test_broker_error_status_is_surfaced_without_retry() {
    let broker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/fastsocket/events"))
        .respond_with(ResponseTemplate::new(503))
        // Exactly one delivery attempt; a retry would trip this expectation
        .expect(1)
        .mount(&broker)
        .await;

    let server = gateway_for(&broker).await;
    let response = server.get("/trigger").await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Broker responded with status 503");

    broker.verify().await;
}

#[tokio::test]
async fn test_broker_timeout_is_surfaced() {
    let broker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/fastsocket/events"))
        // Longer than the 1s fixture deadline
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&broker)
        .await;

    let server = gateway_for(&broker).await;
    let response = server.get("/trigger").await;

    assert_eq!(response.status_code(), StatusCode::GATEWAY_TIMEOUT);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Broker request timed out");
}

#[tokio::test]
async fn test_unreachable_broker_is_surfaced() {
    // Nothing listens on port 1
    let server = TestServer::new(common::test_app("127.0.0.1:1")).unwrap();
    let response = server.get("/trigger").await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Broker unreachable"));
}
