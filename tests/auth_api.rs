//! Authorization API integration tests
//!
//! Exercises the HTTP surface end to end: static assets, the
//! `/pusher/auth` endpoint for private, presence and encrypted channels,
//! and the JSON error contract for malformed requests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use fastgate::auth::member::MemberData;
use fastgate::auth::signature::channel_signature;
use pretty_assertions::assert_eq;

fn server() -> TestServer {
    TestServer::new(common::test_app("127.0.0.1:6002")).unwrap()
}

#[tokio::test]
async fn test_index_served_as_html() {
    let response = server().get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .header("content-type")
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(response.text().contains("FastGate"));
}

#[tokio::test]
async fn test_app_js_served_as_javascript() {
    let response = server().get("/app.js").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .header("content-type")
        .to_str()
        .unwrap()
        .starts_with("text/javascript"));
    assert!(response.text().contains("pusher/auth"));
}

#[tokio::test]
async fn test_private_channel_authorization() {
    let response = server()
        .post("/pusher/auth")
        .form(&[
            ("socket_id", "123.456"),
            ("channel_name", "private-channel"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    // Reference vector: HMAC-SHA256("secret", "123.456:private-channel")
    assert_eq!(
        body["auth"],
        "fastsocket:bc7f86e5c8da546e3ef9f038628a3cc545514dde046a9f8fadda5829cd170c37"
    );
    assert!(body.get("channel_data").is_none());
}

#[tokio::test]
async fn test_private_channel_authorization_is_idempotent() {
    let server = server();
    let form = [("socket_id", "123.456"), ("channel_name", "private-channel")];

    let first: serde_json::Value = server.post("/pusher/auth").form(&form).await.json();
    let second: serde_json::Value = server.post("/pusher/auth").form(&form).await.json();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_presence_channel_with_caller_identity() {
    let member = MemberData::new("42").with_info("username", "ada");
    let channel_data = serde_json::to_string(&member).unwrap();

    let response = server()
        .post("/pusher/auth")
        .form(&[
            ("socket_id", "123.456"),
            ("channel_name", "presence-lobby"),
            ("channel_data", channel_data.as_str()),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();

    // channel_data round-trips to the caller-supplied identity
    let returned = body["channel_data"].as_str().unwrap();
    let parsed: MemberData = serde_json::from_str(returned).unwrap();
    assert_eq!(parsed, member);

    // and the signature verifies against socket:channel:channel_data
    let expected = channel_signature("secret", "123.456", "presence-lobby", Some(returned)).unwrap();
    assert_eq!(body["auth"], format!("fastsocket:{}", expected));
}

#[tokio::test]
async fn test_presence_channel_falls_back_to_demo_identity() {
    let response = server()
        .post("/pusher/auth")
        .form(&[("socket_id", "123.456"), ("channel_name", "presence-lobby")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let returned: MemberData =
        serde_json::from_str(body["channel_data"].as_str().unwrap()).unwrap();
    assert_eq!(returned, common::demo_member());
}

#[tokio::test]
async fn test_private_channel_rejects_member_data() {
    let response = server()
        .post("/pusher/auth")
        .form(&[
            ("socket_id", "123.456"),
            ("channel_name", "private-x"),
            ("channel_data", r#"{"user_id":"42"}"#),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Channel private-x does not accept member data");
}

#[tokio::test]
async fn test_invalid_socket_id_rejected() {
    let response = server()
        .post("/pusher/auth")
        .form(&[("socket_id", "not-a-socket"), ("channel_name", "private-x")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid socket id: not-a-socket");
}

#[tokio::test]
async fn test_malformed_body_yields_json_error() {
    // Not form-encoded at all; must still produce a JSON error body with a
    // non-2xx status rather than crashing or returning plain text.
    let response = server()
        .post("/pusher/auth")
        .content_type("application/json")
        .text("{")
        .await;

    assert!(!response.status_code().is_success());
    let body: serde_json::Value = response.json();
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_missing_fields_yield_json_error() {
    let response = server()
        .post("/pusher/auth")
        .form(&[("channel_name", "private-channel")])
        .await;

    assert!(!response.status_code().is_success());
    let body: serde_json::Value = response.json();
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_bad_channel_data_json_rejected() {
    let response = server()
        .post("/pusher/auth")
        .form(&[
            ("socket_id", "123.456"),
            ("channel_name", "presence-lobby"),
            ("channel_data", "not json"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("channel_data is not valid member data"));
}

#[tokio::test]
async fn test_encrypted_channel_without_master_key() {
    let response = server()
        .post("/pusher/auth")
        .form(&[
            ("socket_id", "123.456"),
            ("channel_name", "private-encrypted-room"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        "Channel private-encrypted-room requires an encryption master key"
    );
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let response = server().get("/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Not found");
}
