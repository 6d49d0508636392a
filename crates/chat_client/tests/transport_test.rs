//! Integration tests for ChatApiClient against a mock relay.

use std::time::Duration;

use chat_client::{ChatApiClient, ChatTransport, ClientConfig};
use chat_core::ChatReply;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ChatApiClient {
    ChatApiClient::new(ClientConfig::with_base_url(server.uri())).expect("client")
}

#[tokio::test]
async fn test_successful_round_trip_returns_reply_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(serde_json::json!({ "message": "Hello" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "reply": "Hi there!" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.send("Hello").await;

    assert_eq!(result, Ok(ChatReply::new("Hi there!")));
}

#[tokio::test]
async fn test_rejection_with_message_body_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "message": "AI failed to respond" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.send("Hello").await.unwrap_err();

    assert_eq!(err.message(), "AI failed to respond");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_rejection_without_message_falls_back_to_generic_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.send("Hello").await.unwrap_err();

    assert_eq!(err.message(), "Something went wrong");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_error_body_with_other_keys_still_falls_back() {
    let mock_server = MockServer::start().await;

    // The relay's validation body uses an `error` key, not `message`.
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "Message is required" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.send("Hello").await.unwrap_err();

    assert_eq!(err.message(), "Something went wrong");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_timeout_is_normalized_without_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "reply": "too late" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig {
        base_url: mock_server.uri(),
        timeout: Duration::from_millis(50),
    };
    let client = ChatApiClient::new(config).expect("client");
    let err = client.send("Ping").await.unwrap_err();

    assert_eq!(
        err.message(),
        "Server is not responding, wait before trying again"
    );
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_unreachable_server_is_normalized_without_status() {
    // Nothing listens on port 1.
    let client =
        ChatApiClient::new(ClientConfig::with_base_url("http://127.0.0.1:1")).expect("client");
    let err = client.send("Ping").await.unwrap_err();

    assert_eq!(
        err.message(),
        "Server is not responding, wait before trying again"
    );
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_malformed_success_body_surfaces_local_fault() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.send("Hello").await.unwrap_err();

    assert!(err.message().starts_with("invalid reply body"));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_exactly_one_request_per_send() {
    let mock_server = MockServer::start().await;

    // A 503 must not be retried; one call, one request.
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let _ = client.send("Hello").await;
}
