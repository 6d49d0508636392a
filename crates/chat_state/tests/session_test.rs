//! Integration tests for ChatSession with a mocked transport.

use std::sync::Arc;

use async_trait::async_trait;
use chat_client::{normalize, ChatResult, ChatTransport, TransportError};
use chat_core::{ChatReply, Role};
use chat_state::{ChatSession, TransitionError};
use mockall::mock;
use reqwest::StatusCode;

mock! {
    pub Transport {}

    #[async_trait]
    impl ChatTransport for Transport {
        async fn send(&self, message: &str) -> ChatResult;
    }
}

#[tokio::test]
async fn test_successful_submit_builds_two_message_transcript() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|message| message == "Hello")
        .times(1)
        .returning(|_| Ok(ChatReply::new("Hi there!")));

    let mut session = ChatSession::new(Arc::new(transport));
    session.submit("Hello").await.unwrap();

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role(), Role::User);
    assert_eq!(messages[0].content(), "Hello");
    assert_eq!(messages[1].role(), Role::Assistant);
    assert_eq!(messages[1].content(), "Hi there!");
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_failed_submit_shows_fixed_assistant_text() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Err(normalize(TransportError::TimeoutOrUnreachable)));

    let mut session = ChatSession::new(Arc::new(transport));
    session.submit("Ping").await.unwrap();

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].content(), "Something went wrong");
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_rejected_backend_detail_is_not_shown_to_user() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(1).returning(|_| {
        Err(normalize(TransportError::BackendRejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: Some("AI failed to respond".to_string()),
        }))
    });

    let mut session = ChatSession::new(Arc::new(transport));
    session.submit("Hello").await.unwrap();

    // The richer normalized message is telemetry-only.
    assert_eq!(session.messages()[1].content(), "Something went wrong");
}

#[tokio::test]
async fn test_empty_submit_never_reaches_transport() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(0);

    let mut session = ChatSession::new(Arc::new(transport));
    let err = session.submit("   ").await.unwrap_err();

    assert_eq!(err, TransitionError::EmptyMessage);
    assert!(session.messages().is_empty());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_transcript_length_is_twice_the_round_trips() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .times(3)
        .returning(|_| Ok(ChatReply::new("ok")));

    let mut session = ChatSession::new(Arc::new(transport));
    for i in 0..3 {
        session.submit(&format!("msg {i}")).await.unwrap();
    }

    assert_eq!(session.messages().len(), 6);
}

#[tokio::test]
async fn test_subscriber_observes_published_snapshots() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Ok(ChatReply::new("Hi there!")));

    let mut session = ChatSession::new(Arc::new(transport));
    let mut snapshots = session.subscribe();

    // Initial snapshot: empty, not loading.
    {
        let initial = snapshots.borrow_and_update();
        assert!(initial.messages.is_empty());
        assert!(!initial.loading);
    }

    session.submit("Hello").await.unwrap();

    // The latest published snapshot is the post-resolution state.
    assert!(snapshots.has_changed().unwrap());
    let latest = snapshots.borrow_and_update();
    assert_eq!(latest.messages.len(), 2);
    assert!(!latest.loading);
}
