//! HTTP client for the relay's chat endpoint.

use anyhow::anyhow;
use async_trait::async_trait;
use chat_core::{ChatReply, ChatRequest};
use log::{debug, warn};
use reqwest::Client;

use crate::client_trait::ChatTransport;
use crate::config::ClientConfig;
use crate::error::{normalize, TransportError};
use crate::ChatResult;

/// Talks to the relay's `POST /api/chat` endpoint.
pub struct ChatApiClient {
    client: Client,
    base_url: String,
}

impl ChatApiClient {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    async fn request_reply(&self, message: &str) -> Result<ChatReply, TransportError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(TransportError::from_request_error)?;

        if !response.status().is_success() {
            return Err(TransportError::from_failure_response(response).await);
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| TransportError::LocalFault(format!("invalid reply body: {e}")))
    }
}

#[async_trait]
impl ChatTransport for ChatApiClient {
    async fn send(&self, message: &str) -> ChatResult {
        debug!("sending chat message ({} bytes)", message.len());
        match self.request_reply(message).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                warn!("chat round trip failed: {err}");
                Err(normalize(err))
            }
        }
    }
}
