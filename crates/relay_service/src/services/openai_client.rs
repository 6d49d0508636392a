//! Vendor completion client.

use anyhow::{anyhow, Context};
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const MODEL: &str = "gpt-4.1-mini";
const SYSTEM_PROMPT: &str = "You are a helpful coding assistant.";
const MAX_OUTPUT_TOKENS: u32 = 300;

#[derive(Serialize)]
struct CompletionMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct CompletionRequest {
    model: &'static str,
    messages: Vec<CompletionMessage>,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

/// Stateless handle for the vendor completion API.
///
/// Created once per process through [`crate::AppState::vendor`]; all
/// requests share one connection pool.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl OpenAiClient {
    /// Build from process configuration. A missing `OPENAI_API_KEY` is a
    /// fatal configuration error: the relay refuses chat requests rather
    /// than proceeding without a credential.
    pub fn from_env() -> Result<Self, RelayError> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| RelayError::MissingCredential)?;
        let api_base = std::env::var("OPENAI_API_BASE")
            .ok()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Ok(Self::new(api_key, api_base))
    }

    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// One completion round trip: a fixed two-turn prompt (system
    /// persona, then the user message) with a bounded output length.
    pub async fn complete(&self, message: &str) -> anyhow::Result<String> {
        let request = CompletionRequest {
            model: MODEL,
            messages: vec![
                CompletionMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                CompletionMessage {
                    role: "user",
                    content: message.to_string(),
                },
            ],
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        debug!("requesting completion from {}", self.api_base);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("vendor request could not be sent")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("vendor responded with status {status}: {body}"));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .context("vendor response body could not be decoded")?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("vendor response contained no choices"))
    }
}
