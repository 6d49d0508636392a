//! Wire contracts for the `/api/chat` endpoint
//!
//! Shared by the client transport and the relay so both sides agree on
//! the request/response pair.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
///
/// `message` defaults to empty on deserialization, so a request with the
/// field missing is handled the same way as one with an empty string.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful `/api/chat` response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}
