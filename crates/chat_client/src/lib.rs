//! chat_client - Chat transport and error normalization
//!
//! Performs the single outbound call to the relay's chat endpoint and
//! collapses every failure into one uniform shape. Callers never see a
//! raw transport error.

pub mod api;
pub mod client_trait;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use api::client::ChatApiClient;
pub use client_trait::ChatTransport;
pub use config::ClientConfig;
pub use error::{normalize, NormalizedError, TransportError};

/// Outcome of one chat round trip: the backend's reply, or the
/// normalized form of whatever went wrong.
pub type ChatResult = Result<chat_core::ChatReply, NormalizedError>;
