//! chat_core - Core types shared by the chat client and the relay
//!
//! Message types for the transcript and the wire shapes exchanged over
//! the `/api/chat` endpoint.

pub mod message;
pub mod wire;

// Re-export commonly used types
pub use message::{ChatMessage, Role};
pub use wire::{ChatReply, ChatRequest};
