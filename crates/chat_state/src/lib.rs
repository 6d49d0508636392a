//! chat_state - Transcript state machine and session driver
//!
//! This crate owns the chat transcript: a two-state machine that appends
//! messages on submit and resolve, and a session driver that performs the
//! round trip through a [`chat_client::ChatTransport`] and publishes
//! post-transition snapshots to rendering layers.

pub mod machine;
pub mod session;

// Re-export commonly used types
pub use machine::{
    ChatEvent, ChatPhase, StateMachine, StateTransition, TranscriptSnapshot, TransitionError,
};
pub use session::ChatSession;
