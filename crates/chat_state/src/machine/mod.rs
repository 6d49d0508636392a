//! State machine module
//!
//! Contains the FSM implementation for the transcript lifecycle.

mod events;
mod states;
mod transitions;

pub use events::ChatEvent;
pub use states::ChatPhase;
pub use transitions::{
    StateMachine, StateTransition, TranscriptSnapshot, TransitionError, FAILURE_REPLY,
};
