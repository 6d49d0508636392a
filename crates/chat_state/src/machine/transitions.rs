//! State transitions - transcript FSM logic
//!
//! Implements the state machine that owns the message list and the
//! loading flag. The two transitions below are the only code paths that
//! touch either.

use chat_core::ChatMessage;
use log::warn;
use serde::Serialize;
use thiserror::Error;

use super::events::ChatEvent;
use super::states::ChatPhase;

/// Assistant text shown for any failed round trip. The normalized error
/// detail stays in the logs; the user sees this fixed string.
pub const FAILURE_REPLY: &str = "Something went wrong";

const MAX_HISTORY: usize = 50;

/// Error type for rejected transcript events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("message is empty after trimming")]
    EmptyMessage,

    #[error("a request is already in flight")]
    RequestInFlight,

    #[error("no request is in flight to resolve")]
    NotAwaiting,
}

/// Record of one applied transition.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The phase before the transition.
    pub from: ChatPhase,
    /// The phase after the transition.
    pub to: ChatPhase,
    /// The event that triggered the transition.
    pub event: ChatEvent,
    /// Whether the phase actually changed.
    pub changed: bool,
}

/// Post-transition view of the transcript, published to rendering layers.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptSnapshot {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

/// State machine owning the transcript and the loading flag.
#[derive(Debug, Default)]
pub struct StateMachine {
    phase: ChatPhase,
    messages: Vec<ChatMessage>,
    /// Transition history (limited).
    history: Vec<StateTransition>,
}

impl StateMachine {
    /// Create a new state machine: Idle, empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current phase.
    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    /// True exactly between a submit and its resolution.
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// The transcript in conversation order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Clone out the current state for publication.
    pub fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot {
            messages: self.messages.clone(),
            loading: self.phase.is_loading(),
        }
    }

    /// Handle an event and transition to a new phase.
    ///
    /// Rejected events leave both the transcript and the phase untouched.
    /// The in-flight guard lives here, not at the UI boundary, so the
    /// single-outstanding-request invariant holds even if a caller
    /// bypasses a disabled control.
    pub fn handle_event(&mut self, event: ChatEvent) -> Result<StateTransition, TransitionError> {
        let from = self.phase;
        let to = match (from, &event) {
            (ChatPhase::Idle, ChatEvent::MessageSubmitted { text }) => {
                if text.trim().is_empty() {
                    return Err(TransitionError::EmptyMessage);
                }
                self.messages.push(ChatMessage::user(text.clone()));
                ChatPhase::Awaiting
            }
            (ChatPhase::Awaiting, ChatEvent::MessageSubmitted { .. }) => {
                return Err(TransitionError::RequestInFlight);
            }
            (ChatPhase::Awaiting, ChatEvent::RoundTripResolved { result }) => {
                match result {
                    Ok(reply) => {
                        self.messages.push(ChatMessage::assistant(reply.reply.clone()));
                    }
                    Err(err) => {
                        match err.status() {
                            Some(status) => {
                                warn!("round trip failed with status {status}: {}", err.message())
                            }
                            None => warn!("round trip failed: {}", err.message()),
                        }
                        self.messages.push(ChatMessage::assistant(FAILURE_REPLY));
                    }
                }
                ChatPhase::Idle
            }
            (ChatPhase::Idle, ChatEvent::RoundTripResolved { .. }) => {
                return Err(TransitionError::NotAwaiting);
            }
        };

        self.phase = to;
        let transition = StateTransition {
            from,
            to,
            event,
            changed: from != to,
        };

        self.history.push(transition.clone());
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }

        Ok(transition)
    }
}
