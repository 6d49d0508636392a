//! Chat events - inputs that drive transcript transitions

use chat_client::ChatResult;

/// Defines the events that can trigger transcript transitions.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// The user submitted text from the input surface.
    MessageSubmitted { text: String },

    /// The in-flight round trip resolved, successfully or not.
    RoundTripResolved { result: ChatResult },
}

impl ChatEvent {
    /// Check if this event is user-initiated.
    pub fn is_user_event(&self) -> bool {
        matches!(self, Self::MessageSubmitted { .. })
    }
}
