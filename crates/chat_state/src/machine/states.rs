//! Chat phases - the states of a transcript's lifecycle

use serde::{Deserialize, Serialize};

/// Defines the possible phases of a transcript's lifecycle.
///
/// Deliberately a two-state machine: a failed round trip resolves back
/// to `Idle` with an appended assistant message, so no separate error
/// state exists.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatPhase {
    /// Ready for user input; no request in flight.
    Idle,

    /// One request is in flight; further submits are rejected.
    Awaiting,
}

impl Default for ChatPhase {
    fn default() -> Self {
        ChatPhase::Idle
    }
}

impl ChatPhase {
    /// True exactly while a round trip is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Awaiting)
    }

    /// Check if this phase allows a new submit.
    pub fn accepts_user_input(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get a human-readable description of the current phase.
    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Ready for input",
            Self::Awaiting => "Waiting for AI response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_idle() {
        assert_eq!(ChatPhase::default(), ChatPhase::Idle);
    }

    #[test]
    fn test_loading_tracks_awaiting() {
        assert!(!ChatPhase::Idle.is_loading());
        assert!(ChatPhase::Awaiting.is_loading());
    }

    #[test]
    fn test_only_idle_accepts_input() {
        assert!(ChatPhase::Idle.accepts_user_input());
        assert!(!ChatPhase::Awaiting.accepts_user_input());
    }
}
