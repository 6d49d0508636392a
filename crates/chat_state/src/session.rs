//! Session driver - wires the transcript machine to a transport.

use std::sync::Arc;

use chat_client::ChatTransport;
use chat_core::ChatMessage;
use log::debug;
use tokio::sync::watch;

use crate::machine::{ChatEvent, StateMachine, TranscriptSnapshot, TransitionError};

/// Drives one chat session: owns the state machine, performs round trips
/// through the transport, and publishes a snapshot after every
/// transition.
///
/// The transcript and loading flag are mutated only through the machine's
/// two transitions; rendering layers observe via [`ChatSession::subscribe`]
/// and never touch the state directly.
pub struct ChatSession {
    machine: StateMachine,
    transport: Arc<dyn ChatTransport>,
    snapshot_tx: watch::Sender<TranscriptSnapshot>,
}

impl ChatSession {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        let machine = StateMachine::new();
        let (snapshot_tx, _) = watch::channel(machine.snapshot());
        Self {
            machine,
            transport,
            snapshot_tx,
        }
    }

    /// Subscribe to post-transition snapshots. Receivers redraw from
    /// these; no reactivity framework is assumed.
    pub fn subscribe(&self) -> watch::Receiver<TranscriptSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.machine.messages()
    }

    pub fn is_loading(&self) -> bool {
        self.machine.is_loading()
    }

    /// Submit one user message and drive it to resolution.
    ///
    /// The round trip resumes exactly once: the resolve transition runs
    /// whether the transport produced a reply or a normalized error.
    /// There is no cancellation; once the machine is `Awaiting`, the
    /// in-flight request runs to completion and the transport's own
    /// timeout is the only bound. A submit rejected by the machine
    /// (empty text, request already in flight) returns the transition
    /// error without touching the transport.
    pub async fn submit(&mut self, text: &str) -> Result<(), TransitionError> {
        self.machine.handle_event(ChatEvent::MessageSubmitted {
            text: text.to_string(),
        })?;
        self.publish();

        let result = self.transport.send(text).await;
        debug!("round trip resolved (ok: {})", result.is_ok());

        self.machine
            .handle_event(ChatEvent::RoundTripResolved { result })?;
        self.publish();
        Ok(())
    }

    fn publish(&self) {
        // send_replace keeps the latest snapshot even with no receivers.
        self.snapshot_tx.send_replace(self.machine.snapshot());
    }
}
