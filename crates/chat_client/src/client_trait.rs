use async_trait::async_trait;

use crate::ChatResult;

/// Boundary the transcript layer talks to. Tests substitute the network
/// round trip through this trait.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Perform one chat round trip.
    ///
    /// Exactly one outbound request per call, no retries. Every failure
    /// comes back normalized in the `Err` arm; this method never panics
    /// and never surfaces a raw transport error. Emptiness of `message`
    /// is the caller's guard, not the transport's.
    async fn send(&self, message: &str) -> ChatResult;
}
