//! Transport failure taxonomy and the error normalizer.
//!
//! Failures are classified into a closed variant set at the point they
//! are observed; nothing downstream inspects raw reqwest errors. The
//! normalizer collapses the taxonomy into the one shape callers handle.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing text when the server cannot be reached in time.
pub const NOT_RESPONDING_MESSAGE: &str = "Server is not responding, wait before trying again";

/// Fallback when a rejection carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Last-resort text for failures with no usable detail.
pub const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred";

/// Classified transport failure.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The client gave up waiting, or the request went out and no
    /// response ever arrived.
    #[error("server did not respond")]
    TimeoutOrUnreachable,

    /// The backend answered with a non-2xx status.
    #[error("backend rejected the request with status {status}")]
    BackendRejected {
        status: StatusCode,
        /// `message` field of the JSON error body, when one was present.
        message: Option<String>,
    },

    /// A runtime fault raised before or while attempting the call.
    #[error("{0}")]
    LocalFault(String),

    /// A failure carrying no usable detail.
    #[error("unknown transport failure")]
    Unknown,
}

/// JSON error body the backend may attach to a rejection.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl TransportError {
    /// Classify a reqwest failure raised while sending the request or
    /// waiting for the response headers.
    pub(crate) fn from_request_error(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            return Self::TimeoutOrUnreachable;
        }
        let detail = err.to_string();
        if detail.is_empty() {
            Self::Unknown
        } else {
            Self::LocalFault(detail)
        }
    }

    /// Build the rejection variant from a non-2xx response, pulling the
    /// optional `message` field out of the body.
    pub(crate) async fn from_failure_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => None,
        };
        Self::BackendRejected { status, message }
    }
}

/// Uniform error shape handed to callers of the transport.
///
/// Constructed only by [`normalize`]; the success/failure discriminator
/// lives in the `Result` variant rather than a stored flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedError {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl NormalizedError {
    /// Human-readable failure text; never empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, present exactly when the backend answered with a
    /// non-2xx response.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl std::fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {status})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Collapse a classified failure into the uniform shape.
///
/// Total over [`TransportError`]. The arm order mirrors the
/// classification priority: the timeout/no-response cases come before the
/// rejection case, which is the only one that carries a status.
pub fn normalize(err: TransportError) -> NormalizedError {
    match err {
        TransportError::TimeoutOrUnreachable => NormalizedError {
            message: NOT_RESPONDING_MESSAGE.to_string(),
            status: None,
        },
        TransportError::BackendRejected { status, message } => NormalizedError {
            message: message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            status: Some(status.as_u16()),
        },
        TransportError::LocalFault(detail) if !detail.is_empty() => NormalizedError {
            message: detail,
            status: None,
        },
        TransportError::LocalFault(_) | TransportError::Unknown => NormalizedError {
            message: UNKNOWN_FAILURE_MESSAGE.to_string(),
            status: None,
        },
    }
}
