use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type Result<T, E = RelayError> = std::result::Result<T, E>;

/// Body text of every server-fault response. The real detail is logged
/// server-side and never sent to the client.
pub const VENDOR_FAILURE_MESSAGE: &str = "AI failed to respond";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Message is required")]
    MissingMessage,

    #[error("OPENAI_API_KEY not found in environment")]
    MissingCredential,

    #[error("vendor request failed: {0}")]
    Vendor(#[from] anyhow::Error),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingMessage => StatusCode::BAD_REQUEST,
            RelayError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Vendor(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            RelayError::MissingMessage => HttpResponse::build(self.status_code())
                .json(json!({ "error": self.to_string() })),
            _ => HttpResponse::build(self.status_code())
                .json(json!({ "message": VENDOR_FAILURE_MESSAGE })),
        }
    }
}
