// src/error.rs
use thiserror::Error;

/// Fixed message shown whenever a submission fails. Failure detail is
/// logged, never displayed.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to get recommendations";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service returned error status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Transport(_) | SubmitError::Status { .. } => "transport_failure",
            SubmitError::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SubmitError::MalformedResponse(e.to_string())
        } else {
            SubmitError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(e: serde_json::Error) -> Self {
        SubmitError::MalformedResponse(e.to_string())
    }
}
