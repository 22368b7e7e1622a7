//! Error types for backend collaborator calls.

use intake_core::IntakeError;

/// Errors from the intake, matching, and booking collaborators.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("backend calls are disabled")]
    Disabled,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode backend response: {0}")]
    Decode(String),
    #[error("backend rejected the request: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}

impl From<ClientError> for IntakeError {
    fn from(err: ClientError) -> Self {
        IntakeError::Backend(err.to_string())
    }
}
