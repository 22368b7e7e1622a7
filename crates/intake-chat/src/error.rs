//! Error types for the intake flow.

use intake_core::{IntakeError, IntakePhase, IntakeSession};

/// Errors from the questionnaire sequencer.
///
/// Blank answers and collaborator failures are not errors; only malformed
/// requests against the flow itself end up here.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("invalid phase transition from {0} to {1}")]
    InvalidTransition(IntakePhase, IntakePhase),
    #[error("answer exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
}

impl From<FlowError> for IntakeError {
    fn from(err: FlowError) -> Self {
        IntakeError::InvalidInput(err.to_string())
    }
}

/// A rejected submission together with the session it was applied to.
///
/// The session is returned exactly as it was passed in.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct SubmitError {
    pub session: Box<IntakeSession>,
    pub error: FlowError,
}

impl SubmitError {
    pub fn new(session: IntakeSession, error: FlowError) -> Self {
        Self {
            session: Box::new(session),
            error,
        }
    }

    /// Take back the untouched session and the reason it was rejected.
    pub fn into_parts(self) -> (IntakeSession, FlowError) {
        (*self.session, self.error)
    }
}

impl From<SubmitError> for IntakeError {
    fn from(err: SubmitError) -> Self {
        err.error.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_error_display() {
        let err = FlowError::InvalidTransition(
            IntakePhase::Asking(1),
            IntakePhase::AwaitingConfirmation,
        );
        assert_eq!(
            err.to_string(),
            "invalid phase transition from asking(1) to awaiting_confirmation"
        );

        let err = FlowError::MessageTooLong(2000);
        assert_eq!(
            err.to_string(),
            "answer exceeds maximum length of 2000 characters"
        );
    }

    #[test]
    fn test_flow_error_into_intake_error() {
        let err: IntakeError = FlowError::MessageTooLong(10).into();
        assert!(matches!(err, IntakeError::InvalidInput(_)));
        assert!(err.to_string().contains("10 characters"));
    }

    #[test]
    fn test_submit_error_returns_session() {
        let session = IntakeSession::new(
            intake_core::SessionId("s-1".to_string()),
            intake_core::UserContext::default(),
        );
        let err = SubmitError::new(session.clone(), FlowError::MessageTooLong(5));
        assert_eq!(
            err.to_string(),
            "answer exceeds maximum length of 5 characters"
        );

        let (back, reason) = err.into_parts();
        assert_eq!(back, session);
        assert!(matches!(reason, FlowError::MessageTooLong(5)));
    }
}
