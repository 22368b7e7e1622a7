//! Phase state machine with validated transitions.
//!
//! Asking(0) -> ... -> Asking(4) -> Classifying -> AwaitingConfirmation
//! AwaitingConfirmation -> MatchingDoctors | Asking(5)
//! Asking(5) -> Classifying

use intake_core::IntakePhase;

use crate::error::FlowError;

const LAST_QUESTION: u8 = IntakePhase::EXTENSION_STEP - 1;

/// Validate that a phase transition is allowed.
///
/// Valid transitions:
/// - Asking(n) -> Asking(n + 1) for n < 4
/// - Asking(4) -> Classifying
/// - Asking(5) -> Classifying
/// - Classifying -> AwaitingConfirmation
/// - AwaitingConfirmation -> MatchingDoctors
/// - AwaitingConfirmation -> Asking(5)
pub fn validate_transition(from: IntakePhase, to: IntakePhase) -> Result<(), FlowError> {
    use intake_core::IntakePhase::*;

    let valid = match (from, to) {
        (Asking(n), Asking(m)) => n < LAST_QUESTION && m == n + 1,
        (Asking(n), Classifying) => n == LAST_QUESTION || n == IntakePhase::EXTENSION_STEP,
        (Classifying, AwaitingConfirmation) => true,
        (AwaitingConfirmation, MatchingDoctors) => true,
        (AwaitingConfirmation, Asking(n)) => n == IntakePhase::EXTENSION_STEP,
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(FlowError::InvalidTransition(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::IntakePhase::*;

    // =====================================================================
    // Valid transitions
    // =====================================================================

    #[test]
    fn test_asking_advances_one_step() {
        for n in 0..4 {
            assert!(validate_transition(Asking(n), Asking(n + 1)).is_ok());
        }
    }

    #[test]
    fn test_last_question_to_classifying() {
        assert!(validate_transition(Asking(4), Classifying).is_ok());
    }

    #[test]
    fn test_extension_to_classifying() {
        assert!(validate_transition(Asking(5), Classifying).is_ok());
    }

    #[test]
    fn test_classifying_to_awaiting_confirmation() {
        assert!(validate_transition(Classifying, AwaitingConfirmation).is_ok());
    }

    #[test]
    fn test_confirmation_to_matching() {
        assert!(validate_transition(AwaitingConfirmation, MatchingDoctors).is_ok());
    }

    #[test]
    fn test_confirmation_to_extension() {
        assert!(validate_transition(AwaitingConfirmation, Asking(5)).is_ok());
    }

    // =====================================================================
    // Invalid transitions
    // =====================================================================

    #[test]
    fn test_asking_cannot_skip_questions() {
        assert!(validate_transition(Asking(0), Asking(2)).is_err());
        assert!(validate_transition(Asking(1), Asking(4)).is_err());
    }

    #[test]
    fn test_asking_cannot_go_back() {
        assert!(validate_transition(Asking(3), Asking(2)).is_err());
        assert!(validate_transition(Asking(2), Asking(2)).is_err());
    }

    #[test]
    fn test_last_question_does_not_enter_extension() {
        assert!(validate_transition(Asking(4), Asking(5)).is_err());
    }

    #[test]
    fn test_early_question_cannot_classify() {
        assert!(validate_transition(Asking(0), Classifying).is_err());
        assert!(validate_transition(Asking(3), Classifying).is_err());
    }

    #[test]
    fn test_classifying_cannot_skip_confirmation() {
        assert!(validate_transition(Classifying, MatchingDoctors).is_err());
        assert!(validate_transition(Classifying, Asking(5)).is_err());
    }

    #[test]
    fn test_confirmation_cannot_reopen_fixed_questions() {
        assert!(validate_transition(AwaitingConfirmation, Asking(0)).is_err());
        assert!(validate_transition(AwaitingConfirmation, Asking(4)).is_err());
    }

    #[test]
    fn test_matching_doctors_is_terminal() {
        for to in [Asking(0), Asking(5), Classifying, AwaitingConfirmation, MatchingDoctors] {
            assert!(validate_transition(MatchingDoctors, to).is_err());
        }
    }

    #[test]
    fn test_invalid_transition_carries_phases() {
        let err = validate_transition(Asking(1), MatchingDoctors).unwrap_err();
        assert!(matches!(
            err,
            FlowError::InvalidTransition(Asking(1), MatchingDoctors)
        ));
    }
}
