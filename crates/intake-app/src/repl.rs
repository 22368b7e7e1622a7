//! One questionnaire line at a time, with the terminal text it produces.

use intake_chat::{Advance, FlowError, IntakeOrchestrator, SubmitError};
use intake_core::{IntakePhase, IntakeSession};

/// Session after one line, plus what to print.
#[derive(Debug)]
pub struct LineStep {
    pub session: IntakeSession,
    pub output: Vec<String>,
    /// The patient accepted the summary.
    pub confirmed: bool,
}

pub const CONFIRMATION_REPROMPT: &str = "Please answer **Yes** or **No**.";

pub fn too_long(max: usize) -> String {
    format!(
        "That answer is too long. Please keep it under {} characters.",
        max
    )
}

/// Submit one input line.
///
/// An overlong answer is reported and the session kept; any other rejection
/// is returned to the caller.
pub async fn handle_line(
    orchestrator: &IntakeOrchestrator,
    session: IntakeSession,
    line: &str,
) -> Result<LineStep, SubmitError> {
    let (session, turn) = match orchestrator.submit(session, line).await {
        Ok(result) => result,
        Err(SubmitError {
            session,
            error: FlowError::MessageTooLong(max),
        }) => {
            return Ok(LineStep {
                session: *session,
                output: vec![too_long(max)],
                confirmed: false,
            });
        }
        Err(e) => return Err(e),
    };

    let mut output = Vec::new();
    if let Some(reply) = turn.reply {
        output.push(format!("\n{}\n", reply));
    }
    if let Some(alert) = turn.alert {
        output.push(format!("{}\n", alert));
    }

    let confirmed = turn.advance == Advance::Confirmed;
    if turn.advance.is_ignored()
        && session.phase == IntakePhase::AwaitingConfirmation
        && !line.trim().is_empty()
    {
        output.push(CONFIRMATION_REPROMPT.to_string());
    }

    Ok(LineStep {
        session,
        output,
        confirmed,
    })
}
