//! Questionnaire sequencer.
//!
//! Pure session transitions: every operation takes an [`IntakeSession`] by
//! value and hands back the next one, or hands the same one back inside a
//! [`SubmitError`] when the request is rejected. No I/O happens here.

use std::sync::Arc;

use tracing::debug;

use intake_core::config::FlowConfig;
use intake_core::{
    IntakePhase, IntakeSession, QuestionKey, Role, SessionId, TriageResult, UserContext,
};
use intake_triage::{classify, render_summary};

use crate::acknowledgment::PhrasePicker;
use crate::error::{FlowError, SubmitError};
use crate::questionnaire::{
    greeting, parse_confirmation, prompt_for, EXTENSION_PROMPT, MATCHING_PROMPT,
};
use crate::state_machine::validate_transition;

/// What a submission did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Nothing changed: blank input, a completed session, or an unrecognised
    /// reply to the summary prompt.
    Ignored,
    /// Answer recorded and the next question asked.
    Asked(QuestionKey),
    /// The session completed and was classified.
    Classified(TriageResult),
    /// The patient accepted the summary; hand off to doctor matching.
    Confirmed,
    /// The patient has more to add; the session is open again.
    Reopened,
}

impl Advance {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Advance::Ignored)
    }
}

/// Drives sessions through the fixed questionnaire.
#[derive(Clone)]
pub struct Sequencer {
    config: FlowConfig,
    picker: Arc<dyn PhrasePicker>,
}

impl Sequencer {
    pub fn new(config: FlowConfig, picker: Arc<dyn PhrasePicker>) -> Self {
        Self { config, picker }
    }

    /// Open a session: greeting plus the first question.
    pub fn start(&self, session_id: SessionId, user: UserContext) -> IntakeSession {
        let mut session = IntakeSession::new(session_id, user);
        let opening = format!(
            "{}\n\n{}",
            greeting(&session.user),
            prompt_for(QuestionKey::MainConcern)
        );
        session.transcript.push(Role::Assistant, opening);
        debug!(session_id = %session.session_id(), "Session started");
        session
    }

    /// Apply one patient message.
    ///
    /// Blank input is ignored without touching the transcript. Input longer
    /// than `max_answer_length` is rejected before any state change.
    pub fn submit(
        &self,
        mut session: IntakeSession,
        text: &str,
    ) -> Result<(IntakeSession, Advance), SubmitError> {
        match self.apply(&mut session, text) {
            Ok(advance) => Ok((session, advance)),
            Err(error) => Err(SubmitError::new(session, error)),
        }
    }

    /// Answer the summary prompt.
    ///
    /// `true` hands off to doctor matching. `false` clears `complete` and opens
    /// the extension slot.
    pub fn confirm(
        &self,
        mut session: IntakeSession,
        affirmative: bool,
    ) -> Result<IntakeSession, SubmitError> {
        match self.settle(&mut session, affirmative) {
            Ok(()) => Ok(session),
            Err(error) => Err(SubmitError::new(session, error)),
        }
    }

    // Every check that can fail runs before the first mutation.
    fn apply(&self, session: &mut IntakeSession, text: &str) -> Result<Advance, FlowError> {
        let answer = text.trim();
        if answer.is_empty() || session.phase.is_terminal() {
            return Ok(Advance::Ignored);
        }
        if answer.chars().count() > self.config.max_answer_length {
            return Err(FlowError::MessageTooLong(self.config.max_answer_length));
        }

        match session.phase {
            IntakePhase::Asking(step) if step < IntakePhase::EXTENSION_STEP => {
                let Some(key) = QuestionKey::at_step(step as usize) else {
                    return Ok(Advance::Ignored);
                };
                let next = QuestionKey::at_step(step as usize + 1);
                let target = match next {
                    Some(_) => IntakePhase::Asking(step + 1),
                    None => IntakePhase::Classifying,
                };
                validate_transition(session.phase, target)?;

                session.transcript.push(Role::User, answer);
                session.answers.insert(key, answer);
                session.current_step = step as usize + 1;
                debug!(
                    session_id = %session.session_id(),
                    question = %key,
                    "Answer recorded"
                );

                match next {
                    Some(next) => {
                        transition(session, target)?;
                        let prompt = self.follow_up(next);
                        session.transcript.push(Role::Assistant, prompt);
                        Ok(Advance::Asked(next))
                    }
                    None => self.complete(session),
                }
            }
            IntakePhase::Asking(_) => {
                validate_transition(session.phase, IntakePhase::Classifying)?;
                session.transcript.push(Role::User, answer);
                session.additional_notes.push(answer.to_string());
                debug!(
                    session_id = %session.session_id(),
                    notes = session.additional_notes.len(),
                    "Additional note recorded"
                );
                self.complete(session)
            }
            IntakePhase::AwaitingConfirmation => match parse_confirmation(answer) {
                Some(affirmative) => {
                    validate_transition(session.phase, confirmation_target(affirmative))?;
                    session.transcript.push(Role::User, answer);
                    self.settle(session, affirmative)?;
                    Ok(if affirmative {
                        Advance::Confirmed
                    } else {
                        Advance::Reopened
                    })
                }
                None => Ok(Advance::Ignored),
            },
            IntakePhase::Classifying | IntakePhase::MatchingDoctors => Ok(Advance::Ignored),
        }
    }

    fn settle(&self, session: &mut IntakeSession, affirmative: bool) -> Result<(), FlowError> {
        transition(session, confirmation_target(affirmative))?;
        if affirmative {
            session.transcript.push(Role::Assistant, MATCHING_PROMPT);
        } else {
            session.complete = false;
            session.transcript.push(Role::Assistant, EXTENSION_PROMPT);
        }
        Ok(())
    }

    fn complete(&self, session: &mut IntakeSession) -> Result<Advance, FlowError> {
        transition(session, IntakePhase::Classifying)?;
        let result = classify(&session.answers);
        session.complete = true;
        session.triage = Some(result);
        transition(session, IntakePhase::AwaitingConfirmation)?;

        let summary = render_summary(&session.answers, &result, &session.additional_notes);
        session.transcript.push(Role::Assistant, summary);
        debug!(
            session_id = %session.session_id(),
            priority = %result.priority,
            specialty = %result.specialty,
            "Session classified"
        );
        Ok(Advance::Classified(result))
    }

    fn follow_up(&self, next: QuestionKey) -> String {
        match self.picker.pick(&self.config.acknowledgments) {
            Some(ack) => format!("{} {}", ack, prompt_for(next)),
            None => prompt_for(next).to_string(),
        }
    }
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn confirmation_target(affirmative: bool) -> IntakePhase {
    if affirmative {
        IntakePhase::MatchingDoctors
    } else {
        IntakePhase::Asking(IntakePhase::EXTENSION_STEP)
    }
}

fn transition(session: &mut IntakeSession, to: IntakePhase) -> Result<(), FlowError> {
    validate_transition(session.phase, to)?;
    debug!(session_id = %session.session_id(), from = %session.phase, to = %to, "Phase change");
    session.phase = to;
    Ok(())
}
