//! Intake orchestrator: wires the sequencer to the backend collaborators.
//!
//! The local sequencer is authoritative. Collaborator calls are awaited one at
//! a time inside each operation, and every failure is logged and turned into
//! an [`Outcome`] instead of an error. A live emergency flag from the backend
//! is surfaced to the patient but never changes the local classification.

use std::sync::Arc;

use tracing::{debug, info, warn};

use intake_client::{
    fallback_doctors, BookingConfirmation, BookingRequest, Collaborators, DoctorMatch,
    DoctorOption, Enrichment, MatchRequest, Outcome,
};
use intake_core::config::FlowConfig;
use intake_core::{IntakeSession, QuestionKey, Role, SessionId, UserContext};
use intake_triage::classify;

use crate::acknowledgment::PhrasePicker;
use crate::error::SubmitError;
use crate::questionnaire::EMERGENCY_ALERT;
use crate::sequencer::{Advance, Sequencer};

/// Result of one patient message.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    pub advance: Advance,
    /// Assistant message appended by this turn, if any.
    pub reply: Option<String>,
    /// Backend enrichment, present whenever the message was accepted.
    pub enrichment: Option<Outcome<Enrichment>>,
    /// Urgent alert from the backend, also appended to the transcript.
    pub alert: Option<String>,
}

/// Coordinates one intake session at a time against the collaborators.
pub struct IntakeOrchestrator {
    sequencer: Sequencer,
    collaborators: Collaborators,
}

impl IntakeOrchestrator {
    pub fn new(
        collaborators: Collaborators,
        config: FlowConfig,
        picker: Arc<dyn PhrasePicker>,
    ) -> Self {
        Self {
            sequencer: Sequencer::new(config, picker),
            collaborators,
        }
    }

    /// Open a session.
    ///
    /// The backend issues the session id when it can; otherwise a local UUID
    /// is used and the session is tagged `Fallback`.
    pub async fn start(&self, user: UserContext) -> Outcome<IntakeSession> {
        match self
            .collaborators
            .intake
            .start_session(user.user_id.as_deref())
            .await
        {
            Ok(started) => {
                info!(session_id = %started.session_id, "Intake session opened");
                Outcome::Live(self.sequencer.start(started.session_id, user))
            }
            Err(e) => {
                let local = SessionId::local();
                warn!(error = %e, session_id = %local, "Session start failed, using local id");
                Outcome::Fallback(self.sequencer.start(local, user))
            }
        }
    }

    /// Apply a patient message and forward it to the backend.
    ///
    /// The answer is recorded locally before the backend is called, so a
    /// failed enrichment never loses or blocks the step. A rejected message
    /// hands the session back unchanged inside the error.
    pub async fn submit(
        &self,
        session: IntakeSession,
        text: &str,
    ) -> Result<(IntakeSession, Turn), SubmitError> {
        let before = session.transcript.len();
        let (mut session, advance) = self.sequencer.submit(session, text)?;

        if advance.is_ignored() {
            return Ok((
                session,
                Turn {
                    advance,
                    reply: None,
                    enrichment: None,
                    alert: None,
                },
            ));
        }

        let reply = session
            .transcript
            .since(before)
            .iter()
            .rev()
            .find(|e| e.role == Role::Assistant)
            .map(|e| e.content.clone());

        let enrichment = self.enrich(&session, text.trim()).await;
        let alert = match enrichment {
            Outcome::Live(ref e) if e.is_emergency => {
                let alert = e
                    .message
                    .as_deref()
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .unwrap_or(EMERGENCY_ALERT)
                    .to_string();
                warn!(
                    session_id = %session.session_id(),
                    phase = %session.phase,
                    "Backend flagged a possible emergency"
                );
                session.transcript.push(Role::Assistant, alert.clone());
                Some(alert)
            }
            _ => None,
        };

        Ok((
            session,
            Turn {
                advance,
                reply,
                enrichment: Some(enrichment),
                alert,
            },
        ))
    }

    /// Answer the summary prompt directly.
    pub fn confirm(
        &self,
        session: IntakeSession,
        affirmative: bool,
    ) -> Result<IntakeSession, SubmitError> {
        self.sequencer.confirm(session, affirmative)
    }

    /// Ask the matching service for doctors.
    ///
    /// An unreachable service, or one that returns nobody, yields the static
    /// fallback list.
    pub async fn match_doctors(&self, session: &IntakeSession) -> Outcome<DoctorMatch> {
        let triage = session
            .triage
            .unwrap_or_else(|| classify(&session.answers));

        let mut symptoms = vec![session
            .answers
            .get_or_empty(QuestionKey::MainConcern)
            .to_string()];
        if let Some(extra) = session.answers.get(QuestionKey::AdditionalSymptoms) {
            symptoms.push(extra.to_string());
        }
        symptoms.extend(session.additional_notes.iter().cloned());
        symptoms.retain(|s| !s.is_empty());

        let request = MatchRequest {
            triage_priority: triage.priority,
            specialties: vec![triage.specialty.label().to_string()],
            symptoms,
        };

        match self.collaborators.matcher.match_doctors(&request).await {
            Ok(matched) if !matched.is_empty() => {
                info!(
                    session_id = %session.session_id(),
                    candidates = matched.candidates().count(),
                    "Doctors matched"
                );
                Outcome::Live(matched)
            }
            Ok(_) => {
                warn!(session_id = %session.session_id(), "Matching returned no doctors, using fallback list");
                Outcome::Fallback(fallback_doctors())
            }
            Err(e) => {
                warn!(session_id = %session.session_id(), error = %e, "Doctor matching failed, using fallback list");
                Outcome::Fallback(fallback_doctors())
            }
        }
    }

    /// Book a slot with a chosen doctor.
    ///
    /// A failed booking does not block the flow but is reported as
    /// `Unreachable`, never as a confirmed appointment.
    pub async fn book(
        &self,
        session: &IntakeSession,
        doctor: &DoctorOption,
        slot: &str,
    ) -> Outcome<BookingConfirmation> {
        let request = BookingRequest {
            session_id: session.session_id().clone(),
            doctor_id: doctor.id.clone(),
            slot: slot.to_string(),
        };

        match self.collaborators.booking.book(&request).await {
            Ok(confirmation) => {
                info!(
                    session_id = %session.session_id(),
                    doctor_id = %doctor.id,
                    slot = %slot,
                    "Appointment booked"
                );
                Outcome::Live(confirmation)
            }
            Err(e) => {
                warn!(
                    session_id = %session.session_id(),
                    doctor_id = %doctor.id,
                    error = %e,
                    "Booking failed"
                );
                Outcome::Unreachable
            }
        }
    }

    async fn enrich(&self, session: &IntakeSession, text: &str) -> Outcome<Enrichment> {
        match self
            .collaborators
            .intake
            .send_message(session.session_id(), text, session.user.user_id.as_deref())
            .await
        {
            Ok(enrichment) => {
                debug!(
                    session_id = %session.session_id(),
                    stage = ?enrichment.stage,
                    "Backend enrichment received"
                );
                Outcome::Live(enrichment)
            }
            Err(e) => {
                warn!(session_id = %session.session_id(), error = %e, "Enrichment failed, continuing locally");
                Outcome::Unreachable
            }
        }
    }
}
