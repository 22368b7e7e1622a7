//! Request and response shapes exchanged with the clinical backend.

use serde::{Deserialize, Serialize};

use intake_core::{Priority, SessionId};

// =============================================================================
// Intake
// =============================================================================

/// Session opened by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartedSession {
    pub session_id: SessionId,
    /// Greeting text produced by the backend.
    #[serde(default, rename = "message")]
    pub greeting: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct IntakeMessageRequest<'a> {
    pub session_id: &'a str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<&'a str>,
}

/// Backend triage opinion attached to an intake reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTriage {
    pub priority: String,
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Reply to one intake message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    #[serde(default)]
    pub session_complete: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub triage: Option<RemoteTriage>,
    #[serde(default)]
    pub suggested_specialties: Vec<String>,
}

// =============================================================================
// Doctor matching
// =============================================================================

/// Input to the matching service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub triage_priority: Priority,
    pub specialties: Vec<String>,
    /// Free-text symptoms, forwarded for the backend's own specialty mapping.
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// A doctor offered to the patient, with bookable slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorOption {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub available_slots: Vec<String>,
    #[serde(default)]
    pub estimated_wait_time: Option<String>,
}

/// Ordered candidate list; the recommended doctor comes first when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorMatch {
    pub recommended: Option<DoctorOption>,
    pub alternatives: Vec<DoctorOption>,
}

impl DoctorMatch {
    /// All candidates in display order.
    pub fn candidates(&self) -> impl Iterator<Item = &DoctorOption> {
        self.recommended.iter().chain(self.alternatives.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.recommended.is_none() && self.alternatives.is_empty()
    }
}

/// Raw `/doctors/match` body. The recommended doctor's slots sit at the top
/// level rather than on the doctor object.
#[derive(Debug, Deserialize)]
pub(crate) struct MatchResponseBody {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recommended_doctor: Option<RemoteDoctor>,
    #[serde(default)]
    pub available_slots: Vec<String>,
    #[serde(default)]
    pub estimated_wait_time: Option<String>,
    #[serde(default)]
    pub alternative_doctors: Vec<RemoteDoctor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteDoctor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub available_slots: Vec<String>,
}

impl RemoteDoctor {
    pub(crate) fn into_option(
        self,
        slots: Option<Vec<String>>,
        wait: Option<String>,
    ) -> DoctorOption {
        DoctorOption {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
            rating: self.rating,
            available_slots: slots.unwrap_or(self.available_slots),
            estimated_wait_time: wait,
        }
    }
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Booking
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub session_id: SessionId,
    pub doctor_id: String,
    pub slot: String,
}

/// Backend acknowledgement of a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub doctor_id: String,
    pub slot: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssignResponseBody {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
