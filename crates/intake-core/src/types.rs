use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Identifier of one questionnaire step.
///
/// The variant order is the question order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKey {
    MainConcern,
    Duration,
    Severity,
    AdditionalSymptoms,
    MedicalHistory,
}

impl QuestionKey {
    /// All keys in question order.
    pub const ALL: [QuestionKey; 5] = [
        QuestionKey::MainConcern,
        QuestionKey::Duration,
        QuestionKey::Severity,
        QuestionKey::AdditionalSymptoms,
        QuestionKey::MedicalHistory,
    ];

    /// Number of fixed questions.
    pub const COUNT: usize = Self::ALL.len();

    /// Key asked at the given step, if the step is within the fixed sequence.
    pub fn at_step(step: usize) -> Option<QuestionKey> {
        Self::ALL.get(step).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::MainConcern => "mainConcern",
            QuestionKey::Duration => "duration",
            QuestionKey::Severity => "severity",
            QuestionKey::AdditionalSymptoms => "additionalSymptoms",
            QuestionKey::MedicalHistory => "medicalHistory",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestionKey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionKey::ALL
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown question key: {}", s))
    }
}

/// Triage urgency, ordered from least to most urgent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Green,
    Yellow,
    Orange,
    Red,
}

impl Priority {
    /// Score on the 1-10 scale associated with this priority.
    pub fn score(&self) -> u8 {
        match self {
            Priority::Green => 3,
            Priority::Yellow => 5,
            Priority::Orange => 7,
            Priority::Red => 9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Green => "green",
            Priority::Yellow => "yellow",
            Priority::Orange => "orange",
            Priority::Red => "red",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Priority::Green => "🟢",
            Priority::Yellow => "🟡",
            Priority::Orange => "🟠",
            Priority::Red => "🔴",
        }
    }

    /// Short human-readable meaning of the priority.
    pub fn description(&self) -> &'static str {
        match self {
            Priority::Green => "Routine - Standard scheduling",
            Priority::Yellow => "Semi-Urgent - Same-day appointment recommended",
            Priority::Orange => "Urgent - Priority scheduling",
            Priority::Red => "Emergency - Immediate attention needed",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Priority::Green),
            "yellow" => Ok(Priority::Yellow),
            "orange" => Ok(Priority::Orange),
            "red" => Ok(Priority::Red),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Closed set of specialties the local classifier can recommend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    #[default]
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
    Cardiology,
    Gastroenterology,
    Orthopedics,
    Dermatology,
    Neurology,
}

impl Specialty {
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::GeneralMedicine => "General Medicine",
            Specialty::Cardiology => "Cardiology",
            Specialty::Gastroenterology => "Gastroenterology",
            Specialty::Orthopedics => "Orthopedics",
            Specialty::Dermatology => "Dermatology",
            Specialty::Neurology => "Neurology",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Position of a session in the intake flow.
///
/// `Asking(0..=4)` are the fixed questions; `Asking(5)` is the open-ended
/// slot entered when the patient has more to add after the summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", content = "step", rename_all = "snake_case")]
pub enum IntakePhase {
    Asking(u8),
    Classifying,
    AwaitingConfirmation,
    MatchingDoctors,
}

impl IntakePhase {
    /// Step index of the open-ended extension slot.
    pub const EXTENSION_STEP: u8 = QuestionKey::COUNT as u8;

    pub fn is_terminal(&self) -> bool {
        matches!(self, IntakePhase::MatchingDoctors)
    }
}

impl fmt::Display for IntakePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakePhase::Asking(step) => write!(f, "asking({})", step),
            IntakePhase::Classifying => write!(f, "classifying"),
            IntakePhase::AwaitingConfirmation => write!(f, "awaiting_confirmation"),
            IntakePhase::MatchingDoctors => write!(f, "matching_doctors"),
        }
    }
}

// =============================================================================
// Newtype Wrappers
// =============================================================================

/// Opaque session identifier, issued by the backend or generated locally.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a local identifier for use when the backend is unreachable.
    pub fn local() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix timestamp in seconds since epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }
}

// =============================================================================
// Value Objects
// =============================================================================

/// Who is being interviewed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    /// Used only in greeting text.
    pub display_name: Option<String>,
    /// Forwarded to the backend when present.
    pub user_id: Option<String>,
    /// Switches the greeting to the emergency wording. The questions do not change.
    pub emergency: bool,
}

/// Outcome of the local classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriageResult {
    pub priority: Priority,
    pub score: u8,
    pub specialty: Specialty,
}
