//! Intake session state.
//!
//! A session is a plain value: the sequencer consumes one and returns the
//! next, so no session is ever shared or mutated concurrently.

use serde::{Deserialize, Serialize};

use crate::types::{
    IntakePhase, QuestionKey, Role, SessionId, Timestamp, TriageResult, UserContext,
};

// =============================================================================
// Answers
// =============================================================================

/// Ordered answers keyed by question; insertion order follows question order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    entries: Vec<(QuestionKey, String)>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous answer for the same key.
    pub fn insert(&mut self, key: QuestionKey, answer: impl Into<String>) {
        let answer = answer.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((key, answer)),
        }
    }

    pub fn get(&self, key: QuestionKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Answer for `key`, or the empty string when it was never given.
    pub fn get_or_empty(&self, key: QuestionKey) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every fixed question has an answer.
    pub fn is_complete(&self) -> bool {
        QuestionKey::ALL.iter().all(|k| self.get(*k).is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(QuestionKey, S)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionKey, S)>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for (key, value) in iter {
            answers.insert(key, value);
        }
        answers
    }
}

// =============================================================================
// Transcript
// =============================================================================

/// One displayed chat line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
    pub timestamp: Timestamp,
}

/// Append-only conversation log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            role,
            content: content.into(),
            timestamp: Timestamp::now(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    /// Entries appended at or after position `from`.
    pub fn since(&self, from: usize) -> &[TranscriptEntry] {
        &self.entries[from.min(self.entries.len())..]
    }
}

// =============================================================================
// IntakeSession
// =============================================================================

/// One patient's run through the questionnaire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntakeSession {
    session_id: SessionId,
    pub user: UserContext,
    pub answers: Answers,
    /// Index of the next fixed question; rests at 5 once all are answered.
    pub current_step: usize,
    pub complete: bool,
    pub phase: IntakePhase,
    /// Last classification, present once the session has completed.
    pub triage: Option<TriageResult>,
    /// Free text collected after the patient reopened the summary.
    pub additional_notes: Vec<String>,
    pub transcript: Transcript,
    pub created_at: Timestamp,
}

impl IntakeSession {
    /// Fresh session positioned at the first question.
    pub fn new(session_id: SessionId, user: UserContext) -> Self {
        Self {
            session_id,
            user,
            answers: Answers::new(),
            current_step: 0,
            complete: false,
            phase: IntakePhase::Asking(0),
            triage: None,
            additional_notes: Vec::new(),
            transcript: Transcript::default(),
            created_at: Timestamp::now(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}
