//! Deterministic local triage classifier.
//!
//! Maps a set of intake answers to a priority and a specialty using fixed
//! keyword and severity rules. Total: every input yields exactly one result.

use intake_core::{Answers, Priority, QuestionKey, Specialty, TriageResult};

use crate::keywords::{contains_any, ORANGE_KEYWORDS, RED_KEYWORDS, SPECIALTY_RULES};

/// Severity assumed when the answer carries no leading integer.
pub const DEFAULT_SEVERITY: i64 = 5;

/// Classify a set of answers.
///
/// Only `mainConcern` and `severity` influence the result; missing answers
/// are treated as empty strings.
pub fn classify(answers: &Answers) -> TriageResult {
    let severity = parse_severity(answers.get_or_empty(QuestionKey::Severity));
    let concern = answers.get_or_empty(QuestionKey::MainConcern).to_lowercase();

    let priority = classify_priority(&concern, severity);
    let specialty = classify_specialty(&concern);

    TriageResult {
        priority,
        score: priority.score(),
        specialty,
    }
}

/// Priority rules, first match wins: red, orange, yellow, green.
///
/// `concern` must already be lower-cased.
pub fn classify_priority(concern: &str, severity: i64) -> Priority {
    if contains_any(concern, RED_KEYWORDS) || severity >= 9 {
        Priority::Red
    } else if contains_any(concern, ORANGE_KEYWORDS) || severity >= 7 {
        Priority::Orange
    } else if severity >= 5 {
        Priority::Yellow
    } else {
        Priority::Green
    }
}

/// Specialty rules, first match wins; General Medicine otherwise.
///
/// `concern` must already be lower-cased.
pub fn classify_specialty(concern: &str) -> Specialty {
    SPECIALTY_RULES
        .iter()
        .find(|(_, keywords)| contains_any(concern, keywords))
        .map(|(specialty, _)| *specialty)
        .unwrap_or_default()
}

/// Parse the leading integer of a severity answer.
///
/// Leading whitespace is skipped and an optional sign is honoured; the
/// leading run of ASCII digits is the value ("8/10" is 8). No digits yields
/// [`DEFAULT_SEVERITY`]. Digit runs too large for `i64` saturate.
pub fn parse_severity(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return DEFAULT_SEVERITY;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
