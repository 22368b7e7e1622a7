//! Keyword tables for the local triage rules.
//!
//! Matching is plain substring search on the lower-cased main concern, so
//! "heartburn" matches `heart` and "backache" matches `back`.

use intake_core::Specialty;

/// Main-concern phrases that force a red priority.
pub const RED_KEYWORDS: &[&str] = &[
    "chest pain",
    "breathing",
    "unconscious",
    "bleeding heavily",
    "stroke",
    "heart",
];

/// Main-concern phrases that force at least an orange priority.
pub const ORANGE_KEYWORDS: &[&str] = &[
    "severe",
    "high fever",
    "vomiting blood",
    "sharp pain",
    "accident",
];

/// Specialty rules in evaluation order; the first rule with a hit wins.
pub const SPECIALTY_RULES: &[(Specialty, &[&str])] = &[
    (Specialty::Cardiology, &["heart", "chest", "blood pressure"]),
    (Specialty::Gastroenterology, &["stomach", "digest", "nausea"]),
    (Specialty::Orthopedics, &["bone", "joint", "back"]),
    (Specialty::Dermatology, &["skin", "rash", "itch"]),
    (Specialty::Neurology, &["headache", "migraine", "dizz"]),
];

/// Answers that mean "nothing to report".
pub const NEGATIVE_ANSWERS: &[&str] = &["none", "no", "nothing", "n/a"];

/// True if `haystack` contains any of `needles`.
///
/// `haystack` is expected to be lower-cased already.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// True if the answer is one of the conventional "nothing to report" replies.
pub fn is_negative_answer(answer: &str) -> bool {
    let lowered = answer.trim().to_lowercase();
    NEGATIVE_ANSWERS.contains(&lowered.as_str())
}
