//! Fixed question copy, greetings, and confirmation parsing.

use intake_core::{QuestionKey, UserContext};

/// Prompt shown for each fixed question.
pub fn prompt_for(key: QuestionKey) -> &'static str {
    match key {
        QuestionKey::MainConcern => {
            "**What brings you in today? What's your main concern or symptom?**"
        }
        QuestionKey::Duration => {
            "⏱️ **How long have you been experiencing this?** (e.g., 2 days, since this morning)"
        }
        QuestionKey::Severity => {
            "📊 **On a scale of 1-10, how severe is it?** (1 = barely noticeable, 10 = worst imaginable)"
        }
        QuestionKey::AdditionalSymptoms => {
            "🔍 **Are you experiencing any other symptoms?** (e.g., fever, nausea, dizziness, or \"none\")"
        }
        QuestionKey::MedicalHistory => {
            "📋 **Do you have any relevant medical history, allergies, or current medications?**"
        }
    }
}

/// Opening message. The emergency flag changes the wording only.
pub fn greeting(user: &UserContext) -> String {
    let hello = match user.display_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!("👋 Hello {}!", name),
        _ => "👋 Hello!".to_string(),
    };

    if user.emergency {
        format!(
            "{} 🚨 You've indicated this may be urgent. If you are experiencing a \
             life-threatening emergency, call emergency services (108/112) now.\n\n\
             Otherwise, I'll ask a few quick questions so we can get you seen as soon as possible.",
            hello
        )
    } else {
        format!(
            "{} I'm your virtual health assistant. I'll ask a few questions to understand \
             your symptoms and connect you with the right doctor.\n\n\
             **Important:** This is not an emergency service. If you're experiencing a \
             life-threatening emergency, please call emergency services (108/112) immediately.",
            hello
        )
    }
}

/// Reply when the patient wants to add more after the summary.
pub const EXTENSION_PROMPT: &str =
    "Of course. What else would you like to tell me about your symptoms?";

/// Reply when the patient confirms the handoff.
pub const MATCHING_PROMPT: &str =
    "Great! Let me find the best available doctor for you based on your assessment...";

/// Shown when the backend flags a message as a possible emergency and sends no
/// text of its own.
pub const EMERGENCY_ALERT: &str = "⚠️ **URGENT ALERT** Based on what you've described, \
    this could be a medical emergency. Please call emergency services (**108** or **112**) \
    immediately and do not drive yourself.";

const AFFIRMATIVE: &[&str] = &[
    "yes", "y", "yeah", "yep", "yup", "sure", "ok", "okay", "proceed", "continue",
];
const NEGATIVE: &[&str] = &["no", "n", "nope", "not yet", "wait"];

/// Interpret a reply to the summary prompt.
///
/// Returns `None` when the reply is neither yes nor no.
pub fn parse_confirmation(text: &str) -> Option<bool> {
    let normalized = text
        .trim()
        .trim_end_matches(['.', '!'])
        .to_lowercase();
    if AFFIRMATIVE.contains(&normalized.as_str()) {
        Some(true)
    } else if NEGATIVE.contains(&normalized.as_str()) || normalized.starts_with("no,") {
        Some(false)
    } else {
        None
    }
}
