//! Presentational summary of a completed intake.
//!
//! The text is shown to the patient before they confirm the handoff. It
//! carries no state of its own.

use intake_core::{Answers, QuestionKey, TriageResult};

use crate::keywords::is_negative_answer;

const NOT_PROVIDED: &str = "Not provided";
const NONE_REPORTED: &str = "None reported";

/// Render the end-of-intake summary.
pub fn render_summary(answers: &Answers, result: &TriageResult, notes: &[String]) -> String {
    let mut out = String::new();
    out.push_str("✅ **Thank you for completing the intake assessment!**\n\n");
    out.push_str("📋 **Summary of Your Symptoms:**\n");
    for key in QuestionKey::ALL {
        out.push_str(&format!(
            "• {}: {}\n",
            field_label(key),
            display_answer(key, answers.get(key))
        ));
    }

    if !notes.is_empty() {
        out.push_str("\n📝 **Additional information:**\n");
        for note in notes {
            out.push_str(&format!("• {}\n", note));
        }
    }

    out.push_str(&format!(
        "\n{} **Triage Assessment:** {} ({}, score {}/10)\n",
        result.priority.icon(),
        result.priority.description(),
        result.priority.as_str().to_uppercase(),
        result.score
    ));
    out.push_str(&format!(
        "🏥 **Recommended Specialty:** {}\n\n",
        result.specialty
    ));
    out.push_str(
        "Would you like me to proceed with finding an available doctor?\n\
         Type **\"Yes\"** to continue or **\"No\"** if you have more symptoms to add.",
    );
    out
}

fn field_label(key: QuestionKey) -> &'static str {
    match key {
        QuestionKey::MainConcern => "Main concern",
        QuestionKey::Duration => "Duration",
        QuestionKey::Severity => "Severity",
        QuestionKey::AdditionalSymptoms => "Additional symptoms",
        QuestionKey::MedicalHistory => "Medical history",
    }
}

fn display_answer(key: QuestionKey, answer: Option<&str>) -> String {
    match answer.map(str::trim) {
        None | Some("") => NOT_PROVIDED.to_string(),
        Some(a)
            if matches!(
                key,
                QuestionKey::AdditionalSymptoms | QuestionKey::MedicalHistory
            ) && is_negative_answer(a) =>
        {
            NONE_REPORTED.to_string()
        }
        Some(a) if key == QuestionKey::Severity => format!("{}/10", a),
        Some(a) => a.to_string(),
    }
}
