//! Local triage classification for intake sessions.
//!
//! Turns the five questionnaire answers into a priority and a specialty
//! recommendation, and renders the summary shown before the doctor handoff.

pub mod classifier;
pub mod keywords;
pub mod summary;

pub use classifier::{classify, parse_severity, DEFAULT_SEVERITY};
pub use summary::render_summary;
