//! Conversational intake flow.
//!
//! A pure questionnaire sequencer walks a session through five fixed
//! questions, classifies it, and asks the patient to confirm. The async
//! orchestrator layers the backend collaborators on top.

pub mod acknowledgment;
pub mod error;
pub mod orchestrator;
pub mod questionnaire;
pub mod sequencer;
pub mod state_machine;

pub use acknowledgment::{FixedPicker, PhrasePicker, RandomPicker};
pub use error::{FlowError, SubmitError};
pub use orchestrator::{IntakeOrchestrator, Turn};
pub use questionnaire::parse_confirmation;
pub use sequencer::{Advance, Sequencer};
pub use state_machine::validate_transition;
