pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use config::IntakeConfig;
pub use error::{IntakeError, Result};
pub use session::{Answers, IntakeSession, Transcript, TranscriptEntry};
pub use types::*;
