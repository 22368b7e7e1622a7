//! Clients for the clinical backend collaborators.
//!
//! Three roles sit behind async traits: remote intake bookkeeping, doctor
//! matching, and booking. Results reach the flow as an [`Outcome`] so the
//! caller always knows whether data is live or a substitute.

pub mod backend;
pub mod error;
pub mod fallback;
pub mod http;
pub mod outcome;
pub mod types;

pub use backend::{BookingService, Collaborators, DoctorMatcher, IntakeBackend, OfflineBackend};
pub use error::ClientError;
pub use fallback::fallback_doctors;
pub use http::HttpBackend;
pub use outcome::Outcome;
pub use types::*;
