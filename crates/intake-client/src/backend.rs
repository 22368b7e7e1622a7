//! Collaborator traits for the intake backend, doctor matching, and booking.
//!
//! The orchestrator only talks to these traits. `HttpBackend` implements all
//! three against the clinical backend; `OfflineBackend` refuses every call so
//! the local flow and static fallbacks take over.

use std::sync::Arc;

use async_trait::async_trait;

use intake_core::config::BackendConfig;
use intake_core::SessionId;

use crate::error::ClientError;
use crate::http::HttpBackend;
use crate::types::{
    BookingConfirmation, BookingRequest, DoctorMatch, Enrichment, MatchRequest, StartedSession,
};

/// Remote session bookkeeping and enrichment.
#[async_trait]
pub trait IntakeBackend: Send + Sync {
    async fn start_session(&self, patient_id: Option<&str>) -> Result<StartedSession, ClientError>;

    async fn send_message(
        &self,
        session_id: &SessionId,
        message: &str,
        patient_id: Option<&str>,
    ) -> Result<Enrichment, ClientError>;
}

/// Doctor and slot suggestions for a triaged patient.
#[async_trait]
pub trait DoctorMatcher: Send + Sync {
    async fn match_doctors(&self, request: &MatchRequest) -> Result<DoctorMatch, ClientError>;
}

/// Appointment assignment.
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, ClientError>;
}

/// Backend that is switched off. Every call fails with `Disabled`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

#[async_trait]
impl IntakeBackend for OfflineBackend {
    async fn start_session(&self, _patient_id: Option<&str>) -> Result<StartedSession, ClientError> {
        Err(ClientError::Disabled)
    }

    async fn send_message(
        &self,
        _session_id: &SessionId,
        _message: &str,
        _patient_id: Option<&str>,
    ) -> Result<Enrichment, ClientError> {
        Err(ClientError::Disabled)
    }
}

#[async_trait]
impl DoctorMatcher for OfflineBackend {
    async fn match_doctors(&self, _request: &MatchRequest) -> Result<DoctorMatch, ClientError> {
        Err(ClientError::Disabled)
    }
}

#[async_trait]
impl BookingService for OfflineBackend {
    async fn book(&self, _request: &BookingRequest) -> Result<BookingConfirmation, ClientError> {
        Err(ClientError::Disabled)
    }
}

/// The three collaborators bundled for the orchestrator.
#[derive(Clone)]
pub struct Collaborators {
    pub intake: Arc<dyn IntakeBackend>,
    pub matcher: Arc<dyn DoctorMatcher>,
    pub booking: Arc<dyn BookingService>,
}

impl Collaborators {
    /// All three roles served by one HTTP client.
    pub fn http(config: &BackendConfig) -> Result<Self, ClientError> {
        let backend = Arc::new(HttpBackend::new(config)?);
        Ok(Self {
            intake: backend.clone(),
            matcher: backend.clone(),
            booking: backend,
        })
    }

    pub fn offline() -> Self {
        let backend = Arc::new(OfflineBackend);
        Self {
            intake: backend.clone(),
            matcher: backend.clone(),
            booking: backend,
        }
    }

    /// HTTP when the backend is enabled in config, offline otherwise.
    pub fn from_config(config: &BackendConfig) -> Result<Self, ClientError> {
        if config.enabled {
            Self::http(config)
        } else {
            tracing::info!("Backend disabled in config, running offline");
            Ok(Self::offline())
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
