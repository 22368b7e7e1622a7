//! HTTP implementation of the collaborator traits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use intake_core::config::BackendConfig;
use intake_core::SessionId;

use crate::backend::{BookingService, DoctorMatcher, IntakeBackend};
use crate::error::ClientError;
use crate::types::{
    AssignResponseBody, BookingConfirmation, BookingRequest, DoctorMatch, Enrichment,
    IntakeMessageRequest, MatchRequest, MatchResponseBody, StartedSession,
};

/// Client for the clinical backend's intake, matching, and booking routes.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Map non-2xx to `Status`, then decode the body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl IntakeBackend for HttpBackend {
    async fn start_session(&self, patient_id: Option<&str>) -> Result<StartedSession, ClientError> {
        let mut form: Vec<(&str, &str)> = Vec::new();
        if let Some(id) = patient_id {
            form.push(("patient_id", id));
        }

        debug!(url = %self.url("/intake/start"), "Starting remote session");
        let response = self
            .client
            .post(self.url("/intake/start"))
            .form(&form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn send_message(
        &self,
        session_id: &SessionId,
        message: &str,
        patient_id: Option<&str>,
    ) -> Result<Enrichment, ClientError> {
        let body = IntakeMessageRequest {
            session_id: session_id.as_str(),
            message,
            patient_id,
        };
        let response = self
            .client
            .post(self.url("/intake/message"))
            .json(&body)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl DoctorMatcher for HttpBackend {
    async fn match_doctors(&self, request: &MatchRequest) -> Result<DoctorMatch, ClientError> {
        let response = self
            .client
            .post(self.url("/doctors/match"))
            .json(request)
            .send()
            .await?;
        let body: MatchResponseBody = Self::decode(response).await?;

        if !body.success {
            return Err(ClientError::Rejected(
                body.message
                    .unwrap_or_else(|| "no matching doctors".to_string()),
            ));
        }

        let top_slots = (!body.available_slots.is_empty()).then_some(body.available_slots);
        let recommended = body
            .recommended_doctor
            .map(|d| d.into_option(top_slots, body.estimated_wait_time));
        let alternatives = body
            .alternative_doctors
            .into_iter()
            .map(|d| d.into_option(None, None))
            .collect();

        Ok(DoctorMatch {
            recommended,
            alternatives,
        })
    }
}

#[async_trait]
impl BookingService for HttpBackend {
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, ClientError> {
        let response = self
            .client
            .post(self.url("/doctors/assign"))
            .json(request)
            .send()
            .await?;
        let body: AssignResponseBody = Self::decode(response).await?;

        if !body.success {
            return Err(ClientError::Rejected(
                body.message
                    .unwrap_or_else(|| "booking was not accepted".to_string()),
            ));
        }

        Ok(BookingConfirmation {
            doctor_id: request.doctor_id.clone(),
            slot: request.slot.clone(),
            message: body.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = BackendConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..BackendConfig::default()
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(
            backend.url("/intake/start"),
            "http://localhost:8000/intake/start"
        );
    }
}
