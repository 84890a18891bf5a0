//! HTTP client for the clinic server's AJAX endpoints.
//!
//! One shared `reqwest::Client` with the programmatic-request marker
//! header and an explicit per-request timeout. Responses are parsed as
//! JSON without gating on the HTTP status first: the server answers some
//! guard failures with a JSON body on a 4xx status, and that body, not
//! the status code, carries the message the user should see.

use serde::de::DeserializeOwned;

use crate::api::types::{
    AppointmentDetail, AppointmentStatus, AvailabilityQuery, AvailabilityVerdict, PatientHit,
    ReturnTo, StatusUpdateResponse,
};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Marker header the server uses to answer with JSON instead of a full page.
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Client for the clinic server's JSON endpoints.
pub struct ClinicClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl ClinicClient {
    /// Build a client from connection settings.
    pub fn new(config: &ClientConfig) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            REQUESTED_WITH.0,
            reqwest::header::HeaderValue::from_static(REQUESTED_WITH.1),
        );

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs: config.request_timeout_secs,
        }
    }

    /// Client for a local development server.
    pub fn default_local() -> Self {
        Self::new(&ClientConfig::default())
    }

    /// The server origin this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Live patient search. The server matches name, first name, patient
    /// number and phone, and caps the response at 10 hits.
    pub async fn search_patients(&self, query: &str) -> Result<Vec<PatientHit>, ClientError> {
        let url = format!("{}/patients/recherche/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.parse_json(response).await
    }

    /// Availability check for a doctor / date / time / duration slot.
    ///
    /// `rdv_id` is always sent (empty when absent) so the server can
    /// exclude the appointment being edited from its own conflict scan.
    pub async fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AvailabilityVerdict, ClientError> {
        let url = format!("{}/rendezvous/check-disponibilite/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("medecin", query.medecin.as_str()),
                ("date", query.date.as_str()),
                ("heure", query.heure.as_str()),
                ("duree", query.duree.as_str()),
                ("rdv_id", query.rdv_id.as_deref().unwrap_or("")),
            ])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.parse_json(response).await
    }

    /// Request a status transition for one appointment.
    ///
    /// The target status and CSRF token travel in the form body; the
    /// return destination travels as a query parameter.
    pub async fn update_status(
        &self,
        rdv_id: i64,
        statut: AppointmentStatus,
        csrf_token: &str,
        return_to: ReturnTo,
    ) -> Result<StatusUpdateResponse, ClientError> {
        let url = format!("{}/rendezvous/{}/statut/", self.base_url, rdv_id);
        let response = self
            .client
            .post(&url)
            .query(&[("return_to", return_to.as_str())])
            .form(&[
                ("statut", statut.as_str()),
                ("csrfmiddlewaretoken", csrf_token),
            ])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.parse_json(response).await
    }

    /// Fetch the detail payload for one appointment (modal display).
    pub async fn appointment_detail(
        &self,
        rdv_id: i64,
    ) -> Result<AppointmentDetail, ClientError> {
        let url = format!("{}/rendezvous/details/{}/", self.base_url, rdv_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.parse_json(response).await
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_connect() {
            ClientError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            ClientError::Timeout(self.timeout_secs)
        } else {
            ClientError::HttpClient(e.to_string())
        }
    }

    /// Parse a JSON body of type `T`. A body that fails to parse is a
    /// `Server` error when the status was non-success (error page), a
    /// `ResponseParsing` error otherwise.
    async fn parse_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::HttpClient(e.to_string()))?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(ClientError::Server {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(ClientError::ResponseParsing(e.to_string())),
        }
    }
}
