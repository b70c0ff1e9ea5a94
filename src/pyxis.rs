//! Minimal client for the Pyxis certification-project endpoint.

use crate::error::SyncError;
use crate::payload::UpdatePayload;
use reqwest::blocking::Client as HttpClient;
use reqwest::header;
use serde::Deserialize;

/// Client for the Pyxis metadata API.
#[derive(Debug, Clone)]
pub struct PyxisClient {
    http: HttpClient,
    api_url: String,
    api_token: String,
}

/// Result of a successful description update.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub status: u16,
    pub last_update_date: String,
}

/// Subset of the project document returned by Pyxis.
#[derive(Debug, Deserialize)]
struct ProjectResponse {
    last_update_date: String,
}

impl PyxisClient {
    pub fn new(api_url: String, api_token: String) -> Result<Self, SyncError> {
        let http = HttpClient::builder()
            .user_agent(concat!("pyxis-sync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url,
            api_token,
        })
    }

    /// Sends the description update as a single PATCH request.
    ///
    /// The numeric response status is logged before any failure is raised;
    /// a non-2xx status is an error.
    pub fn update_description(
        &self,
        project_id: &str,
        payload: &UpdatePayload,
    ) -> Result<UpdateOutcome, SyncError> {
        let url = self.endpoint(project_id);
        log::debug!("PATCH {url}");

        let response = self
            .http
            .patch(&url)
            .header(header::ACCEPT, "application/json")
            .header("X-API-KEY", &self.api_token)
            .json(payload)
            .send()?;

        let status = response.status();
        log::info!("Pyxis responded with HTTP {}", status.as_u16());

        let body = response.error_for_status()?.text()?;
        let project: ProjectResponse = serde_json::from_str(&body)
            .map_err(|err| SyncError::ResponseFormat(err.to_string()))?;

        Ok(UpdateOutcome {
            status: status.as_u16(),
            last_update_date: project.last_update_date,
        })
    }

    // The project identifier is appended to the configured URL as-is; the
    // base may carry a path prefix and need not end with a slash.
    fn endpoint(&self, project_id: &str) -> String {
        format!("{}{}", self.api_url, project_id)
    }
}
