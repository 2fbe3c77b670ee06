//! HTTP client for the project API
//!
//! One request per call, no retries. Every request carries a timeout; the
//! liveness probe uses the shorter preflight timeout.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::RequestBuilder;

use crate::common::config::Timeouts;
use crate::common::{Config, Error, Result};

use super::types::{
    decode_data, error_message, CreateProjectRequest, OpenedProject, ProjectListItem, ProjectRef,
    SaveProjectRequest, SaveSummary, WorkspaceInfo,
};
use super::ProjectApi;

pub const WORKSPACE_ENDPOINT: &str = "GET /projects/workspace";
pub const CREATE_ENDPOINT: &str = "POST /projects/create";
pub const LIST_ENDPOINT: &str = "GET /projects/list";
pub const OPEN_ENDPOINT: &str = "GET /projects/open";
pub const SAVE_ENDPOINT: &str = "POST /projects/save";

/// reqwest-backed implementation of [`ProjectApi`]
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
    auth_token: Option<String>,
    timeouts: Timeouts,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pptflow/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: config.api_base(),
            auth_token: config.server.auth_token.clone(),
            timeouts: config.timeouts.clone(),
        })
    }

    /// Root URL every route is resolved against
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.api_base, route)
    }

    /// Send a request and read the whole body as text
    async fn send(&self, request: RequestBuilder, endpoint: &str, secs: u64) -> Result<(u16, String)> {
        let request = match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let started = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| Error::from_reqwest(endpoint, secs, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::from_reqwest(endpoint, secs, e))?;

        tracing::debug!(
            endpoint,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            bytes = body.len(),
            "Response received"
        );

        Ok((status, body))
    }

    /// Send a request and require an exact status code
    async fn send_expecting(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        expected: u16,
    ) -> Result<String> {
        let (status, body) = self
            .send(request, endpoint, self.timeouts.request_secs)
            .await?;
        if status != expected {
            return Err(Error::unexpected_status(
                endpoint,
                expected,
                status,
                &error_message(&body),
            ));
        }
        Ok(body)
    }
}

#[async_trait]
impl ProjectApi for ApiClient {
    async fn workspace(&self) -> Result<WorkspaceInfo> {
        let url = self.url("/projects/workspace");
        let request = self.http.get(&url).timeout(self.timeouts.preflight());

        let (status, body) = self
            .send(request, WORKSPACE_ENDPOINT, self.timeouts.preflight_secs)
            .await
            .map_err(|e| Error::ServiceUnreachable {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        // Any answer means the service is up; the path is informational.
        if status != 200 {
            tracing::debug!(status, "Workspace probe answered with non-200 status");
            return Ok(WorkspaceInfo::default());
        }
        Ok(decode_data(WORKSPACE_ENDPOINT, &body).unwrap_or_default())
    }

    async fn create_project(&self, request: &CreateProjectRequest) -> Result<ProjectRef> {
        let http = self.http.post(self.url("/projects/create")).json(request);
        let body = self.send_expecting(http, CREATE_ENDPOINT, 201).await?;

        let project: ProjectRef = decode_data(CREATE_ENDPOINT, &body)?;
        if project.id.is_empty() {
            return Err(Error::malformed(CREATE_ENDPOINT, "`data.id` is empty"));
        }
        if project.title.is_empty() {
            return Err(Error::malformed(CREATE_ENDPOINT, "`data.title` is empty"));
        }
        Ok(project)
    }

    async fn list_projects(&self) -> Result<Vec<ProjectListItem>> {
        let http = self.http.get(self.url("/projects/list"));
        let body = self.send_expecting(http, LIST_ENDPOINT, 200).await?;
        decode_data(LIST_ENDPOINT, &body)
    }

    async fn open_project(&self, path: &str) -> Result<OpenedProject> {
        let http = self
            .http
            .get(self.url("/projects/open"))
            .query(&[("projectPath", path)]);
        let body = self.send_expecting(http, OPEN_ENDPOINT, 200).await?;
        decode_data(OPEN_ENDPOINT, &body)
    }

    async fn save_project(&self, request: &SaveProjectRequest) -> Result<SaveSummary> {
        let http = self.http.post(self.url("/projects/save")).json(request);
        let body = self.send_expecting(http, SAVE_ENDPOINT, 200).await?;
        decode_data(SAVE_ENDPOINT, &body)
    }
}
