//! Project API access
//!
//! [`ProjectApi`] is the seam between the verification flow and the
//! network: the flow only ever talks to the trait, so it can run against
//! the real service or an in-process double.

mod client;
pub mod types;

use async_trait::async_trait;

use crate::common::Result;

pub use client::{
    ApiClient, CREATE_ENDPOINT, LIST_ENDPOINT, OPEN_ENDPOINT, SAVE_ENDPOINT, WORKSPACE_ENDPOINT,
};
pub use types::{
    CreateProjectRequest, OpenedProject, ProjectListItem, ProjectRef, SaveProjectRequest,
    SaveSummary, Slide, WorkspaceInfo,
};

/// Operations exposed by the presentation service's project routes
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// Liveness probe; only a transport failure counts as an error
    async fn workspace(&self) -> Result<WorkspaceInfo>;

    /// Create a project; succeeds only on 201 with a non-empty id and title
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<ProjectRef>;

    /// List known projects; any 200 with a `data` sequence succeeds
    async fn list_projects(&self) -> Result<Vec<ProjectListItem>>;

    /// Open the project stored at `path`
    async fn open_project(&self, path: &str) -> Result<OpenedProject>;

    /// Persist slides into an existing project
    async fn save_project(&self, request: &SaveProjectRequest) -> Result<SaveSummary>;
}
