//! Wire types for the project API
//!
//! Every success body is wrapped as `{"success": true, "data": ...}`.
//! Decoding goes through [`decode_data`] so a missing or ill-typed field
//! becomes [`Error::MalformedResponse`] rather than a panic.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// Success envelope returned by every project route
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body returned by the project routes on failure
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Decode the `data` member of a success envelope
pub fn decode_data<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| Error::malformed(endpoint, e.to_string()))
}

/// Pull the service's `error` message out of a failure body, falling back to the raw text
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /projects/create`
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub location: String,
}

/// Body of `POST /projects/save`
#[derive(Debug, Clone, Serialize)]
pub struct SaveProjectRequest {
    pub path: String,
    pub title: String,
    pub slides: Vec<Slide>,
}

/// A slide record as the editor persists it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slide {
    pub id: String,
    pub data: SlideData,
    pub meta: SlideMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlideData {
    pub version: String,
    pub page_size: PageSize,
    pub background: String,
    pub elements: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlideMeta {
    pub summary: String,
    pub display_index: u32,
    pub created_at: String,
    pub updated_at: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Project identity returned by the create route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRef {
    pub id: String,
    pub title: String,
    /// Absent on older services; an empty path makes the open step fail
    #[serde(default)]
    pub path: String,
}

/// One entry of the list route
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListItem {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub slide_count: Option<u64>,
}

/// Body of the open route
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OpenedProject {
    pub meta: ProjectMeta,
    /// Slide identifiers; the service returns directory names
    pub slides: Vec<serde_json::Value>,
}

/// Project metadata as stored in the project manifest
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub title: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub slide_count: Option<u64>,
}

/// Body of the save route
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveSummary {
    pub slide_count: u64,
}

/// Body of the workspace route
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct WorkspaceInfo {
    #[serde(default)]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_created_project() {
        let body = json!({
            "success": true,
            "data": {"id": "p1", "title": "test_project_123", "path": "/tmp/p1", "version": "1.0.0"}
        })
        .to_string();

        let project: ProjectRef = decode_data("create", &body).unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.path, "/tmp/p1");
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let body = json!({"data": {"meta": {"title": "x"}}}).to_string();
        let err = decode_data::<OpenedProject>("open", &body).unwrap_err();
        match err {
            Error::MalformedResponse { endpoint, reason } => {
                assert_eq!(endpoint, "open");
                assert!(reason.contains("slides"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = decode_data::<SaveSummary>("save", "<html>oops</html>").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_list_must_be_a_sequence() {
        let body = json!({"data": {"path": "/tmp/p1"}}).to_string();
        assert!(decode_data::<Vec<ProjectListItem>>("list", &body).is_err());

        let body = json!({"data": [{"path": "/tmp/p1", "title": "a", "slideCount": 3}, {}]}).to_string();
        let items: Vec<ProjectListItem> = decode_data("list", &body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].slide_count, Some(3));
        assert_eq!(items[1].path, "");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"error":"Project name is required"}"#), "Project name is required");
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn test_slide_serializes_camel_case() {
        let slide = Slide {
            id: "slide1".into(),
            data: SlideData {
                version: "1.0".into(),
                page_size: PageSize { width: 1280, height: 720 },
                background: "#ffffff".into(),
                elements: vec![],
            },
            meta: SlideMeta {
                summary: "First slide".into(),
                display_index: 0,
                created_at: "2024-01-01T00:00:00".into(),
                updated_at: "2024-01-01T00:00:00".into(),
            },
        };

        let value = serde_json::to_value(&slide).unwrap();
        assert_eq!(value["data"]["pageSize"]["width"], 1280);
        assert_eq!(value["meta"]["displayIndex"], 0);
        assert!(value["meta"]["createdAt"].is_string());
        assert!(value["data"]["elements"].as_array().unwrap().is_empty());
    }
}
