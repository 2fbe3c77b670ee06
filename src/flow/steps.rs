//! Individual verification steps
//!
//! Each step performs one API call, prints a `✓`/`✗` line and hands the
//! typed result back to the caller. Steps never decide whether the run
//! continues; that is the runner's job.

use std::fmt::Display;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::api::{
    CreateProjectRequest, OpenedProject, ProjectApi, ProjectListItem, ProjectRef,
    SaveProjectRequest, SaveSummary, Slide, WorkspaceInfo,
};
use crate::common::Result;

use super::confirm::Confirm;
use super::console::Console;

fn heading(console: &mut Console, title: &str) {
    say!(console, "\n{}", title.cyan().bold());
}

fn fail<T, E: Display>(console: &mut Console, what: &str, err: E) -> std::result::Result<T, E> {
    say!(console, "  {} {}: {}", "✗".red(), what, err);
    Err(err)
}

/// Liveness probe against the workspace route
pub async fn preflight<A: ProjectApi + ?Sized>(
    api: &A,
    console: &mut Console,
) -> Result<WorkspaceInfo> {
    match api.workspace().await {
        Ok(info) => {
            match &info.path {
                Some(path) => say!(
                    console,
                    "{} Backend service is running (workspace: {})",
                    "✓".green(),
                    path.dimmed()
                ),
                None => say!(console, "{} Backend service is running", "✓".green()),
            }
            Ok(info)
        }
        Err(e) => {
            say!(console, "{} Backend service is not reachable", "✗".red().bold());
            Err(e)
        }
    }
}

/// Create a project named `name` under `location`
pub async fn create_project<A: ProjectApi + ?Sized>(
    api: &A,
    console: &mut Console,
    name: &str,
    location: &Path,
) -> Result<ProjectRef> {
    heading(console, "Create project");

    let request = CreateProjectRequest {
        name: name.to_string(),
        location: location.display().to_string(),
    };
    tracing::debug!(name, location = %request.location, "Creating project");

    match api.create_project(&request).await {
        Ok(project) => {
            say!(console, "  {} Project created: {}", "✓".green(), project.title);
            say!(console, "    id:   {}", project.id.dimmed());
            say!(console, "    path: {}", project.path.dimmed());
            Ok(project)
        }
        Err(e) => fail(console, "Create project failed", e),
    }
}

/// List all projects
///
/// Any 200 with a `data` sequence passes this step, empty or not. Whether
/// an empty list may continue the run is the runner's call.
pub async fn list_projects<A: ProjectApi + ?Sized>(
    api: &A,
    console: &mut Console,
) -> Result<Vec<ProjectListItem>> {
    heading(console, "List projects");

    match api.list_projects().await {
        Ok(projects) => {
            say!(
                console,
                "  {} Listed projects: {} found",
                "✓".green(),
                projects.len()
            );
            Ok(projects)
        }
        Err(e) => fail(console, "List projects failed", e),
    }
}

/// Open the project stored at `path`
pub async fn open_project<A: ProjectApi + ?Sized>(
    api: &A,
    console: &mut Console,
    path: &str,
) -> Result<OpenedProject> {
    heading(console, "Open project");
    say!(console, "  path: {}", path.dimmed());

    match api.open_project(path).await {
        Ok(opened) => {
            say!(console, "  {} Project opened", "✓".green());
            say!(console, "    title:  {}", opened.meta.title);
            say!(console, "    slides: {}", opened.slides.len());
            Ok(opened)
        }
        Err(e) => fail(console, "Open project failed", e),
    }
}

/// Save `slides` into the project at `path`
pub async fn save_project<A: ProjectApi + ?Sized>(
    api: &A,
    console: &mut Console,
    path: &str,
    title: &str,
    slides: Vec<Slide>,
) -> Result<SaveSummary> {
    heading(console, "Save project");

    let request = SaveProjectRequest {
        path: path.to_string(),
        title: title.to_string(),
        slides,
    };
    tracing::debug!(path, slides = request.slides.len(), "Saving project");

    match api.save_project(&request).await {
        Ok(summary) => {
            say!(console, "  {} Project saved", "✓".green());
            say!(console, "    slides written: {}", summary.slide_count);
            Ok(summary)
        }
        Err(e) => fail(console, "Save project failed", e),
    }
}

/// What happened to the test project at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum CleanupOutcome {
    /// Confirmation was not given
    Declined,
    /// Confirmed, but nothing exists at the path
    Missing,
    /// Directory removed
    Removed,
    /// Removal was attempted and failed
    Failed(String),
}

/// Ask for confirmation, then recursively delete the project directory
///
/// Nothing is touched unless `confirm` says yes *and* the path exists.
pub fn cleanup_project<C: Confirm + ?Sized>(
    path: &Path,
    confirm: &mut C,
    console: &mut Console,
) -> CleanupOutcome {
    let confirmed = match confirm.confirm("\nDelete the test project?") {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!(error = %e, "Could not read cleanup confirmation");
            false
        }
    };

    if !confirmed {
        return CleanupOutcome::Declined;
    }
    if path.as_os_str().is_empty() || !path.exists() {
        say!(
            console,
            "  {} Nothing to delete at {}",
            "-".dimmed(),
            path.display().to_string().dimmed()
        );
        return CleanupOutcome::Missing;
    }

    match std::fs::remove_dir_all(path) {
        Ok(()) => {
            say!(console, "  {} Deleted test project: {}", "✓".green(), path.display());
            CleanupOutcome::Removed
        }
        Err(e) => {
            say!(console, "  {} Failed to delete test project: {}", "✗".red(), e);
            CleanupOutcome::Failed(e.to_string())
        }
    }
}

/// Behaviour that lives only in the editor UI
///
/// Printed for the reader's benefit. None of it is exercised over HTTP.
pub fn announce_ui_features(console: &mut Console) {
    const NOTES: &[(&str, &[&str])] = &[
        (
            "Menu bar",
            &[
                "File menu: New, Open, Save, Exit",
                "Settings menu: workspace path, auto-backup interval",
                "Unsaved-changes indicator (red dot)",
            ],
        ),
        (
            "Slide drag and drop",
            &[
                "Reordering via @dnd-kit",
                "Mouse and keyboard dragging",
                "Reordering marks the project dirty",
            ],
        ),
        (
            "Keyboard shortcuts",
            &[
                "Ctrl/Cmd + N: new project",
                "Ctrl/Cmd + O: open project",
                "Ctrl/Cmd + S: save project",
            ],
        ),
    ];

    for (title, lines) in NOTES {
        say!(console, "\n{} {}", title.cyan().bold(), "(UI only, not verified)".dimmed());
        for line in *lines {
            say!(console, "  {} {}", "-".dimmed(), line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::confirm::{AlwaysConfirm, NeverConfirm, PromptConfirm};
    use std::io::Cursor;

    #[test]
    fn test_cleanup_declined_keeps_directory() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("test_project_1");
        std::fs::create_dir_all(project.join("slides")).unwrap();

        let outcome = cleanup_project(&project, &mut NeverConfirm, &mut Console::buffer());
        assert_eq!(outcome, CleanupOutcome::Declined);
        assert!(project.exists());
    }

    #[test]
    fn test_cleanup_requires_exact_y() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("test_project_2");
        std::fs::create_dir_all(&project).unwrap();

        for input in ["yes\n", "n\n", "\n", ""] {
            let mut prompt = PromptConfirm::new(Cursor::new(input.as_bytes()), Vec::new());
            let outcome = cleanup_project(&project, &mut prompt, &mut Console::buffer());
            assert_eq!(outcome, CleanupOutcome::Declined);
            assert!(project.exists(), "deleted after answering {input:?}");
        }

        let mut prompt = PromptConfirm::new(Cursor::new(&b"Y\n"[..]), Vec::new());
        let outcome = cleanup_project(&project, &mut prompt, &mut Console::buffer());
        assert_eq!(outcome, CleanupOutcome::Removed);
        assert!(!project.exists());
    }

    #[test]
    fn test_cleanup_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("never_created");

        assert_eq!(
            cleanup_project(&project, &mut AlwaysConfirm, &mut Console::buffer()),
            CleanupOutcome::Missing
        );
        assert_eq!(
            cleanup_project(Path::new(""), &mut AlwaysConfirm, &mut Console::buffer()),
            CleanupOutcome::Missing
        );
        assert!(dir.path().exists());
    }

    #[test]
    fn test_removed_project_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("test_project_3");
        std::fs::create_dir_all(&project).unwrap();

        let mut console = Console::buffer();
        assert_eq!(
            cleanup_project(&project, &mut AlwaysConfirm, &mut console),
            CleanupOutcome::Removed
        );
        assert!(console.captured().contains("Deleted test project"));
    }

    #[test]
    fn test_ui_notes_are_labelled_unverified() {
        let mut console = Console::buffer();
        announce_ui_features(&mut console);

        let out = console.captured();
        assert_eq!(out.matches("(UI only, not verified)").count(), 3);
        assert!(out.contains("Ctrl/Cmd + S"));
    }

    #[test]
    fn test_cleanup_outcome_serializes() {
        let value = serde_json::to_value(CleanupOutcome::Failed("denied".into())).unwrap();
        assert_eq!(value["outcome"], "failed");
        assert_eq!(value["detail"], "denied");
    }
}
