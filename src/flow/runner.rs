//! Verification flow orchestration
//!
//! Runs preflight, create, list, open and save strictly in order. The
//! first failing gate ends the run: later steps, including cleanup, are
//! skipped.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::api::{ProjectApi, ProjectRef};
use crate::common::{Config, Error, Result};

use super::confirm::Confirm;
use super::console::Console;
use super::fixture::{project_name, sample_slides};
use super::steps::{self, CleanupOutcome};

/// Stages of a verification run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Preflight,
    Create,
    List,
    Open,
    Save,
    AnnounceUi,
    Cleanup,
}

impl Stage {
    /// Stages whose failure stops the run
    pub const GATES: [Stage; 4] = [Stage::Create, Stage::List, Stage::Open, Stage::Save];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Preflight => "preflight",
            Stage::Create => "create project",
            Stage::List => "list projects",
            Stage::Open => "open project",
            Stage::Save => "save project",
            Stage::AnnounceUi => "announce UI features",
            Stage::Cleanup => "cleanup",
        };
        f.write_str(name)
    }
}

/// Settings for one run, derived from [`Config`] and CLI flags
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Workspace directory handed to the create route
    pub location: PathBuf,
    /// Project name; defaults to `test_project_<unix-seconds>`
    pub project_name: Option<String>,
    /// Print the UI-only feature notes after the API checks
    pub announce_ui: bool,
    /// Offer to delete the created project at the end
    pub cleanup: bool,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            location: config.workspace.location(),
            project_name: None,
            announce_ui: true,
            cleanup: true,
        }
    }
}

/// Outcome of a verification run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub passed: bool,
    pub steps_run: usize,
    pub steps_total: usize,
    pub failed_step: Option<Stage>,
    pub error: Option<String>,
    pub project: Option<ProjectRef>,
    pub cleanup: Option<CleanupOutcome>,
}

impl RunReport {
    fn new() -> Self {
        Self {
            passed: false,
            steps_run: 0,
            steps_total: Stage::GATES.len(),
            failed_step: None,
            error: None,
            project: None,
            cleanup: None,
        }
    }

    /// Report for a run that never got past the liveness probe
    pub fn unreachable(error: &Error) -> Self {
        Self {
            failed_step: Some(Stage::Preflight),
            error: Some(error.to_string()),
            ..Self::new()
        }
    }

    fn failed(mut self, console: &mut Console, stage: Stage, error: &Error) -> Self {
        say!(
            console,
            "\n{} {}",
            "✗ Verification failed:".red().bold(),
            format!("could not {}", stage).red()
        );
        self.failed_step = Some(stage);
        self.error = Some(error.to_string());
        self
    }

    /// Process exit code for this report
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

/// Editor features that only exist in the UI, listed in the closing summary
const UI_ONLY_FEATURES: [&str; 4] = [
    "slide drag-and-drop reordering",
    "keyboard shortcuts",
    "menu bar and save-state indicator",
    "new project dialog",
];

/// Preflight, then the full flow
///
/// An unreachable service is returned as `Err` before any project route
/// is touched; gate failures are reported through [`RunReport`].
pub async fn verify<A, C>(
    api: &A,
    console: &mut Console,
    confirm: &mut C,
    options: &RunOptions,
) -> Result<RunReport>
where
    A: ProjectApi + ?Sized,
    C: Confirm + ?Sized,
{
    steps::preflight(api, console).await?;
    Ok(run_flow(api, console, confirm, options).await)
}

/// Run the gated create → list → open → save flow
pub async fn run_flow<A, C>(
    api: &A,
    console: &mut Console,
    confirm: &mut C,
    options: &RunOptions,
) -> RunReport
where
    A: ProjectApi + ?Sized,
    C: Confirm + ?Sized,
{
    let mut report = RunReport::new();

    say!(console, "\n{}", "Verifying the project management flow".blue().bold());
    say!(console, "{}", "=".repeat(50).dimmed());

    let name = options
        .project_name
        .clone()
        .unwrap_or_else(|| project_name(Utc::now()));

    report.steps_run += 1;
    let project = match steps::create_project(api, console, &name, &options.location).await {
        Ok(project) => project,
        Err(e) => return report.failed(console, Stage::Create, &e),
    };
    report.project = Some(project.clone());

    report.steps_run += 1;
    match steps::list_projects(api, console).await {
        Ok(projects) if projects.is_empty() => {
            let e = Error::StepFailed("project list is empty".to_string());
            return report.failed(console, Stage::List, &e);
        }
        Ok(_) => {}
        Err(e) => return report.failed(console, Stage::List, &e),
    }

    report.steps_run += 1;
    let opened = match steps::open_project(api, console, &project.path).await {
        Ok(opened) => opened,
        Err(e) => return report.failed(console, Stage::Open, &e),
    };

    report.steps_run += 1;
    let slides = sample_slides();
    if let Err(e) =
        steps::save_project(api, console, &project.path, &opened.meta.title, slides).await
    {
        return report.failed(console, Stage::Save, &e);
    }

    if options.announce_ui {
        steps::announce_ui_features(console);
    }

    say!(console, "\n{}", "=".repeat(50).dimmed());
    say!(console, "{}", "✓ All checks passed".green().bold());
    for stage in Stage::GATES {
        say!(console, "  {} {}", "✓".green(), stage);
    }
    if options.announce_ui {
        for feature in UI_ONLY_FEATURES {
            say!(
                console,
                "  {} {} {}",
                "-".dimmed(),
                feature,
                "(UI only, not verified)".dimmed()
            );
        }
    }
    report.passed = true;

    if options.cleanup {
        let path = Path::new(&project.path);
        report.cleanup = Some(steps::cleanup_project(path, confirm, console));
    }

    tracing::info!(
        project = %project.title,
        steps = report.steps_run,
        "Verification flow completed"
    );

    report
}
