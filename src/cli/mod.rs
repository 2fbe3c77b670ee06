//! CLI command handling
//!
//! Resolves configuration, builds the API client and dispatches each
//! command to the verification flow.

use chrono::Utc;

use crate::api::ApiClient;
use crate::commands::{Commands, GlobalArgs};
use crate::common::{Config, Error, Result};
use crate::flow::{
    self, fixture, steps, AlwaysConfirm, Confirm, Console, PromptConfirm, RunOptions, RunReport,
};

/// Load the config file and apply command-line overrides
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &global.base_url {
        config.server.base_url = base_url.clone();
    }
    if let Some(token) = &global.token {
        config.server.auth_token = Some(token.clone());
    }
    config.validate()?;

    tracing::debug!(api_base = %config.api_base(), "Configuration loaded");
    Ok(config)
}

/// The `--json` report: the only thing a `run --json` writes to stdout
pub fn render_json(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, global: GlobalArgs) -> Result<()> {
    let config = load_config(&global)?;
    let api = ApiClient::new(&config)?;

    match command {
        Commands::Run {
            yes,
            keep,
            skip_ui_notes,
            json,
            location,
        } => {
            let mut options = RunOptions::from_config(&config);
            if let Some(location) = location {
                options.location = location;
            }
            options.announce_ui = !skip_ui_notes;
            options.cleanup = !keep;

            let mut console = Console::for_run(json);
            let mut confirm: Box<dyn Confirm> = match (yes, json) {
                (true, _) => Box::new(AlwaysConfirm),
                (false, true) => Box::new(PromptConfirm::stdin_on_stderr()),
                (false, false) => Box::new(PromptConfirm::stdin()),
            };

            let outcome = flow::verify(&api, &mut console, confirm.as_mut(), &options).await;

            if json {
                let report = match &outcome {
                    Ok(report) => report.clone(),
                    Err(e) => RunReport::unreachable(e),
                };
                println!("{}", render_json(&report)?);
            }

            let report = outcome?;
            match (report.failed_step, report.error) {
                (Some(stage), Some(error)) => {
                    Err(Error::StepFailed(format!("{} ({})", stage, error)))
                }
                (Some(stage), None) => Err(Error::StepFailed(stage.to_string())),
                _ => Ok(()),
            }
        }

        Commands::Check => steps::preflight(&api, &mut Console::Stdout).await.map(|_| ()),

        Commands::Create { name, location } => {
            let name = name.unwrap_or_else(|| fixture::project_name(Utc::now()));
            let location = location.unwrap_or_else(|| config.workspace.location());
            steps::create_project(&api, &mut Console::Stdout, &name, &location).await?;
            Ok(())
        }

        Commands::List => {
            let projects = steps::list_projects(&api, &mut Console::Stdout).await?;
            for project in &projects {
                match project.slide_count {
                    Some(count) => {
                        println!("    {} ({} slides)  {}", project.title, count, project.path)
                    }
                    None => println!("    {}  {}", project.title, project.path),
                }
            }
            Ok(())
        }

        Commands::Open { path } => {
            steps::open_project(&api, &mut Console::Stdout, &path).await?;
            Ok(())
        }

        Commands::Save { path, title } => {
            let slides = fixture::sample_slides();
            steps::save_project(&api, &mut Console::Stdout, &path, &title, slides).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbase_url = \"http://10.0.0.5:3000\"\nauth_token = \"from-file\"").unwrap();

        let global = GlobalArgs {
            config: Some(file.path().to_path_buf()),
            base_url: Some("http://127.0.0.1:4000".into()),
            token: None,
            verbose: false,
        };
        let config = load_config(&global).unwrap();

        assert_eq!(config.server.base_url, "http://127.0.0.1:4000");
        assert_eq!(config.server.auth_token.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_json_report_is_a_single_document() {
        let err = Error::ServiceUnreachable {
            url: "http://localhost:3000/api/projects/workspace".into(),
            reason: "connection refused".into(),
        };
        let rendered = render_json(&RunReport::unreachable(&err)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["passed"], false);
        assert_eq!(value["failed_step"], "preflight");
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalArgs {
            config: Some(dir.path().join("absent.toml")),
            ..Default::default()
        };
        assert!(matches!(load_config(&global), Err(Error::FileRead { .. })));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let global = GlobalArgs {
            config: Some(path),
            base_url: Some("ftp://example".into()),
            ..Default::default()
        };
        assert!(matches!(load_config(&global), Err(Error::Config(_))));
    }
}
