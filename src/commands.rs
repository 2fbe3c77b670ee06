//! CLI command definitions
//!
//! Defines the clap commands for the verification CLI.

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file (default: platform config dir, e.g. ~/.config/pptflow/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the presentation service (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token for the project routes (overrides the config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full create → list → open → save verification
    Run {
        /// Delete the test project at the end without asking
        #[arg(long, conflicts_with = "keep")]
        yes: bool,

        /// Keep the test project and skip the cleanup prompt
        #[arg(long)]
        keep: bool,

        /// Do not print the UI-only feature notes
        #[arg(long)]
        skip_ui_notes: bool,

        /// Print a JSON run report to stdout after the run
        #[arg(long)]
        json: bool,

        /// Workspace directory to create the project in (default: ~/PPTWorkspace)
        #[arg(long)]
        location: Option<PathBuf>,
    },

    /// Check that the service is reachable
    Check,

    /// Create a single project
    Create {
        /// Project name (default: test_project_<unix-seconds>)
        #[arg(long)]
        name: Option<String>,

        /// Workspace directory to create the project in
        #[arg(long)]
        location: Option<PathBuf>,
    },

    /// List projects known to the service
    List,

    /// Open the project stored at PATH
    Open {
        /// Project directory on the service's filesystem
        path: String,
    },

    /// Save the two-slide sample fixture into the project at PATH
    Save {
        /// Project directory on the service's filesystem
        path: String,

        /// Project title to save under
        #[arg(long)]
        title: String,
    },
}
