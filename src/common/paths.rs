//! Configuration and workspace paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/pptflow/`
//! - macOS: `~/Library/Application Support/pptflow/`
//! - Windows: `%APPDATA%\pptflow\`

use std::path::PathBuf;

/// Application name used for directory lookup
const APP_NAME: &str = "pptflow";

/// Folder the presentation service creates projects in by default
const WORKSPACE_DIR_NAME: &str = "PPTWorkspace";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Default project workspace: `~/PPTWorkspace`
///
/// Falls back to a relative `PPTWorkspace` when no home directory is known.
pub fn default_workspace() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(WORKSPACE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(WORKSPACE_DIR_NAME))
}
