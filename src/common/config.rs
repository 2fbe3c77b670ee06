//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::paths::{config_path, default_workspace};
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Target service settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,

    /// Where test projects get created
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

/// Target service settings
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Base URL of the presentation service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path prefix the project API is mounted under
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Bearer token for the authenticated project routes
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            auth_token: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize, Clone)]
pub struct Timeouts {
    /// Timeout for the liveness probe
    #[serde(default = "default_preflight")]
    pub preflight_secs: u64,

    /// Timeout for every other request
    #[serde(default = "default_request")]
    pub request_secs: u64,

    /// TCP connect timeout
    #[serde(default = "default_connect")]
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            preflight_secs: default_preflight(),
            request_secs: default_request(),
            connect_secs: default_connect(),
        }
    }
}

impl Timeouts {
    pub fn preflight(&self) -> Duration {
        Duration::from_secs(self.preflight_secs)
    }

    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

fn default_preflight() -> u64 {
    5
}
fn default_request() -> u64 {
    30
}
fn default_connect() -> u64 {
    5
}

/// Workspace settings
#[derive(Debug, Deserialize, Default, Clone)]
pub struct WorkspaceConfig {
    /// Directory passed as `location` when creating projects
    #[serde(default)]
    pub location: Option<PathBuf>,
}

impl WorkspaceConfig {
    /// Configured location, or `~/PPTWorkspace`
    pub fn location(&self) -> PathBuf {
        self.location.clone().unwrap_or_else(default_workspace)
    }
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> Result<()> {
        let base = &self.server.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                base
            )));
        }
        let t = &self.timeouts;
        if t.preflight_secs == 0 || t.request_secs == 0 || t.connect_secs == 0 {
            return Err(Error::Config("timeouts must be at least 1 second".to_string()));
        }
        Ok(())
    }

    /// Root of the project API, e.g. `http://localhost:3000/api`
    pub fn api_base(&self) -> String {
        let base = self.server.base_url.trim_end_matches('/');
        let prefix = self.server.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, prefix)
        }
    }
}
