//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default forms service address
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Default path of the forms collection
pub const DEFAULT_FORMS_PATH: &str = "/api/forms";
/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment override for the service address
pub const API_URL_ENV: &str = "FORMS_API_URL";
/// Environment override for the forms collection path
pub const FORMS_PATH_ENV: &str = "FORMS_API_PATH";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Forms service base URL
    pub api_url: Option<String>,
    /// Path of the forms collection under the base URL
    pub forms_path: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(FORMS_PATH_ENV).ok(),
        );
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Non-empty override values replace file values
    fn apply_overrides(&mut self, api_url: Option<String>, forms_path: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            self.api_url = Some(url);
        }
        if let Some(path) = forms_path.filter(|p| !p.is_empty()) {
            self.forms_path = Some(path);
        }
    }

    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn forms_path(&self) -> String {
        self.forms_path
            .clone()
            .unwrap_or_else(|| DEFAULT_FORMS_PATH.to_string())
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

/// Platform directories for config and logs
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "forms", "forms-tui")
}

/// Where the log file goes
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("forms-tui.log"))
}
