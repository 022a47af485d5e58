//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::{config_path, default_db_path};
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Application under test
    #[serde(default)]
    pub app: AppConfig,

    /// Where the `db:seed` task writes
    #[serde(default)]
    pub seeding: SeedingConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,

    /// Todo generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Application settings
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Base URL that visited paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Treat non-2xx page responses as navigation failures
    #[serde(default = "default_true")]
    pub fail_on_status_code: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fail_on_status_code: true,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_true() -> bool {
    true
}

/// Seeding settings
///
/// When `task_url` is set, tasks are sent to that HTTP endpoint. Otherwise
/// they run in-process against the JSON database at `db_path`.
#[derive(Debug, Deserialize, Default)]
pub struct SeedingConfig {
    /// JSON database file used by the in-process `db:seed` task
    pub db_path: Option<PathBuf>,

    /// Base URL of a remote task endpoint
    pub task_url: Option<String>,
}

impl SeedingConfig {
    /// Database path, falling back to the platform data directory
    pub fn db_path(&self) -> PathBuf {
        self.db_path.clone().unwrap_or_else(default_db_path)
    }
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// Timeout for a single task dispatch
    #[serde(default = "default_task")]
    pub task_secs: u64,

    /// Timeout for loading a page
    #[serde(default = "default_page_load")]
    pub page_load_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            task_secs: default_task(),
            page_load_secs: default_page_load(),
        }
    }
}

fn default_task() -> u64 {
    60
}
fn default_page_load() -> u64 {
    60
}

/// Todo generator settings
#[derive(Debug, Deserialize)]
pub struct GeneratorConfig {
    /// Batch size when neither the scenario nor the command line gives one
    #[serde(default = "default_count")]
    pub default_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
        }
    }
}

fn default_count() -> usize {
    5
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}
