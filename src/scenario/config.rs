//! Scenario file types
//!
//! Defines the data structures for deserializing YAML scenario files.

use serde::Deserialize;
use std::path::Path;

use crate::common::{Error, Result};
use crate::navigation::ROOT_PATH;

/// A seed-then-visit scenario loaded from a YAML file
#[derive(Deserialize, Debug)]
pub struct Scenario {
    /// Name of the scenario
    pub name: String,
    /// Optional description of what the scenario checks
    pub description: Option<String>,
    /// How to generate the seeded batch
    #[serde(default)]
    pub todos: TodoBatch,
    /// Path visited after seeding
    #[serde(default = "default_visit")]
    pub visit: String,
}

/// Generator settings for the seeded batch
#[derive(Deserialize, Debug, Default)]
pub struct TodoBatch {
    /// Number of items; falls back to the configured default
    pub count: Option<usize>,
    /// Mark every n-th item completed
    pub completed_every: Option<usize>,
}

fn default_visit() -> String {
    ROOT_PATH.to_string()
}

impl Scenario {
    /// Load and parse a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            Error::ScenarioParse { message, .. } => Error::ScenarioParse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse scenario YAML text
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ScenarioParse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }
}
