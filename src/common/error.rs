//! Error types for the todo-e2e runner
//!
//! Errors from collaborators (seeding tasks, navigation) are carried through
//! unchanged so a failed scenario reports exactly what the collaborator said.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the todo-e2e runner
#[derive(Error, Debug)]
pub enum Error {
    // === Task Errors ===
    #[error("No task named '{0}' is registered")]
    UnknownTask(String),

    #[error("Invalid payload for task '{task}': {message}")]
    TaskPayload { task: String, message: String },

    #[error("Task '{task}' failed: {message}")]
    TaskFailed { task: String, message: String },

    // === Navigation Errors ===
    #[error("Failed to visit '{url}': {message}")]
    Navigation { url: String, message: String },

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    // === Database Errors ===
    #[error("Database error at '{path}': {message}")]
    Database { path: String, message: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Invalid scenario file '{path}': {message}")]
    ScenarioParse { path: String, message: String },

    #[error("Scenario '{name}' failed at step {step}")]
    ScenarioFailed { name: String, step: usize },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === HTTP Errors ===
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a task failed error
    pub fn task_failed(task: &str, message: impl Into<String>) -> Self {
        Self::TaskFailed {
            task: task.to_string(),
            message: message.into(),
        }
    }

    /// Create an invalid task payload error
    pub fn task_payload(task: &str, message: impl Into<String>) -> Self {
        Self::TaskPayload {
            task: task.to_string(),
            message: message.into(),
        }
    }

    /// Create a navigation error
    pub fn navigation(url: &str, message: impl Into<String>) -> Self {
        Self::Navigation {
            url: url.to_string(),
            message: message.into(),
        }
    }

    /// Create a database error
    pub fn database(path: &std::path::Path, message: impl Into<String>) -> Self {
        Self::Database {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}
