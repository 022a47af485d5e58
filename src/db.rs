//! JSON file database
//!
//! The whole database is one document, `{ "todos": [...] }`, the same shape
//! json-server style backends read. Writes replace the file atomically.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};
use crate::fixtures::TodoItem;

/// On-disk document
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    todos: Vec<TodoItem>,
}

/// A JSON database file holding the todo collection
#[derive(Debug, Clone)]
pub struct JsonDb {
    path: PathBuf,
}

impl JsonDb {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the todo collection. A missing file reads as empty.
    pub fn todos(&self) -> Result<Vec<TodoItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| Error::FileRead {
            path: self.path.display().to_string(),
            error: e.to_string(),
        })?;
        let doc: Document = serde_json::from_str(&content)
            .map_err(|e| Error::database(&self.path, format!("malformed document: {}", e)))?;
        Ok(doc.todos)
    }

    /// Replace the todo collection with `todos`
    pub fn replace_todos(&self, todos: &[TodoItem]) -> Result<()> {
        let doc = Document {
            todos: todos.to_vec(),
        };
        let json = serde_json::to_vec_pretty(&doc)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        // Temp file in the same directory so the rename stays on one filesystem
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .map_err(|e| Error::database(&self.path, e.error.to_string()))?;

        tracing::debug!(path = %self.path.display(), count = todos.len(), "Replaced todos");
        Ok(())
    }
}
