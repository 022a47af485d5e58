//! In-process task registry

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::{TaskDispatcher, TaskHandler};
use crate::common::{Error, Result};
use crate::db::JsonDb;
use crate::seeding::{SeedPayload, SEED_TASK};

/// Registry of tasks that run inside this process
#[derive(Default)]
pub struct LocalTasks {
    handlers: HashMap<String, Box<dyn TaskHandler>>,
}

impl LocalTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `db:seed` bound to `db`
    pub fn with_db(db: JsonDb) -> Self {
        let mut tasks = Self::new();
        tasks.register(SEED_TASK, DbSeedTask::new(db));
        tasks
    }

    /// Register `handler` under `name`, replacing any previous handler
    pub fn register(&mut self, name: &str, handler: impl TaskHandler + 'static) {
        self.handlers.insert(name.to_string(), Box::new(handler));
    }

    /// Registered task names, sorted
    #[cfg(test)]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[async_trait]
impl TaskDispatcher for LocalTasks {
    async fn dispatch(&self, name: &str, payload: Value) -> Result<Value> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| Error::UnknownTask(name.to_string()))?;

        tracing::debug!(task = name, "Running local task");
        handler.handle(payload).await
    }
}

/// `db:seed`: replace the todos in a JSON database with the payload batch
pub struct DbSeedTask {
    db: JsonDb,
}

impl DbSeedTask {
    pub fn new(db: JsonDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskHandler for DbSeedTask {
    async fn handle(&self, payload: Value) -> Result<Value> {
        let payload: SeedPayload = serde_json::from_value(payload)
            .map_err(|e| Error::task_payload(SEED_TASK, e.to_string()))?;

        let count = payload.todos.len();
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || db.replace_todos(&payload.todos))
            .await
            .map_err(|e| Error::task_failed(SEED_TASK, e.to_string()))??;

        tracing::info!(count, db = %self.db.path().display(), "Seeded database");

        // A task must resolve to a value; null means done
        Ok(Value::Null)
    }
}
