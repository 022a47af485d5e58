//! Seeding the backing store
//!
//! [`SeedingService`] is the port the scenario runner seeds through.
//! [`TaskSeeder`] implements it on top of the `db:seed` named task.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::common::Result;
use crate::fixtures::TodoItem;
use crate::tasks::TaskDispatcher;

/// Name of the task that writes a todo batch to the database
pub const SEED_TASK: &str = "db:seed";

/// Payload of the `db:seed` task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPayload {
    pub todos: Vec<TodoItem>,
}

/// Writes a batch of todos to the backing store
#[async_trait]
pub trait SeedingService: Send + Sync {
    async fn seed(&self, todos: &[TodoItem]) -> Result<()>;
}

/// Seeds by dispatching `db:seed` through a [`TaskDispatcher`]
pub struct TaskSeeder<D> {
    dispatcher: D,
}

impl<D: TaskDispatcher> TaskSeeder<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    #[cfg(test)]
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }
}

#[async_trait]
impl<D: TaskDispatcher> SeedingService for TaskSeeder<D> {
    async fn seed(&self, todos: &[TodoItem]) -> Result<()> {
        let payload = serde_json::to_value(SeedPayload {
            todos: todos.to_vec(),
        })?;

        // The task's result value carries nothing we act on
        self.dispatcher.dispatch(SEED_TASK, payload).await?;
        Ok(())
    }
}

#[async_trait]
impl<T: SeedingService + ?Sized> SeedingService for Box<T> {
    async fn seed(&self, todos: &[TodoItem]) -> Result<()> {
        (**self).seed(todos).await
    }
}
