//! Todo item generator
//!
//! Produces fresh batches of todo records for seeding. Every batch gets new
//! ids so repeated runs never collide with rows left by a previous run.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Batch size produced by [`todo_items_builder`]
pub const DEFAULT_TODO_COUNT: usize = 5;

const TASKS: &[&str] = &[
    "Buy milk",
    "Walk the dog",
    "Pay rent",
    "Water the plants",
    "Call mom",
    "Read a book",
    "Clean the kitchen",
    "Write tests",
];

/// A record suitable for seeding a todo list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    /// Create an open todo with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
        }
    }
}

/// Builder for a batch of todo items
#[derive(Debug, Clone)]
pub struct TodoItemsBuilder {
    count: usize,
    completed_every: Option<usize>,
}

impl Default for TodoItemsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoItemsBuilder {
    pub fn new() -> Self {
        Self {
            count: DEFAULT_TODO_COUNT,
            completed_every: None,
        }
    }

    /// Number of items in the batch
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Mark every `n`th item (1-based) as completed. Zero disables it.
    pub fn completed_every(mut self, n: usize) -> Self {
        self.completed_every = (n > 0).then_some(n);
        self
    }

    pub fn build(&self) -> Vec<TodoItem> {
        (0..self.count)
            .map(|i| {
                let mut item = TodoItem::new(format!("{} #{}", TASKS[i % TASKS.len()], i + 1));
                if let Some(n) = self.completed_every {
                    item.completed = (i + 1) % n == 0;
                }
                item
            })
            .collect()
    }
}

/// Build a default-sized batch of fresh todo items
pub fn todo_items_builder() -> Vec<TodoItem> {
    TodoItemsBuilder::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_batch() {
        let todos = todo_items_builder();
        assert_eq!(todos.len(), DEFAULT_TODO_COUNT);
        assert!(todos.iter().all(|t| !t.title.is_empty()));
        assert!(todos.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_ids_unique() {
        let todos = TodoItemsBuilder::new().count(50).build();
        let ids: HashSet<_> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_empty_batch() {
        assert!(TodoItemsBuilder::new().count(0).build().is_empty());
    }

    #[test]
    fn test_titles_numbered() {
        let todos = TodoItemsBuilder::new().count(10).build();
        assert_eq!(todos[0].title, "Buy milk #1");
        assert_eq!(todos[8].title, "Buy milk #9");
    }

    #[test]
    fn test_completed_every() {
        let todos = TodoItemsBuilder::new().count(6).completed_every(3).build();
        let done: Vec<bool> = todos.iter().map(|t| t.completed).collect();
        assert_eq!(done, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_serialized_shape() {
        let item = TodoItem {
            id: "1".to_string(),
            title: "Buy milk".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1", "title": "Buy milk", "completed": true })
        );
    }
}
