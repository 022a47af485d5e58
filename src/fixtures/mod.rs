//! Test data generators

mod todo;

pub use todo::{todo_items_builder, TodoItem, TodoItemsBuilder, DEFAULT_TODO_COUNT};
