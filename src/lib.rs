//! todo-e2e - seed-then-visit end-to-end scenarios for todo applications
//!
//! A scenario generates a batch of todo items, seeds them through the
//! `db:seed` task, then visits the application root. Seeding and navigation
//! sit behind the [`SeedingService`] and [`Navigator`] ports so the
//! sequencing can be exercised without a live store or browser.

pub mod cli;
pub mod commands;
pub mod common;
pub mod db;
pub mod fixtures;
pub mod navigation;
pub mod scenario;
pub mod seeding;
pub mod tasks;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use fixtures::{todo_items_builder, TodoItem};
pub use navigation::Navigator;
pub use scenario::ScenarioRunner;
pub use seeding::SeedingService;
