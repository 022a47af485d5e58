//! Named tasks
//!
//! A task is a side effect that runs outside the page under test, addressed
//! by a fixed name and given a JSON payload. Tasks either run in-process
//! ([`LocalTasks`]) or on a remote endpoint ([`HttpTaskDispatcher`]).

mod http;
mod local;

pub use http::HttpTaskDispatcher;
pub use local::{DbSeedTask, LocalTasks};

use async_trait::async_trait;
use serde_json::Value;

use crate::common::Result;

/// Sends a named task with its payload and waits for it to finish
#[async_trait]
pub trait TaskDispatcher: Send + Sync {
    /// Run task `name` and return its result value
    async fn dispatch(&self, name: &str, payload: Value) -> Result<Value>;
}

/// Handler for a single in-process task
#[async_trait]
pub trait TaskHandler: Send + Sync {
    async fn handle(&self, payload: Value) -> Result<Value>;
}
