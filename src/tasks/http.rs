//! Remote task endpoint client
//!
//! Sends `POST {task_url}/{name}` with the payload as the JSON body. The
//! endpoint answers 2xx with an optional JSON result, anything else is a
//! task failure carrying the response body.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::TaskDispatcher;
use crate::common::{check_http_url, join_url, Error, Result};

/// Dispatches tasks to a remote HTTP endpoint
pub struct HttpTaskDispatcher {
    client: reqwest::Client,
    task_url: String,
}

impl HttpTaskDispatcher {
    pub fn new(task_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let task_url = task_url.into();
        check_http_url(&task_url)?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("todo-e2e")
            .build()?;

        Ok(Self { client, task_url })
    }
}

#[async_trait]
impl TaskDispatcher for HttpTaskDispatcher {
    async fn dispatch(&self, name: &str, payload: Value) -> Result<Value> {
        let url = join_url(&self.task_url, name);
        tracing::debug!(task = name, %url, "Dispatching remote task");

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::task_failed(name, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::task_failed(name, e.to_string()))?;

        if !status.is_success() {
            let detail = if body.trim().is_empty() {
                status.to_string()
            } else {
                format!("{}: {}", status, body.trim())
            };
            return Err(Error::task_failed(name, detail));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}
