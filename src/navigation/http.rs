//! HTTP navigator
//!
//! Resolves paths against the application's base URL and loads them with a
//! plain GET. A page counts as loaded once its body has been read.

use std::time::Duration;

use async_trait::async_trait;

use super::Navigator;
use crate::common::{check_http_url, join_url, Error, Result};

/// Visits pages over HTTP
pub struct HttpNavigator {
    client: reqwest::Client,
    base_url: String,
    fail_on_status_code: bool,
}

impl HttpNavigator {
    pub fn new(base_url: impl Into<String>, page_load_timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        check_http_url(&base_url)?;

        let client = reqwest::Client::builder()
            .timeout(page_load_timeout)
            .user_agent("todo-e2e")
            .build()?;

        Ok(Self {
            client,
            base_url,
            fail_on_status_code: true,
        })
    }

    /// Whether a non-2xx response fails the visit (default: true)
    pub fn fail_on_status_code(mut self, fail: bool) -> Self {
        self.fail_on_status_code = fail;
        self
    }
}

#[async_trait]
impl Navigator for HttpNavigator {
    async fn visit(&self, path: &str) -> Result<()> {
        let url = join_url(&self.base_url, path);
        tracing::debug!(%url, "Visiting");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/html,*/*")
            .send()
            .await
            .map_err(|e| Error::navigation(&url, e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::navigation(&url, e.to_string()))?;

        if !status.is_success() {
            if self.fail_on_status_code {
                return Err(Error::navigation(&url, status.to_string()));
            }
            tracing::warn!(%url, %status, "Page answered with a failure status");
        }

        tracing::debug!(%url, %status, bytes = body.len(), "Page loaded");
        Ok(())
    }
}
