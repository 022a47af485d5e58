//! Navigating the application under test

mod http;

pub use http::HttpNavigator;

use async_trait::async_trait;

use crate::common::Result;

/// Root path of the application
pub const ROOT_PATH: &str = "/";

/// Loads a path in the application under test
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Load `path` and wait until it has loaded or failed
    async fn visit(&self, path: &str) -> Result<()>;
}

#[async_trait]
impl<T: Navigator + ?Sized> Navigator for Box<T> {
    async fn visit(&self, path: &str) -> Result<()> {
        (**self).visit(path).await
    }
}
