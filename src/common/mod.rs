//! Common utilities shared by the runner, collaborators and CLI

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};

/// Join a path onto a base URL, tolerating slashes on either side
///
/// `join_url("http://localhost:3000/", "/")` yields `http://localhost:3000/`.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return format!("{}/", base);
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Reject URLs that reqwest can't send to
pub fn check_http_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::InvalidUrl {
            url: url.to_string(),
            message: "expected an http:// or https:// URL".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_http_url() {
        assert!(check_http_url("http://localhost:3000").is_ok());
        assert!(check_http_url("https://example.com").is_ok());
        assert!(matches!(
            check_http_url("localhost:9000"),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_join_url_root() {
        assert_eq!(join_url("http://localhost:3000", "/"), "http://localhost:3000/");
        assert_eq!(join_url("http://localhost:3000/", "/"), "http://localhost:3000/");
        assert_eq!(join_url("http://localhost:3000", ""), "http://localhost:3000/");
    }

    #[test]
    fn test_join_url_relative() {
        assert_eq!(
            join_url("http://localhost:3000/app/", "todos"),
            "http://localhost:3000/app/todos"
        );
    }
}
