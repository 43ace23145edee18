//! reqwest-backed step transport

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::{Client, Url};
use serde_json::Value;

use super::{ApiError, StepTransport};

/// HTTP transport for a step server.
///
/// Every request goes through a cookie store, so the session cookie seeded
/// at construction (and any cookie the server sets later) is sent along.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport for the server at `base_url`.
    ///
    /// `session_cookie` is a `name=value` cookie string. Without its own
    /// `Path` attribute it is scoped to the origin root, so server-absolute
    /// step routes carry it even when `base_url` has a nested path.
    pub fn new(base_url: &str, session_cookie: Option<&str>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Client(format!("invalid base URL '{}': {}", base_url, e)))?;

        let jar = Arc::new(Jar::default());
        if let Some(cookie) = session_cookie {
            let origin_root = base_url
                .join("/")
                .map_err(|e| ApiError::Client(format!("invalid base URL '{}': {}", base_url, e)))?;
            jar.add_cookie_str(cookie, &origin_root);
        }

        let client = Client::builder().cookie_provider(jar).build()?;

        Ok(Self { client, base_url })
    }

    /// Resolve a server path (or full URL) against the base URL
    pub fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::invalid_route(format!("cannot resolve '{}': {}", path, e)))
    }
}

#[async_trait]
impl StepTransport for HttpTransport {
    async fn post(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.resolve(path)?;
        tracing::debug!(url = %url, "POST step endpoint");

        let response = self.client.post(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Body is still used if it decodes
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                "Step server returned non-success status"
            );
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = HttpTransport::new("not a url", None);
        assert!(matches!(result, Err(ApiError::Client(_))));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let transport = HttpTransport::new("http://localhost:8080", None).unwrap();
        let url = transport.resolve("/modules/basics/step/1/next").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/modules/basics/step/1/next"
        );
    }

    #[test]
    fn test_resolve_keeps_query() {
        let transport = HttpTransport::new("http://localhost:8080/", None).unwrap();
        let url = transport.resolve("/module/basics/step/2?attempt=3").unwrap();
        assert_eq!(url.path(), "/module/basics/step/2");
        assert_eq!(url.query(), Some("attempt=3"));
    }

    #[test]
    fn test_resolve_full_url_replaces_base() {
        let transport = HttpTransport::new("http://localhost:8080", None).unwrap();
        let url = transport.resolve("https://example.com/next-page").unwrap();
        assert_eq!(url.as_str(), "https://example.com/next-page");
    }

    #[test]
    fn test_new_with_cookie_on_nested_base() {
        let transport =
            HttpTransport::new("http://localhost:8080/app/learn", Some("session=abc123"))
                .unwrap();
        let url = transport.resolve("/modules/basics/step/1/next").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/modules/basics/step/1/next");
    }
}
