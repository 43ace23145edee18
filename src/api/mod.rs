//! Transport for the step server endpoints
//!
//! The step server exposes two POST endpoints: the current step page itself
//! (answers with a check result) and `/modules/{module}/step/{step}/next`
//! (answers with a navigation target or a pending toast). Both are reached
//! through the [`StepTransport`] trait so the check/advance logic can be
//! driven by a real HTTP client or by a test double.

pub mod error;
mod http;

pub use error::ApiError;
pub use http::HttpTransport;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

/// Something that can POST to a step server path and hand back the JSON body
#[async_trait]
pub trait StepTransport: Send + Sync {
    /// POST with credentials and no body, returning the decoded JSON body.
    ///
    /// `path` is either server-absolute (`/modules/...`) or a full URL.
    async fn post(&self, path: &str) -> Result<Value, ApiError>;
}

/// Build the advance route for a module step.
///
/// Each identifier becomes exactly one path segment; characters such as
/// `/`, `?` and `#` are percent-encoded.
pub fn next_path(module_name: &str, step: &str) -> Result<String, ApiError> {
    validate_segment("module name", module_name)?;
    validate_segment("step", step)?;

    let mut url = Url::parse("http://localhost/")
        .map_err(|e| ApiError::invalid_route(format!("failed to build route: {}", e)))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| ApiError::invalid_route("base cannot hold a path"))?;
        segments
            .clear()
            .extend(["modules", module_name, "step", step, "next"]);
    }

    Ok(url.path().to_string())
}

fn validate_segment(label: &str, value: &str) -> Result<(), ApiError> {
    match value {
        "" => Err(ApiError::invalid_route(format!("{} is empty", label))),
        "." | ".." => Err(ApiError::invalid_route(format!(
            "{} '{}' is not a valid path segment",
            label, value
        ))),
        _ => Ok(()),
    }
}
