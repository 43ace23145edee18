//! Transport error types for the step endpoints

use thiserror::Error;

/// Errors that can occur while talking to the step server.
///
/// The `Display` text of `Network` and `Decode` is the bare underlying
/// description, because it is embedded verbatim in the message shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    #[error("{0}")]
    Network(String),

    /// Response body was not the JSON shape we expected
    #[error("{0}")]
    Decode(String),

    /// Module or step identifier cannot form a route
    #[error("invalid route: {0}")]
    InvalidRoute(String),

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network(message.into())
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode(message.into())
    }

    /// Create an invalid route error
    pub fn invalid_route(message: impl Into<String>) -> Self {
        ApiError::InvalidRoute(message.into())
    }

    /// Check if the request never produced a response
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Client(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
