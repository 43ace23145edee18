//! Interpretation of step server response bodies

use serde_json::{Map, Value};

use crate::api::ApiError;

/// Body returned when checking the current step page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResponse {
    pub status: String,
    pub message: String,
}

impl CheckResponse {
    /// Read `status` and `message` from a JSON object body.
    ///
    /// Missing or null fields become empty strings and other non-string
    /// values are kept as their JSON text. Fails with [`ApiError::Decode`]
    /// when the body is not an object.
    pub fn from_value(value: &Value) -> Result<Self, ApiError> {
        let object = as_object(value)?;
        Ok(Self {
            status: field_text(object, "status"),
            message: field_text(object, "message"),
        })
    }
}

/// Body returned when asking a module to advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextResponse {
    /// Server moved the module forward; the client should go to `url`
    Navigate { url: String },
    /// Server did not move forward
    Pending { status: String, toast: String },
}

impl NextResponse {
    /// Read an advance body: navigation when it has a `url`, else pending.
    ///
    /// Any `url` key selects navigation, whatever the other fields hold, and
    /// must be a string. A pending body reads `status` and `toast` the same
    /// way [`CheckResponse::from_value`] reads its fields. Fails with
    /// [`ApiError::Decode`] when the body is not an object or `url` is not a
    /// string.
    pub fn from_value(value: &Value) -> Result<Self, ApiError> {
        let object = as_object(value)?;

        if let Some(url) = object.get("url") {
            return match url {
                Value::String(url) => Ok(NextResponse::Navigate { url: url.clone() }),
                other => Err(ApiError::decode(format!(
                    "expected 'url' to be a string, got {}",
                    kind(other)
                ))),
            };
        }

        Ok(NextResponse::Pending {
            status: field_text(object, "status"),
            toast: field_text(object, "toast"),
        })
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ApiError> {
    value.as_object().ok_or_else(|| {
        ApiError::decode(format!("expected a JSON object, got {}", kind(value)))
    })
}

/// Display text for a field: strings verbatim, missing/null empty, others as JSON
fn field_text(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
