//! Typed view of the status strings shown in the check field

use std::fmt;

use super::{ERROR_STATUS, NOT_IMPLEMENTED_STATUS};

/// Status reported for a step, parsed from the server's status string.
///
/// The server grades a step check as good, a user error, a recoverable
/// failure on its side, or an unrecoverable one. The client adds its own
/// two sentinels for request failures and unimplemented transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Good,
    UserError,
    Recoverable,
    Unrecoverable,
    /// Request or decode failure on the client side
    Error,
    /// Advance request answered without a navigation target
    NotImplemented,
    Other(String),
}

impl StepStatus {
    /// Parse a status string, ignoring ASCII case
    pub fn parse(status: &str) -> Self {
        let trimmed = status.trim();
        let lower = trimmed.to_ascii_lowercase();
        match lower.as_str() {
            "good" | "ok" => StepStatus::Good,
            "user error" => StepStatus::UserError,
            "recoverable" => StepStatus::Recoverable,
            "unrecoverable" => StepStatus::Unrecoverable,
            _ if trimmed.eq_ignore_ascii_case(ERROR_STATUS) => StepStatus::Error,
            _ if trimmed.eq_ignore_ascii_case(NOT_IMPLEMENTED_STATUS) => {
                StepStatus::NotImplemented
            }
            _ => StepStatus::Other(trimmed.to_string()),
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, StepStatus::Good)
    }

    /// Whether the user can act on this status and try again
    pub fn is_retryable(&self) -> bool {
        matches!(self, StepStatus::UserError | StepStatus::Recoverable)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Good => write!(f, "Good"),
            StepStatus::UserError => write!(f, "User Error"),
            StepStatus::Recoverable => write!(f, "recoverable"),
            StepStatus::Unrecoverable => write!(f, "unrecoverable"),
            StepStatus::Error => write!(f, "{}", ERROR_STATUS),
            StepStatus::NotImplemented => write!(f, "{}", NOT_IMPLEMENTED_STATUS),
            StepStatus::Other(s) => write!(f, "{}", s),
        }
    }
}
