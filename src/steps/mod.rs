//! Checking and advancing workflow steps
//!
//! [`check`] asks the server to grade the step page the user is on and
//! writes the answer into the check fields. [`next`] asks a module to move
//! to its next step and either navigates or reports why it did not.
//!
//! Each call is one request with no retry. Overlapping calls are not
//! serialized: whichever response settles last owns the check fields.

mod advancer;
mod checker;
mod page;
mod response;
mod status;

#[cfg(test)]
mod mock;

pub use advancer::{next, NextOutcome};
pub use checker::{check, failure_message, CheckOutcome};
pub use page::StepPage;
pub use response::{CheckResponse, NextResponse};
pub use status::StepStatus;

/// Status shown when a request or its decoding fails
pub const ERROR_STATUS: &str = "ERROR";

/// Status shown when an advance request comes back without a target
pub const NOT_IMPLEMENTED_STATUS: &str = "Not Implemented";

/// Prefix of the toast shown on failure
pub const ERROR_PREFIX: &str = "An error occured: ";
