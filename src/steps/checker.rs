use crate::api::{ApiError, StepTransport};
use crate::ui::CheckOutput;

use super::{CheckResponse, ERROR_PREFIX, ERROR_STATUS};

/// What a check call ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Fields now hold the server's status and message
    Updated(CheckResponse),
    /// Fields now hold the error sentinel
    Failed(ApiError),
}

/// Check the step page at `page` and write the result to `output`.
///
/// One POST, no retry. On any failure the status becomes `"ERROR"` and the
/// toast carries the failure description.
pub async fn check(
    transport: &dyn StepTransport,
    page: &str,
    output: &dyn CheckOutput,
) -> CheckOutcome {
    match request_check(transport, page).await {
        Ok(response) => {
            tracing::debug!(page, status = %response.status, "Step check answered");
            output.show(&response.status, &response.message);
            CheckOutcome::Updated(response)
        }
        Err(err) => {
            show_failure(output, &err);
            CheckOutcome::Failed(err)
        }
    }
}

async fn request_check(
    transport: &dyn StepTransport,
    page: &str,
) -> Result<CheckResponse, ApiError> {
    let body = transport.post(page).await?;
    CheckResponse::from_value(&body)
}

/// Toast text shown for a failed request
pub fn failure_message(err: &ApiError) -> String {
    format!("{}{}", ERROR_PREFIX, err)
}

pub(super) fn show_failure(output: &dyn CheckOutput, err: &ApiError) {
    tracing::warn!(error = %err, "Step request failed");
    output.show(ERROR_STATUS, &failure_message(err));
}
