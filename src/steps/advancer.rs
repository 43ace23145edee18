use crate::api::{next_path, ApiError, StepTransport};
use crate::ui::{CheckOutput, Navigator};

use super::checker::show_failure;
use super::{NextResponse, NOT_IMPLEMENTED_STATUS};

/// What an advance call ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextOutcome {
    /// Navigator was sent to `url`; check fields untouched
    Navigated(String),
    /// Server answered without a target; fields show the toast
    NotImplemented { status: String, toast: String },
    /// Fields now hold the error sentinel
    Failed(ApiError),
}

/// Ask `module_name` to advance past `step`.
///
/// A `url` in the answer sends `navigator` there and leaves the fields
/// alone. Any other answer shows `"Not Implemented"` with the server's
/// toast. Failures are shown the same way [`super::check`] shows them.
pub async fn next(
    transport: &dyn StepTransport,
    module_name: &str,
    step: &str,
    output: &dyn CheckOutput,
    navigator: &dyn Navigator,
) -> NextOutcome {
    match request_next(transport, module_name, step).await {
        Ok(NextResponse::Navigate { url }) => {
            tracing::info!(module = module_name, step, url = %url, "Advancing to next step");
            navigator.navigate(&url);
            NextOutcome::Navigated(url)
        }
        Ok(NextResponse::Pending { status, toast }) => {
            tracing::debug!(
                module = module_name,
                step,
                server_status = %status,
                "Advance answered without a target"
            );
            output.show(NOT_IMPLEMENTED_STATUS, &toast);
            NextOutcome::NotImplemented { status, toast }
        }
        Err(err) => {
            show_failure(output, &err);
            NextOutcome::Failed(err)
        }
    }
}

async fn request_next(
    transport: &dyn StepTransport,
    module_name: &str,
    step: &str,
) -> Result<NextResponse, ApiError> {
    let path = next_path(module_name, step)?;
    let body = transport.post(&path).await?;
    NextResponse::from_value(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::mock::ScriptedTransport;
    use crate::ui::{CheckFields, RecordingNavigator};
    use serde_json::json;

    #[tokio::test]
    async fn test_next_posts_to_module_step_route() {
        let transport = ScriptedTransport::new(vec![Ok(json!({"url": "/module/basics/step/3"}))]);
        let fields = CheckFields::new();
        let navigator = RecordingNavigator::new();

        next(&transport, "basics", "2", &fields, &navigator).await;

        assert_eq!(transport.paths(), vec!["/modules/basics/step/2/next"]);
    }

    #[tokio::test]
    async fn test_next_navigates_and_leaves_fields() {
        let transport = ScriptedTransport::new(vec![Ok(json!({"url": "/next-page"}))]);
        let fields = CheckFields::new();
        fields.show("Good", "previous toast");
        let navigator = RecordingNavigator::new();

        let outcome = next(&transport, "basics", "1", &fields, &navigator).await;

        assert_eq!(outcome, NextOutcome::Navigated("/next-page".to_string()));
        assert_eq!(navigator.visited(), vec!["/next-page"]);
        assert_eq!(fields.status(), "Good");
        assert_eq!(fields.toast(), "previous toast");
        assert_eq!(fields.updates(), 1);
    }

    #[tokio::test]
    async fn test_next_without_url_shows_not_implemented() {
        let transport =
            ScriptedTransport::new(vec![Ok(json!({"status": "PENDING", "toast": "waiting"}))]);
        let fields = CheckFields::new();
        let navigator = RecordingNavigator::new();

        let outcome = next(&transport, "basics", "1", &fields, &navigator).await;

        assert_eq!(fields.status(), "Not Implemented");
        assert_eq!(fields.toast(), "waiting");
        assert!(navigator.visited().is_empty());
        assert_eq!(
            outcome,
            NextOutcome::NotImplemented {
                status: "PENDING".to_string(),
                toast: "waiting".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_next_network_failure() {
        let transport = ScriptedTransport::new(vec![Err(ApiError::network("offline"))]);
        let fields = CheckFields::new();
        let navigator = RecordingNavigator::new();

        let outcome = next(&transport, "basics", "1", &fields, &navigator).await;

        assert_eq!(fields.status(), "ERROR");
        assert_eq!(fields.toast(), "An error occured: offline");
        assert!(navigator.visited().is_empty());
        assert!(matches!(outcome, NextOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_next_invalid_route_never_sends() {
        let transport = ScriptedTransport::new(vec![Ok(json!({"url": "/x"}))]);
        let fields = CheckFields::new();
        let navigator = RecordingNavigator::new();

        let outcome = next(&transport, "", "1", &fields, &navigator).await;

        assert!(transport.paths().is_empty());
        assert_eq!(fields.status(), "ERROR");
        assert_eq!(
            fields.toast(),
            "An error occured: invalid route: module name is empty"
        );
        assert!(matches!(outcome, NextOutcome::Failed(ApiError::InvalidRoute(_))));
    }
}
