use std::sync::Arc;

use crate::api::StepTransport;
use crate::ui::{CheckOutput, Navigator};

use super::{advancer, checker, CheckOutcome, NextOutcome};

/// A step page: the path being viewed plus where its results go.
///
/// Cloning is cheap and clones share the same transport, fields and
/// navigator, so several calls can be in flight against one page.
#[derive(Clone)]
pub struct StepPage {
    transport: Arc<dyn StepTransport>,
    path: String,
    output: Arc<dyn CheckOutput>,
    navigator: Arc<dyn Navigator>,
}

impl StepPage {
    pub fn new(
        transport: Arc<dyn StepTransport>,
        path: impl Into<String>,
        output: Arc<dyn CheckOutput>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            path: path.into(),
            output,
            navigator,
        }
    }

    /// Path of the page being viewed
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check this page's step
    pub async fn check(&self) -> CheckOutcome {
        checker::check(self.transport.as_ref(), &self.path, self.output.as_ref()).await
    }

    /// Advance `module_name` past `step`
    pub async fn next(&self, module_name: &str, step: &str) -> NextOutcome {
        advancer::next(
            self.transport.as_ref(),
            module_name,
            step,
            self.output.as_ref(),
            self.navigator.as_ref(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::mock::ScriptedTransport;
    use crate::ui::{CheckFields, RecordingNavigator};
    use serde_json::json;

    fn build_page(responses: Vec<Result<serde_json::Value, crate::api::ApiError>>) -> (
        StepPage,
        Arc<ScriptedTransport>,
        CheckFields,
        RecordingNavigator,
    ) {
        let transport = Arc::new(ScriptedTransport::new(responses));
        let fields = CheckFields::new();
        let navigator = RecordingNavigator::new();
        let page = StepPage::new(
            transport.clone(),
            "/module/basics/step/1",
            Arc::new(fields.clone()),
            Arc::new(navigator.clone()),
        );
        (page, transport, fields, navigator)
    }

    #[tokio::test]
    async fn test_page_check_posts_to_own_path() {
        let (page, transport, fields, _) =
            build_page(vec![Ok(json!({"status": "Good", "message": "all set"}))]);

        page.check().await;

        assert_eq!(transport.paths(), vec!["/module/basics/step/1"]);
        assert_eq!(fields.snapshot().status, "Good");
        assert_eq!(fields.snapshot().toast, "all set");
    }

    #[tokio::test]
    async fn test_page_check_then_next() {
        let (page, transport, fields, navigator) = build_page(vec![
            Ok(json!({"status": "Good", "message": "ready"})),
            Ok(json!({"url": "/module/basics/step/2"})),
        ]);

        page.check().await;
        let outcome = page.next("basics", "1").await;

        assert_eq!(
            transport.paths(),
            vec!["/module/basics/step/1", "/modules/basics/step/1/next"]
        );
        assert_eq!(outcome, NextOutcome::Navigated("/module/basics/step/2".to_string()));
        assert_eq!(navigator.last().as_deref(), Some("/module/basics/step/2"));
        assert_eq!(fields.toast(), "ready");
    }

    #[tokio::test]
    async fn test_cloned_pages_share_fields() {
        let (page, _, fields, _) = build_page(vec![
            Ok(json!({"status": "User Error", "message": "no commit yet"})),
            Ok(json!({"status": "Good", "message": "commit found"})),
        ]);
        let other = page.clone();

        page.check().await;
        other.check().await;

        assert_eq!(fields.updates(), 2);
        assert_eq!(fields.status(), "Good");
        assert_eq!(other.path(), "/module/basics/step/1");
    }
}
