//! CreateSubscriptionHandler - Command handler for recording a new subscription.

use std::sync::Arc;

use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{SubscriptionDraft, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Command to create a subscription.
///
/// Dates are raw `MM-YYYY` text. A missing or empty `end_date` makes the
/// subscription open-ended.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub service_name: String,
    pub price: i64,
    pub user_id: UserId,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Id assigned to the new subscription.
pub type CreateSubscriptionResult = SubscriptionId;

/// Handler for creating subscriptions.
pub struct CreateSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl CreateSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<CreateSubscriptionResult, SubscriptionError> {
        // 1. Validate and default before touching storage
        let draft = SubscriptionDraft::new(
            cmd.service_name,
            cmd.price,
            cmd.user_id,
            &cmd.start_date,
            cmd.end_date.as_deref(),
        )?;

        // 2. Persist
        let id = self.repository.create(&draft).await?;

        tracing::info!(
            subscription_id = %id,
            user_id = %draft.user_id,
            service_name = %draft.service_name,
            "subscription created"
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::subscription::test_support::{
        test_user_id, MockSubscriptionRepository,
    };

    fn command(start: &str, end: Option<&str>) -> CreateSubscriptionCommand {
        CreateSubscriptionCommand {
            service_name: "Yandex Plus".to_string(),
            price: 400,
            user_id: test_user_id(),
            start_date: start.to_string(),
            end_date: end.map(str::to_string),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn creates_subscription_and_returns_id() {
        let repo = Arc::new(MockSubscriptionRepository::new());
        let handler = CreateSubscriptionHandler::new(repo.clone());

        let id = handler
            .handle(command("01-2025", Some("03-2025")))
            .await
            .unwrap();

        assert_eq!(id.value(), 1);
        let saved = repo.subscriptions.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].start_date.to_string(), "01-2025");
        assert_eq!(saved[0].end_date.to_string(), "03-2025");
    }

    #[tokio::test]
    async fn empty_end_date_persists_sentinel() {
        let repo = Arc::new(MockSubscriptionRepository::new());
        let handler = CreateSubscriptionHandler::new(repo.clone());

        handler.handle(command("07-2025", Some(""))).await.unwrap();

        let saved = repo.subscriptions.lock().unwrap();
        assert_eq!(saved[0].end_date.to_string(), "12-2099");
    }

    #[tokio::test]
    async fn missing_end_date_persists_sentinel() {
        let repo = Arc::new(MockSubscriptionRepository::new());
        let handler = CreateSubscriptionHandler::new(repo.clone());

        handler.handle(command("07-2025", None)).await.unwrap();

        assert!(repo.subscriptions.lock().unwrap()[0].is_open_ended());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Validation Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn invalid_start_date_never_reaches_store() {
        let repo = Arc::new(MockSubscriptionRepository::new());
        let handler = CreateSubscriptionHandler::new(repo.clone());

        let result = handler.handle(command("13-2025", None)).await;

        assert!(matches!(result, Err(SubscriptionError::IncorrectDate { .. })));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn end_before_start_never_reaches_store() {
        let repo = Arc::new(MockSubscriptionRepository::new());
        let handler = CreateSubscriptionHandler::new(repo.clone());

        let result = handler.handle(command("05-2025", Some("01-2025"))).await;

        assert!(matches!(
            result,
            Err(SubscriptionError::EndDateBeforeStart { .. })
        ));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let repo = Arc::new(MockSubscriptionRepository::new());
        let handler = CreateSubscriptionHandler::new(repo.clone());
        let mut cmd = command("01-2025", None);
        cmd.price = -1;

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(SubscriptionError::IncorrectValue { .. })));
        assert_eq!(repo.call_count(), 0);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn store_failure_is_internal() {
        let repo = Arc::new(MockSubscriptionRepository::failing());
        let handler = CreateSubscriptionHandler::new(repo);

        let result = handler.handle(command("01-2025", None)).await;

        assert!(matches!(result, Err(SubscriptionError::Internal(_))));
    }
}
