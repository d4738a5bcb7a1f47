//! CalculateCostHandler - Query handler for the cost of a subscription over
//! a window of months.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{BillingWindow, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Query for what a user pays for a service between two months.
///
/// Both dates are required `MM-YYYY` text; neither is defaulted.
#[derive(Debug, Clone)]
pub struct CalculateCostQuery {
    pub service_name: String,
    pub user_id: UserId,
    pub start_date: String,
    pub end_date: String,
}

/// Result of a cost query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateCostResult {
    pub service_name: String,
    pub user_id: UserId,
    pub cost: i64,
    pub months_count: i64,
}

/// Handler for cost queries.
pub struct CalculateCostHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl CalculateCostHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: CalculateCostQuery,
    ) -> Result<CalculateCostResult, SubscriptionError> {
        // 1. Validate the window before any lookup
        let window = BillingWindow::parse(&query.start_date, &query.end_date)?;

        // 2. Find the overlapping subscription
        let subscription = self
            .repository
            .find_overlapping(&query.user_id, &query.service_name, &window)
            .await?
            .ok_or_else(|| {
                tracing::debug!(
                    user_id = %query.user_id,
                    service_name = %query.service_name,
                    window_start = %window.start(),
                    window_end = %window.end(),
                    "no overlapping subscription"
                );
                SubscriptionError::not_found_for_user(query.user_id, query.service_name.clone())
            })?;

        // 3. Clamp and price
        let breakdown = subscription.cost_within(&window);
        if let Err(ref err) = breakdown {
            if err.is_not_found() {
                tracing::warn!(
                    subscription_id = %subscription.id,
                    window_start = %window.start(),
                    window_end = %window.end(),
                    "repository returned a subscription outside the window"
                );
            }
        }
        let breakdown = breakdown?;

        Ok(CalculateCostResult {
            service_name: subscription.service_name,
            user_id: subscription.user_id,
            cost: breakdown.cost,
            months_count: breakdown.months_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::subscription::test_support::{
        test_subscription, test_user_id, MockSubscriptionRepository,
    };
    use crate::domain::foundation::{DomainError, SubscriptionId};
    use crate::domain::subscription::{PageRequest, Subscription, SubscriptionDraft};
    use async_trait::async_trait;

    fn query(start: &str, end: &str) -> CalculateCostQuery {
        CalculateCostQuery {
            service_name: "Yandex Plus".to_string(),
            user_id: test_user_id(),
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    fn seeded() -> Arc<MockSubscriptionRepository> {
        Arc::new(MockSubscriptionRepository::with(vec![test_subscription(
            1, 400, "01-2025", Some("03-2025"),
        )]))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn full_window_costs_three_months() {
        let handler = CalculateCostHandler::new(seeded());

        let result = handler.handle(query("01-2025", "03-2025")).await.unwrap();

        assert_eq!(result.cost, 1200);
        assert_eq!(result.months_count, 3);
        assert_eq!(result.service_name, "Yandex Plus");
        assert_eq!(result.user_id, test_user_id());
    }

    #[tokio::test]
    async fn single_month_window_costs_one_month() {
        let handler = CalculateCostHandler::new(seeded());

        let result = handler.handle(query("02-2025", "02-2025")).await.unwrap();

        assert_eq!(result.cost, 400);
        assert_eq!(result.months_count, 1);
    }

    #[tokio::test]
    async fn window_enclosing_subscription_is_clamped() {
        let handler = CalculateCostHandler::new(seeded());

        let result = handler.handle(query("06-2024", "12-2025")).await.unwrap();

        assert_eq!(result.months_count, 3);
        assert_eq!(result.cost, 1200);
    }

    #[tokio::test]
    async fn partial_overlap_at_start_is_clamped() {
        let handler = CalculateCostHandler::new(seeded());

        let result = handler.handle(query("11-2024", "02-2025")).await.unwrap();

        assert_eq!(result.months_count, 2);
        assert_eq!(result.cost, 800);
    }

    #[tokio::test]
    async fn newest_matching_subscription_wins() {
        let repo = Arc::new(MockSubscriptionRepository::with(vec![
            test_subscription(1, 400, "01-2025", Some("03-2025")),
            test_subscription(2, 100, "02-2025", Some("06-2025")),
        ]));
        let handler = CalculateCostHandler::new(repo);

        let result = handler.handle(query("02-2025", "03-2025")).await.unwrap();

        assert_eq!(result.cost, 200);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Validation Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn empty_end_date_is_incorrect_date() {
        let repo = seeded();
        let handler = CalculateCostHandler::new(repo.clone());

        let result = handler.handle(query("01-2025", "")).await;

        assert!(matches!(result, Err(SubscriptionError::IncorrectDate { .. })));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn inverted_window_never_reaches_store() {
        let repo = seeded();
        let handler = CalculateCostHandler::new(repo.clone());

        let result = handler.handle(query("03-2025", "01-2025")).await;

        assert!(matches!(
            result,
            Err(SubscriptionError::EndDateBeforeStart { .. })
        ));
        assert_eq!(repo.call_count(), 0);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Not Found Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn disjoint_window_is_not_found_for_user() {
        let handler = CalculateCostHandler::new(seeded());

        let result = handler.handle(query("05-2025", "07-2025")).await;

        assert!(matches!(
            result,
            Err(SubscriptionError::NotFoundForUser { .. })
        ));
    }

    #[tokio::test]
    async fn other_service_is_not_found_for_user() {
        let handler = CalculateCostHandler::new(seeded());
        let mut q = query("01-2025", "03-2025");
        q.service_name = "Kinopoisk".to_string();

        let result = handler.handle(q).await;

        assert!(result.unwrap_err().is_not_found());
    }

    /// Repository that ignores the window and always returns the same row.
    struct LooseRepository(Subscription);

    #[async_trait]
    impl SubscriptionRepository for LooseRepository {
        async fn create(&self, _draft: &SubscriptionDraft) -> Result<SubscriptionId, DomainError> {
            Ok(self.0.id)
        }

        async fn find_by_id(
            &self,
            _id: SubscriptionId,
        ) -> Result<Option<Subscription>, DomainError> {
            Ok(Some(self.0.clone()))
        }

        async fn list(&self, _page: &PageRequest) -> Result<Vec<Subscription>, DomainError> {
            Ok(vec![self.0.clone()])
        }

        async fn update(&self, _subscription: &Subscription) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete(&self, _id: SubscriptionId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_overlapping(
            &self,
            _user_id: &UserId,
            _service_name: &str,
            _window: &BillingWindow,
        ) -> Result<Option<Subscription>, DomainError> {
            Ok(Some(self.0.clone()))
        }
    }

    #[tokio::test]
    async fn non_overlapping_row_from_store_is_not_found() {
        let loose = LooseRepository(test_subscription(1, 400, "01-2025", Some("03-2025")));
        let handler = CalculateCostHandler::new(Arc::new(loose));

        let result = handler.handle(query("06-2025", "08-2025")).await;

        assert!(matches!(
            result,
            Err(SubscriptionError::NotFoundForUser { .. })
        ));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn store_failure_is_internal() {
        let handler = CalculateCostHandler::new(Arc::new(MockSubscriptionRepository::failing()));

        let result = handler.handle(query("01-2025", "03-2025")).await;

        assert!(matches!(result, Err(SubscriptionError::Internal(_))));
    }
}
