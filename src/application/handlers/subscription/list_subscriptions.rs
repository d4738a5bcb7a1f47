//! ListSubscriptionsHandler - Query handler for paging through subscriptions.

use std::sync::Arc;

use crate::domain::subscription::{PageRequest, Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Query for one page of subscriptions.
#[derive(Debug, Clone)]
pub struct ListSubscriptionsQuery {
    pub page: PageRequest,
}

/// Subscriptions ordered by id ascending. Never empty.
pub type ListSubscriptionsResult = Vec<Subscription>;

/// Handler for listing subscriptions.
///
/// An empty page is reported as `NoneListed` rather than an empty list.
pub struct ListSubscriptionsHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl ListSubscriptionsHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<ListSubscriptionsResult, SubscriptionError> {
        let subscriptions = self.repository.list(&query.page).await?;
        if subscriptions.is_empty() {
            tracing::debug!(
                limit = query.page.limit(),
                offset = query.page.offset(),
                "no subscriptions in page"
            );
            return Err(SubscriptionError::NoneListed);
        }
        Ok(subscriptions)
    }
}
