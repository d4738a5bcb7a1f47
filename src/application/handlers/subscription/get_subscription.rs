//! GetSubscriptionHandler - Query handler for loading one subscription.

use std::sync::Arc;

use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

use super::existing_id;

/// Query to load a subscription by id.
#[derive(Debug, Clone)]
pub struct GetSubscriptionQuery {
    pub id: i64,
}

pub type GetSubscriptionResult = Subscription;

/// Handler for loading a single subscription.
pub struct GetSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl GetSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetSubscriptionQuery,
    ) -> Result<GetSubscriptionResult, SubscriptionError> {
        let id = existing_id(query.id)?;
        match self.repository.find_by_id(id).await? {
            Some(subscription) => Ok(subscription),
            None => {
                tracing::debug!(subscription_id = %id, "subscription not found");
                Err(SubscriptionError::not_found(id))
            }
        }
    }
}
