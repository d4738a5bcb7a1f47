//! DeleteSubscriptionHandler - Command handler for removing a subscription.

use std::sync::Arc;

use crate::domain::subscription::SubscriptionError;
use crate::ports::SubscriptionRepository;

use super::existing_id;

/// Command to delete a subscription by id.
#[derive(Debug, Clone)]
pub struct DeleteSubscriptionCommand {
    pub id: i64,
}

/// Handler for deleting subscriptions.
pub struct DeleteSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl DeleteSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSubscriptionCommand) -> Result<(), SubscriptionError> {
        let id = existing_id(cmd.id)?;
        self.repository.delete(id).await?;
        tracing::info!(subscription_id = %id, "subscription deleted");
        Ok(())
    }
}
