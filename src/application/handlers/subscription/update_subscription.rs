//! UpdateSubscriptionHandler - Command handler for replacing a subscription.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{SubscriptionDraft, SubscriptionError};
use crate::ports::SubscriptionRepository;

use super::existing_id;

/// Command to replace every field of an existing subscription.
///
/// Runs the same validation and end-date defaulting as creation. Validation
/// failures are reported before an unknown id.
#[derive(Debug, Clone)]
pub struct UpdateSubscriptionCommand {
    pub id: i64,
    pub service_name: String,
    pub price: i64,
    pub user_id: UserId,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Handler for full-replace updates.
pub struct UpdateSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl UpdateSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateSubscriptionCommand) -> Result<(), SubscriptionError> {
        let draft = SubscriptionDraft::new(
            cmd.service_name,
            cmd.price,
            cmd.user_id,
            &cmd.start_date,
            cmd.end_date.as_deref(),
        )?;
        let subscription = draft.with_id(existing_id(cmd.id)?);

        match self.repository.update(&subscription).await {
            Ok(()) => {
                tracing::info!(subscription_id = %subscription.id, "subscription updated");
                Ok(())
            }
            Err(err) => {
                let err = SubscriptionError::from(err);
                if err.is_not_found() {
                    tracing::debug!(
                        subscription_id = %subscription.id,
                        "update of unknown subscription"
                    );
                }
                Err(err)
            }
        }
    }
}
