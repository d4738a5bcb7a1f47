//! Subscription handlers.
//!
//! ## Commands
//! - Creating, replacing and deleting subscriptions
//!
//! ## Queries
//! - Loading one subscription or a page of them
//! - Computing the cost of a subscription over a window of months

mod calculate_cost;
mod create_subscription;
mod delete_subscription;
mod get_subscription;
mod list_subscriptions;
mod update_subscription;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::SubscriptionRepository;

// Commands
pub use create_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
};
pub use delete_subscription::{DeleteSubscriptionCommand, DeleteSubscriptionHandler};
pub use update_subscription::{UpdateSubscriptionCommand, UpdateSubscriptionHandler};

// Queries
pub use calculate_cost::{CalculateCostHandler, CalculateCostQuery, CalculateCostResult};
pub use get_subscription::{GetSubscriptionHandler, GetSubscriptionQuery, GetSubscriptionResult};
pub use list_subscriptions::{
    ListSubscriptionsHandler, ListSubscriptionsQuery, ListSubscriptionsResult,
};

/// Resolves a requested id. Integers the store never assigns are not found
/// rather than invalid input.
fn existing_id(raw: i64) -> Result<SubscriptionId, SubscriptionError> {
    SubscriptionId::new(raw).map_err(|_| {
        tracing::debug!(subscription_id = raw, "id outside the assigned range");
        SubscriptionError::unknown_id(raw)
    })
}

/// Every subscription handler wired to one repository.
#[derive(Clone)]
pub struct SubscriptionHandlers {
    pub create: Arc<CreateSubscriptionHandler>,
    pub get: Arc<GetSubscriptionHandler>,
    pub list: Arc<ListSubscriptionsHandler>,
    pub update: Arc<UpdateSubscriptionHandler>,
    pub delete: Arc<DeleteSubscriptionHandler>,
    pub cost: Arc<CalculateCostHandler>,
}

impl SubscriptionHandlers {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self {
            create: Arc::new(CreateSubscriptionHandler::new(repository.clone())),
            get: Arc::new(GetSubscriptionHandler::new(repository.clone())),
            list: Arc::new(ListSubscriptionsHandler::new(repository.clone())),
            update: Arc::new(UpdateSubscriptionHandler::new(repository.clone())),
            delete: Arc::new(DeleteSubscriptionHandler::new(repository.clone())),
            cost: Arc::new(CalculateCostHandler::new(repository)),
        }
    }
}
