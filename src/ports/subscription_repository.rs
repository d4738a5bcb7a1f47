//! Subscription repository port.
//!
//! Defines the contract for persisting and retrieving subscription records.
//! Values reach the repository already validated; implementations only store
//! and look up.
//!
//! # Example
//!
//! ```ignore
//! async fn open_ended(
//!     repo: &dyn SubscriptionRepository,
//!     id: SubscriptionId,
//! ) -> Result<bool, DomainError> {
//!     Ok(repo
//!         .find_by_id(id)
//!         .await?
//!         .map(|sub| sub.is_open_ended())
//!         .unwrap_or(false))
//! }
//! ```

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, UserId};
use crate::domain::subscription::{BillingWindow, PageRequest, Subscription, SubscriptionDraft};
use async_trait::async_trait;

/// Repository port for subscription persistence.
///
/// Dropping a returned future abandons the underlying call.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Persist a new subscription and return its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, draft: &SubscriptionDraft) -> Result<SubscriptionId, DomainError>;

    /// Find a subscription by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: SubscriptionId) -> Result<Option<Subscription>, DomainError>;

    /// List one page of subscriptions ordered by id ascending.
    ///
    /// An out-of-range page yields an empty vector.
    async fn list(&self, page: &PageRequest) -> Result<Vec<Subscription>, DomainError>;

    /// Replace every field of an existing subscription.
    ///
    /// Replacing a row with identical values succeeds.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no row has this id
    /// - `DatabaseError` on persistence failure
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Delete a subscription.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no row has this id
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: SubscriptionId) -> Result<(), DomainError>;

    /// Find the subscription of `user_id` to `service_name` whose range
    /// intersects `window`.
    ///
    /// When several match, the one with the highest id is returned.
    async fn find_overlapping(
        &self,
        user_id: &UserId,
        service_name: &str,
        window: &BillingWindow,
    ) -> Result<Option<Subscription>, DomainError>;
}

/// Builds the not-found error repositories return from `update` and `delete`.
pub fn subscription_not_found(id: SubscriptionId) -> DomainError {
    DomainError::new(ErrorCode::NotFound, "Subscription not found")
        .with_detail("id", id.to_string())
}
