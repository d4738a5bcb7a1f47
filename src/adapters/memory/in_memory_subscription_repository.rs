//! In-Memory Subscription Repository
//!
//! Stores subscriptions in a process-local map.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SubscriptionId, UserId};
use crate::domain::subscription::{BillingWindow, PageRequest, Subscription, SubscriptionDraft};
use crate::ports::{subscription_not_found, SubscriptionRepository};

/// In-memory storage for subscriptions, ordered by id.
#[derive(Debug, Clone)]
pub struct InMemorySubscriptionRepository {
    subscriptions: Arc<RwLock<BTreeMap<SubscriptionId, Subscription>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemorySubscriptionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            subscriptions: Arc::new(RwLock::new(BTreeMap::new())),
            last_id: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Number of stored subscriptions
    pub async fn count(&self) -> usize {
        self.subscriptions.read().await.len()
    }
}

impl Default for InMemorySubscriptionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn create(&self, draft: &SubscriptionDraft) -> Result<SubscriptionId, DomainError> {
        let next = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let id = SubscriptionId::new(next)
            .map_err(|e| DomainError::database(format!("Failed to allocate id: {}", e)))?;

        let mut subscriptions = self.subscriptions.write().await;
        subscriptions.insert(id, draft.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions.get(&id).cloned())
    }

    async fn list(&self, page: &PageRequest) -> Result<Vec<Subscription>, DomainError> {
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self.subscriptions.write().await;
        match subscriptions.get_mut(&subscription.id) {
            Some(existing) => {
                *existing = subscription.clone();
                Ok(())
            }
            None => Err(subscription_not_found(subscription.id)),
        }
    }

    async fn delete(&self, id: SubscriptionId) -> Result<(), DomainError> {
        let mut subscriptions = self.subscriptions.write().await;
        subscriptions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| subscription_not_found(id))
    }

    async fn find_overlapping(
        &self,
        user_id: &UserId,
        service_name: &str,
        window: &BillingWindow,
    ) -> Result<Option<Subscription>, DomainError> {
        let subscriptions = self.subscriptions.read().await;
        let mut matches = subscriptions.values().rev().filter(|s| {
            &s.user_id == user_id
                && s.service_name == service_name
                && s.start_date <= window.end()
                && s.end_date >= window.start()
        });

        let newest = matches.next().cloned();
        if let (Some(chosen), Some(_)) = (&newest, matches.next()) {
            tracing::warn!(
                subscription_id = %chosen.id,
                user_id = %user_id,
                service_name = %service_name,
                "several subscriptions overlap the window, using the newest"
            );
        }
        Ok(newest)
    }
}
