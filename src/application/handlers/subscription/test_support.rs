//! Mock repository shared by the subscription handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, UserId};
use crate::domain::subscription::{BillingWindow, PageRequest, Subscription, SubscriptionDraft};
use crate::ports::{subscription_not_found, SubscriptionRepository};

pub(super) const USER: &str = "dceb1963-e152-47ff-a562-81a360627309";

pub(super) fn test_user_id() -> UserId {
    USER.parse().unwrap()
}

pub(super) fn test_subscription(id: i64, price: i64, start: &str, end: Option<&str>) -> Subscription {
    SubscriptionDraft::new("Yandex Plus", price, test_user_id(), start, end)
        .unwrap()
        .with_id(SubscriptionId::new(id).unwrap())
}

pub(super) struct MockSubscriptionRepository {
    pub subscriptions: Mutex<Vec<Subscription>>,
    pub calls: Mutex<Vec<&'static str>>,
    fail: bool,
}

impl MockSubscriptionRepository {
    pub fn new() -> Self {
        Self {
            subscriptions: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn with(subscriptions: Vec<Subscription>) -> Self {
        Self {
            subscriptions: Mutex::new(subscriptions),
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            subscriptions: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: &'static str) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated database failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptionRepository {
    async fn create(&self, draft: &SubscriptionDraft) -> Result<SubscriptionId, DomainError> {
        self.record("create")?;
        let mut subs = self.subscriptions.lock().unwrap();
        let next = subs.iter().map(|s| s.id.value()).max().unwrap_or(0) + 1;
        let id = SubscriptionId::new(next).unwrap();
        subs.push(draft.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        self.record("find_by_id")?;
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list(&self, page: &PageRequest) -> Result<Vec<Subscription>, DomainError> {
        self.record("list")?;
        let mut subs = self.subscriptions.lock().unwrap().clone();
        subs.sort_by_key(|s| s.id);
        Ok(subs
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.record("update")?;
        let mut subs = self.subscriptions.lock().unwrap();
        match subs.iter_mut().find(|s| s.id == subscription.id) {
            Some(existing) => {
                *existing = subscription.clone();
                Ok(())
            }
            None => Err(subscription_not_found(subscription.id)),
        }
    }

    async fn delete(&self, id: SubscriptionId) -> Result<(), DomainError> {
        self.record("delete")?;
        let mut subs = self.subscriptions.lock().unwrap();
        let before = subs.len();
        subs.retain(|s| s.id != id);
        if subs.len() == before {
            return Err(subscription_not_found(id));
        }
        Ok(())
    }

    async fn find_overlapping(
        &self,
        user_id: &UserId,
        service_name: &str,
        window: &BillingWindow,
    ) -> Result<Option<Subscription>, DomainError> {
        self.record("find_overlapping")?;
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| &s.user_id == user_id && s.service_name == service_name)
            .filter(|s| s.start_date <= window.end() && s.end_date >= window.start())
            .max_by_key(|s| s.id)
            .cloned())
    }
}
