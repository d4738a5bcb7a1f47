//! Subscription entity and its pre-persistence draft.

use crate::domain::foundation::{Month, SubscriptionId, UserId};

use super::SubscriptionError;

/// A persisted subscription.
///
/// Invariant: `start_date <= end_date`. An open-ended subscription carries the
/// sentinel end month (see [`Month::is_open_ended`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub service_name: String,
    /// Amount charged per billing month.
    pub price: i64,
    pub user_id: UserId,
    /// First billed month.
    pub start_date: Month,
    /// Last billed month, inclusive.
    pub end_date: Month,
}

/// Validated subscription values that have not been assigned an id yet.
///
/// Both create and full-replace updates go through [`SubscriptionDraft::new`],
/// so every value reaching the store already satisfies the entity invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionDraft {
    pub service_name: String,
    pub price: i64,
    pub user_id: UserId,
    pub start_date: Month,
    pub end_date: Month,
}

impl SubscriptionDraft {
    /// Validates raw input.
    ///
    /// Order of checks: start date, end date (a missing or empty end date
    /// becomes the open-ended sentinel first), date ordering, then service
    /// name and price.
    pub fn new(
        service_name: impl Into<String>,
        price: i64,
        user_id: UserId,
        start_date: &str,
        end_date: Option<&str>,
    ) -> Result<Self, SubscriptionError> {
        let start_date =
            Month::parse("start_date", start_date).map_err(SubscriptionError::incorrect_date)?;
        let end_date =
            Month::parse_end("end_date", end_date).map_err(SubscriptionError::incorrect_date)?;

        if end_date < start_date {
            return Err(SubscriptionError::end_date_before_start(start_date, end_date));
        }

        let service_name = service_name.into();
        if service_name.trim().is_empty() {
            return Err(SubscriptionError::incorrect_value(
                "service_name",
                "must not be empty",
            ));
        }
        if price < 0 {
            return Err(SubscriptionError::incorrect_value(
                "price",
                format!("must not be negative, got {}", price),
            ));
        }

        Ok(Self {
            service_name,
            price,
            user_id,
            start_date,
            end_date,
        })
    }

    /// Attaches an identity, producing the full record.
    pub fn with_id(self, id: SubscriptionId) -> Subscription {
        Subscription {
            id,
            service_name: self.service_name,
            price: self.price,
            user_id: self.user_id,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

impl Subscription {
    /// True when no end date was supplied.
    pub fn is_open_ended(&self) -> bool {
        self.end_date.is_open_ended()
    }

    /// Length of the subscription in billed months.
    pub fn duration_months(&self) -> i64 {
        self.end_date.months_since_inclusive(&self.start_date)
    }
}
