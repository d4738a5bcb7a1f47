//! Cost of a subscription over a billing window.

use crate::domain::foundation::Month;

use super::{Subscription, SubscriptionError};

/// Month range a caller asks the cost for. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingWindow {
    start: Month,
    end: Month,
}

impl BillingWindow {
    /// Parses both ends of the window.
    ///
    /// Neither end is defaulted: an empty string is an `IncorrectDate`.
    pub fn parse(start: &str, end: &str) -> Result<Self, SubscriptionError> {
        let start = Month::parse("start_date", start).map_err(SubscriptionError::incorrect_date)?;
        let end = Month::parse("end_date", end).map_err(SubscriptionError::incorrect_date)?;
        Self::new(start, end)
    }

    pub fn new(start: Month, end: Month) -> Result<Self, SubscriptionError> {
        if end < start {
            return Err(SubscriptionError::end_date_before_start(start, end));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Month {
        self.start
    }

    pub fn end(&self) -> Month {
        self.end
    }
}

/// Result of the cost computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBreakdown {
    /// Billed months inside the window, always at least 1.
    pub months_count: i64,
    /// `months_count * price`.
    pub cost: i64,
}

impl Subscription {
    /// Computes what this subscription costs inside `window`.
    ///
    /// The window is clamped to the subscription's own range and every
    /// month of the clamped range is billed at full price. Returns
    /// `NotFoundForUser` when the two ranges do not intersect.
    pub fn cost_within(&self, window: &BillingWindow) -> Result<CostBreakdown, SubscriptionError> {
        let start = window.start.max(self.start_date);
        let end = window.end.min(self.end_date);

        let months_count = end.months_since_inclusive(&start);
        if months_count < 1 {
            return Err(SubscriptionError::not_found_for_user(
                self.user_id,
                self.service_name.clone(),
            ));
        }

        let cost = months_count.checked_mul(self.price).ok_or_else(|| {
            SubscriptionError::internal(format!(
                "cost overflow: {} months at price {}",
                months_count, self.price
            ))
        })?;

        Ok(CostBreakdown { months_count, cost })
    }
}
