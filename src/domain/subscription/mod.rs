//! Subscription domain module.
//!
//! Handles subscription records and the cost they accrue over a window of
//! months.
//!
//! # Module Structure
//!
//! - `aggregate` - Subscription entity and its validated draft
//! - `cost` - Billing window and cost computation
//! - `errors` - Subscription error taxonomy
//! - `pagination` - Page selection for listing

mod aggregate;
mod cost;
mod errors;
mod pagination;

pub use aggregate::{Subscription, SubscriptionDraft};
pub use cost::{BillingWindow, CostBreakdown};
pub use errors::SubscriptionError;
pub use pagination::PageRequest;
