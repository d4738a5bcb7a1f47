//! Foundation module - Shared domain primitives.
//!
//! Identifiers, the month value object and the error types that form the
//! vocabulary of the subscription domain.

mod errors;
mod ids;
mod month;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SubscriptionId, UserId};
pub use month::Month;
