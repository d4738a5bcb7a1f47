//! Subscription-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | IncorrectDate | 400 |
//! | EndDateBeforeStart | 400 |
//! | IncorrectValue | 400 |
//! | NotFound | 404 |
//! | NoneListed | 404 |
//! | NotFoundForUser | 404 |
//! | Internal | 500 |

use crate::domain::foundation::{
    DomainError, ErrorCode, Month, SubscriptionId, UserId, ValidationError,
};

/// Subscription-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// Malformed or out-of-range `MM-YYYY` text.
    IncorrectDate { field: String, message: String },

    /// End month precedes start month.
    EndDateBeforeStart { start: Month, end: Month },

    /// Any other rejected input value (pagination, price, service name, id).
    IncorrectValue { field: String, message: String },

    /// No subscription with this id. Holds the id as requested, which may
    /// be one the store could never have assigned.
    NotFound(i64),

    /// The requested page holds no subscriptions.
    NoneListed,

    /// No subscription of this user and service overlaps the window.
    NotFoundForUser { user_id: UserId, service_name: String },

    /// Persistence or unexpected failure. The message is for operators only.
    Internal(String),
}

impl SubscriptionError {
    pub fn incorrect_date(err: ValidationError) -> Self {
        SubscriptionError::IncorrectDate {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }

    pub fn end_date_before_start(start: Month, end: Month) -> Self {
        SubscriptionError::EndDateBeforeStart { start, end }
    }

    pub fn incorrect_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        SubscriptionError::IncorrectValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(id: SubscriptionId) -> Self {
        SubscriptionError::NotFound(id.value())
    }

    /// Not-found for a well-formed integer that is not a valid store id.
    pub fn unknown_id(raw: i64) -> Self {
        SubscriptionError::NotFound(raw)
    }

    pub fn not_found_for_user(user_id: UserId, service_name: impl Into<String>) -> Self {
        SubscriptionError::NotFoundForUser {
            user_id,
            service_name: service_name.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        SubscriptionError::Internal(message.into())
    }

    /// True for the validation family that is reported before any store call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubscriptionError::IncorrectDate { .. }
                | SubscriptionError::EndDateBeforeStart { .. }
                | SubscriptionError::IncorrectValue { .. }
        )
    }

    /// True for the not-found family.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SubscriptionError::NotFound(_)
                | SubscriptionError::NoneListed
                | SubscriptionError::NotFoundForUser { .. }
        )
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::IncorrectDate { .. } => ErrorCode::IncorrectDate,
            SubscriptionError::EndDateBeforeStart { .. } => ErrorCode::EndDateBeforeStart,
            SubscriptionError::IncorrectValue { .. } => ErrorCode::IncorrectValue,
            SubscriptionError::NotFound(_)
            | SubscriptionError::NoneListed
            | SubscriptionError::NotFoundForUser { .. } => ErrorCode::NotFound,
            SubscriptionError::Internal(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SubscriptionError::IncorrectDate { message, .. } => {
                format!("Incorrect date: {}", message)
            }
            SubscriptionError::EndDateBeforeStart { start, end } => {
                format!("End date {} is before start date {}", end, start)
            }
            SubscriptionError::IncorrectValue { field, message } => {
                format!("Incorrect value for '{}': {}", field, message)
            }
            SubscriptionError::NotFound(id) => format!("Subscription not found: {}", id),
            SubscriptionError::NoneListed => "No subscriptions in the requested page".to_string(),
            SubscriptionError::NotFoundForUser {
                user_id,
                service_name,
            } => format!(
                "No subscription to '{}' for user {} overlaps the requested period",
                service_name, user_id
            ),
            SubscriptionError::Internal(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubscriptionError {}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => match err
                .details
                .get("id")
                .and_then(|id| id.parse::<i64>().ok())
            {
                Some(id) => SubscriptionError::NotFound(id),
                None => SubscriptionError::Internal(err.to_string()),
            },
            _ => SubscriptionError::Internal(err.to_string()),
        }
    }
}
