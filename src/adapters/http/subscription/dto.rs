//! HTTP DTOs for subscription endpoints.
//!
//! These types decouple the HTTP API from domain types. Field names are
//! snake_case on the wire and dates travel as `MM-YYYY` text.

use serde::{Deserialize, Serialize};

use crate::application::CalculateCostResult;
use crate::domain::subscription::Subscription;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a subscription.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub service_name: String,
    pub price: i64,
    pub user_id: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Request to replace an existing subscription.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubscriptionRequest {
    pub id: i64,
    pub service_name: String,
    pub price: i64,
    pub user_id: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Request for the cost of a subscription over a window.
///
/// Missing dates deserialize as empty text and are rejected as incorrect dates.
#[derive(Debug, Clone, Deserialize)]
pub struct CostRequest {
    pub service_name: String,
    pub user_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// Query parameters for listing subscriptions.
///
/// Kept as raw text so malformed values surface as `INCORRECT_VALUE`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubscriptionsParams {
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscriptionResponse {
    pub success: bool,
    pub subscription_id: i64,
}

/// Response for successful update and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Subscription view for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub id: i64,
    pub service_name: String,
    pub price: i64,
    pub user_id: String,
    pub start_date: String,
    /// Empty for open-ended subscriptions, in which case it is omitted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_date: String,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(sub: Subscription) -> Self {
        Self {
            id: sub.id.value(),
            start_date: sub.start_date.to_string(),
            end_date: sub.end_date.format_end(),
            service_name: sub.service_name,
            price: sub.price,
            user_id: sub.user_id.to_string(),
        }
    }
}

/// Cost query response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostResponse {
    pub service_name: String,
    pub user_id: String,
    pub cost: i64,
    pub months_count: i64,
}

impl From<CalculateCostResult> for CostResponse {
    fn from(result: CalculateCostResult) -> Self {
        Self {
            service_name: result.service_name,
            user_id: result.user_id.to_string(),
            cost: result.cost,
            months_count: result.months_count,
        }
    }
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}
