//! HTTP handlers for subscription endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    CalculateCostQuery, CreateSubscriptionCommand, DeleteSubscriptionCommand,
    GetSubscriptionQuery, ListSubscriptionsQuery, SubscriptionHandlers,
    UpdateSubscriptionCommand,
};
use crate::domain::foundation::UserId;
use crate::domain::subscription::{PageRequest, SubscriptionError};
use crate::ports::SubscriptionRepository;

use super::dto::{
    CostRequest, CostResponse, CreateSubscriptionRequest, CreateSubscriptionResponse,
    ErrorResponse, HealthResponse, ListSubscriptionsParams, SubscriptionResponse,
    SuccessResponse, UpdateSubscriptionRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state, cloned for each request.
#[derive(Clone)]
pub struct SubscriptionAppState {
    pub handlers: SubscriptionHandlers,
}

impl SubscriptionAppState {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self {
            handlers: SubscriptionHandlers::new(repository),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Input Parsing
// ════════════════════════════════════════════════════════════════════════════════

fn parse_user_id(raw: &str) -> Result<UserId, SubscriptionError> {
    raw.parse::<UserId>()
        .map_err(|e| SubscriptionError::incorrect_value("user_id", e.to_string()))
}

/// Only non-integer text is rejected here; whether the id exists is up to
/// the application layer.
fn parse_path_id(raw: &str) -> Result<i64, SubscriptionError> {
    raw.parse::<i64>().map_err(|_| {
        SubscriptionError::incorrect_value("id", format!("expected an integer, got '{}'", raw))
    })
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, SubscriptionApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| SubscriptionApiError::BadRequest(rejection.body_text()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /subscription/:id - Load one subscription
pub async fn get_subscription(
    State(state): State<SubscriptionAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let query = GetSubscriptionQuery {
        id: parse_path_id(&id)?,
    };

    let subscription = state.handlers.get.handle(query).await?;

    Ok(Json(SubscriptionResponse::from(subscription)))
}

/// GET /subscription?limit=&offset= - Load one page of subscriptions
pub async fn list_subscriptions(
    State(state): State<SubscriptionAppState>,
    params: Result<Query<ListSubscriptionsParams>, QueryRejection>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let Query(params) =
        params.map_err(|rejection| SubscriptionApiError::BadRequest(rejection.body_text()))?;
    let query = ListSubscriptionsQuery {
        page: PageRequest::parse(params.limit.as_deref(), params.offset.as_deref())?,
    };

    let subscriptions = state.handlers.list.handle(query).await?;

    let response: Vec<SubscriptionResponse> = subscriptions
        .into_iter()
        .map(SubscriptionResponse::from)
        .collect();
    Ok(Json(response))
}

/// POST /subscription/cost - Cost of a subscription over a window of months
pub async fn calculate_cost(
    State(state): State<SubscriptionAppState>,
    payload: Result<Json<CostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let request = body(payload)?;
    let query = CalculateCostQuery {
        user_id: parse_user_id(&request.user_id)?,
        service_name: request.service_name,
        start_date: request.start_date,
        end_date: request.end_date,
    };

    let result = state.handlers.cost.handle(query).await?;

    Ok(Json(CostResponse::from(result)))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PATCH/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /subscription - Create a subscription
pub async fn create_subscription(
    State(state): State<SubscriptionAppState>,
    payload: Result<Json<CreateSubscriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let request = body(payload)?;
    let cmd = CreateSubscriptionCommand {
        user_id: parse_user_id(&request.user_id)?,
        service_name: request.service_name,
        price: request.price,
        start_date: request.start_date,
        end_date: request.end_date,
    };

    let id = state.handlers.create.handle(cmd).await?;

    Ok(Json(CreateSubscriptionResponse {
        success: true,
        subscription_id: id.value(),
    }))
}

/// PATCH /subscription - Replace every field of a subscription
pub async fn update_subscription(
    State(state): State<SubscriptionAppState>,
    payload: Result<Json<UpdateSubscriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let request = body(payload)?;
    let cmd = UpdateSubscriptionCommand {
        id: request.id,
        user_id: parse_user_id(&request.user_id)?,
        service_name: request.service_name,
        price: request.price,
        start_date: request.start_date,
        end_date: request.end_date,
    };

    state.handlers.update.handle(cmd).await?;

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /subscription/:id - Delete a subscription
pub async fn delete_subscription(
    State(state): State<SubscriptionAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let cmd = DeleteSubscriptionCommand {
        id: parse_path_id(&id)?,
    };

    state.handlers.delete.handle(cmd).await?;

    Ok(Json(SuccessResponse::ok()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum SubscriptionApiError {
    /// Malformed request body or query string.
    BadRequest(String),
    Domain(SubscriptionError),
}

impl From<SubscriptionError> for SubscriptionApiError {
    fn from(err: SubscriptionError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for SubscriptionApiError {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            SubscriptionApiError::BadRequest(message) => {
                let body = ErrorResponse::bad_request(message);
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            SubscriptionApiError::Domain(err) => err,
        };

        let status = if err.is_validation() {
            StatusCode::BAD_REQUEST
        } else if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let message = match &err {
            SubscriptionError::Internal(detail) => {
                tracing::error!(error = %detail, "subscription request failed");
                "Internal server error".to_string()
            }
            _ => err.message(),
        };

        let body = ErrorResponse::new(err.code().to_string(), message);
        (status, Json(body)).into_response()
    }
}
