//! HTTP adapter for subscription endpoints.
//!
//! Exposes the subscription domain via REST API:
//! - `POST /subscription` - Create a subscription
//! - `GET /subscription/:id` - Load a subscription
//! - `GET /subscription?limit=&offset=` - List subscriptions
//! - `PATCH /subscription` - Replace a subscription
//! - `DELETE /subscription/:id` - Delete a subscription
//! - `POST /subscription/cost` - Cost of a subscription over a window

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{SubscriptionApiError, SubscriptionAppState};
pub use routes::subscription_router;
