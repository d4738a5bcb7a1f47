//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::subscription::{
    CalculateCostHandler, CalculateCostQuery, CalculateCostResult, CreateSubscriptionCommand,
    CreateSubscriptionHandler, CreateSubscriptionResult, DeleteSubscriptionCommand,
    DeleteSubscriptionHandler, GetSubscriptionHandler, GetSubscriptionQuery,
    GetSubscriptionResult, ListSubscriptionsHandler, ListSubscriptionsQuery,
    ListSubscriptionsResult, SubscriptionHandlers, UpdateSubscriptionCommand,
    UpdateSubscriptionHandler,
};
