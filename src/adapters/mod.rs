//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `postgres` - PostgreSQL repositories
//! - `memory` - In-memory repositories for tests and local runs

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{app_router, SubscriptionAppState};
pub use memory::InMemorySubscriptionRepository;
pub use postgres::PostgresSubscriptionRepository;
