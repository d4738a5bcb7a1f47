//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSubscriptionRepository` - Subscription storage and overlap lookup

mod subscription_repository;

pub use subscription_repository::PostgresSubscriptionRepository;
