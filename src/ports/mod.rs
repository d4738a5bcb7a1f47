//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SubscriptionRepository` - Subscription storage and overlap lookup

mod subscription_repository;

pub use subscription_repository::{subscription_not_found, SubscriptionRepository};
