//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (month value object, IDs, errors)
//! - `subscription` - Subscription records, validation and cost computation

pub mod foundation;
pub mod subscription;
