//! Subscription Tracker - Subscription registry with cost queries
//!
//! This crate records which services users pay for, at month granularity,
//! and answers how much a user spends on a service over a window of months.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
