//! Goalpost Core - Domain entities, services, and traits.
//!
//! This crate contains the client-side logic behind the goal-setting
//! dashboards: concurrent page loading, per-user aggregation, filtering and
//! pagination. It is transport-agnostic and defines traits that are
//! implemented by the `connect` crate.

pub mod autosave;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod filters;
pub mod goals;
pub mod history;
pub mod optimistic;
pub mod pagination;
pub mod pending;
pub mod periods;
pub mod reviews;
pub mod summary;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
