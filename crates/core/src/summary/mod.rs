//! Summary module - per-user aggregation of goal records.

mod overview;
mod summary_model;
mod summary_service;

pub use overview::ComplianceOverview;
pub use summary_model::{CategoryCounts, StatusCounts, UserSummary};
pub use summary_service::aggregate_by_user;
